//! In-memory scan history.

use std::collections::VecDeque;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use cardsift_core::ScanReport;

use crate::models::{ScanSource, StoredScan};

/// Bounded, newest-first history of scans.
///
/// Display state only, like a session result panel: nothing survives a
/// restart. When the store is full the oldest scan is dropped.
pub struct ScanStore {
    scans: RwLock<VecDeque<StoredScan>>,
    capacity: usize,
}

impl ScanStore {
    /// Create a store keeping at most `capacity` scans.
    pub fn new(capacity: usize) -> Self {
        Self {
            scans: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Store a scan outcome and return the stored record.
    pub async fn insert(
        &self,
        source: ScanSource,
        filename: Option<String>,
        input: &str,
        report: ScanReport,
    ) -> StoredScan {
        let scan = StoredScan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source,
            filename,
            input_hash: hash_content(input),
            report,
        };

        let mut scans = self.scans.write().await;
        scans.push_front(scan.clone());
        scans.truncate(self.capacity);

        scan
    }

    /// Get one stored scan by id.
    pub async fn get(&self, id: Uuid) -> Option<StoredScan> {
        self.scans.read().await.iter().find(|s| s.id == id).cloned()
    }

    /// All stored scans, newest first.
    pub async fn recent(&self) -> Vec<StoredScan> {
        self.scans.read().await.iter().cloned().collect()
    }

    /// Drop all stored scans, returning how many were removed.
    pub async fn clear(&self) -> usize {
        let mut scans = self.scans.write().await;
        let cleared = scans.len();
        scans.clear();
        cleared
    }
}

/// Calculate SHA256 hash of content.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
