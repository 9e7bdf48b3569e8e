#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cardsift_backend::run().await
}
