#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocab_engine::run().await
}
