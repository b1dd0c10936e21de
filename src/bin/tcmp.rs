#[tokio::main]
async fn main() -> anyhow::Result<()> {
    transcript_compare_cli::run().await
}
