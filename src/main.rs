#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = items_api::run().await {
        eprintln!("items-api fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
