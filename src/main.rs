use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    agroadvisor::run().await
}
