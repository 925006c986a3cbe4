#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    deli_shop::run().await
}
