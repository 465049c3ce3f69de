use crate::config::RelayConfig;
use crate::error::Result;
use crate::router::RouterClient;

/// Execute the `check` command: one login exchange against the router.
pub async fn execute() -> Result<()> {
    let config = RelayConfig::load()?;
    let client = RouterClient::with_http(config.router.clone());

    println!(
        "Checking router at http://{}:{} ...",
        config.router.host, config.router.port
    );

    client.authenticate().await?;
    println!("Router connection OK");
    Ok(())
}
