use alloy::primitives::utils::parse_ether;
use anyhow::{Ok, Result};
use clap::Parser;
use deployer::{
    account::create_account, artifact::Artifact, cli::Command, contract,
    env::init_console_subscriber,
};
use settings::ProcessEnv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_console_subscriber();
    match Command::parse() {
        Command::CheckBalance => {
            let account = create_account(&ProcessEnv)?;
            let balance = account.balance().await?;
            println!("Account balance for {}: {}", account.address(), balance);
            Ok(())
        }
        Command::Deploy(config) => {
            info!("{}", serde_json::to_string_pretty(&config).unwrap());
            let account = create_account(&ProcessEnv)?;
            let artifact = Artifact::load(&config.artifact)?;
            let mint_price = parse_ether(config.mint_price.as_str())?;
            let address =
                contract::deploy(&artifact, mint_price, account.provider().clone()).await?;
            info!("Contract deployed to: {}", address);
            println!("{}", address);
            Ok(())
        }
    }
}
