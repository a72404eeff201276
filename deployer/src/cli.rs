use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    /// Checks the balance of the configured account
    CheckBalance,
    /// Deploys the token contract to the configured network
    Deploy(DeployConfig),
}

#[derive(Clone, Parser, Serialize)]
pub struct DeployConfig {
    /// Path to the compiled contract artifact
    #[arg(
        long,
        default_value = "artifacts/contracts/SoulboundToken.sol/SoulboundToken.json"
    )]
    pub artifact: PathBuf,

    /// Mint price passed to the constructor, in ether
    #[arg(long, default_value = "19")]
    pub mint_price: String,
}
