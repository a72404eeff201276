use crate::artifact::Artifact;
use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol,
    transports::http::{Client, Http},
};
use anyhow::Result;
use tracing::info;

sol! {
    #[sol(rpc, all_derives)]
    contract SoulboundToken {
        function mintPrice() external view returns (uint256);
        function mintTo(address recipient) external payable returns (uint256);
    }
}

/// Deploys the token contract and returns its address. The mint price read
/// back from the chain is logged so a bad constructor encoding shows up
/// immediately.
pub async fn deploy(
    artifact: &Artifact,
    mint_price: U256,
    provider: impl Provider<Http<Client>, Ethereum> + Clone,
) -> Result<Address> {
    info!("Deploying {}", artifact.contract_name);
    let tx = TransactionRequest::default().with_deploy_code(artifact.init_code(mint_price));
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
    if !receipt.status() {
        anyhow::bail!("deployment transaction {} reverted", receipt.transaction_hash);
    }
    let address = receipt.contract_address.ok_or_else(|| {
        anyhow::anyhow!(
            "receipt for {} carries no contract address",
            artifact.contract_name
        )
    })?;

    let token = SoulboundToken::new(address, &provider);
    let configured = token.mintPrice().call().await?._0;
    info!("{} deployed with mint price {} wei", artifact.contract_name, configured);
    Ok(address)
}
