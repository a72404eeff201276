use crate::env::{provider_url, PRIVATE_KEY};
use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::{Client, Http},
};
use anyhow::{Ok, Result};
use settings::Source;
use std::str::FromStr;

/// A signing account bound to the provider it transacts through.
pub struct Account<P> {
    signer: PrivateKeySigner,
    provider: P,
}

impl<P: Provider<Http<Client>, Ethereum>> Account<P> {
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub async fn balance(&self) -> Result<U256> {
        let balance = self.provider.get_balance(self.address()).await?;
        Ok(balance)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// Builds the deployment account from the configured private key, with its
/// transactions signed locally and sent through the configured endpoint.
// The private key is resolved before the endpoint settings so a missing key
// is reported first.
pub fn create_account(
    env: &impl Source,
) -> Result<Account<impl Provider<Http<Client>, Ethereum> + Clone>> {
    let signer = PrivateKeySigner::from_str(PRIVATE_KEY.resolve(env)?.as_str())?;
    let wallet = EthereumWallet::from(signer.clone());
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .on_http(provider_url(env)?);
    Ok(Account { signer, provider })
}
