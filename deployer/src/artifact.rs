use alloy::{
    primitives::{Bytes, U256},
    sol_types::SolValue,
};
use anyhow::{Ok, Result};
use serde::Deserialize;
use std::{fs::File, path::Path};
use tracing::info;

/// The fields of a compiled contract artifact the deployment needs. Remaining
/// artifact fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading contract artifact from: {}", path.display());
        let file = File::open(path)?;
        let artifact = serde_json::from_reader(file)?;
        Ok(artifact)
    }

    /// Creation bytecode followed by the abi-encoded constructor argument.
    pub fn init_code(&self, mint_price: U256) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&mint_price.abi_encode());
        code.into()
    }
}
