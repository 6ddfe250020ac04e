//! Type definitions used throughout the deploy scripts

use alloy::{
    json_abi::JsonAbi,
    primitives::{Address, Bytes, B256},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{PROJECT_ABI, PROJECT_BYTECODE},
    errors::ScriptError,
};

/// A record of a completed deployment, written to `deployment-<network>.json`
/// and consumed externally (e.g. by frontend integration tooling)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploymentRecord {
    /// The name of the network the contract was deployed to
    pub network: String,
    /// The address the contract was deployed at, 0x-prefixed checksum hex
    pub contract_address: String,
    /// The address of the deployer account
    pub deployer: String,
    /// The number of the block the deployment transaction was mined in
    pub block_number: u64,
    /// The hash of the deployment transaction
    pub transaction_hash: String,
    /// The wall-clock time the record was created, ISO-8601 UTC
    /// with millisecond precision
    pub timestamp: String,
}

impl DeploymentRecord {
    /// Assemble a record from the deployment receipt data,
    /// timestamping it with the current wall-clock time
    pub fn new(
        network: &str,
        contract_address: Address,
        deployer: Address,
        block_number: u64,
        transaction_hash: B256,
    ) -> Self {
        Self {
            network: network.to_owned(),
            contract_address: contract_address.to_string(),
            deployer: deployer.to_string(),
            block_number,
            transaction_hash: transaction_hash.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// The compiled Project contract artifact: an ABI / creation-bytecode pair
pub struct ProjectArtifact {
    /// The contract's ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

impl ProjectArtifact {
    /// Parse the embedded artifact files.
    ///
    /// The contract is deployed without constructor arguments, so an ABI
    /// declaring a parameterized constructor is rejected here rather than
    /// letting the deployment transaction revert.
    pub fn parse() -> Result<Self, ScriptError> {
        let abi: JsonAbi = serde_json::from_str(PROJECT_ABI)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        if abi
            .constructor
            .as_ref()
            .is_some_and(|c| !c.inputs.is_empty())
        {
            return Err(ScriptError::ArtifactParsing(
                "Project constructor takes no arguments".to_string(),
            ));
        }

        let bytecode: Bytes = hex::decode(PROJECT_BYTECODE.trim())
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?
            .into();

        Ok(Self { abi, bytecode })
    }
}
