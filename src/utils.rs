//! Utilities for the deploy scripts

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use tracing::info;

use crate::{constants::DEPLOYMENT_FILE_PREFIX, errors::ScriptError, types::DeploymentRecord};

/// Sets up the client with which to deploy the contract, wrapping the given
/// RPC endpoint with a signer derived from the given private key.
///
/// Returns the client along with the deployer address, and validates
/// connectivity with a chain ID query before returning.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<(Arc<impl Provider>, Address), ScriptError> {
    let signer: PrivateKeySigner = priv_key
        .parse()
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {e}")))?;
    let deployer = signer.address();

    let url = rpc_url
        .parse()
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid RPC URL: {e}")))?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!(chain_id, "connected to RPC endpoint");

    Ok((Arc::new(provider), deployer))
}

/// The path of the deployment record file for the given network
pub fn deployment_record_path(output_dir: &Path, network: &str) -> PathBuf {
    output_dir.join(format!("{DEPLOYMENT_FILE_PREFIX}{network}.json"))
}

/// The record path as shown to the operator: a record written to the
/// current directory is reported by its bare file name
pub fn display_record_path(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

/// Serialize the deployment record to `deployment-<network>.json` in the
/// given directory, overwriting any existing file, and return the path
pub fn write_deployment_record(
    output_dir: &Path,
    record: &DeploymentRecord,
) -> Result<PathBuf, ScriptError> {
    let path = deployment_record_path(output_dir, &record.network);

    let contents =
        serde_json::to_string_pretty(record).map_err(|e| ScriptError::Serde(e.to_string()))?;
    fs::write(&path, contents).map_err(|e| ScriptError::WriteFile(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::primitives::{Address, B256};
    use tempfile::tempdir;

    use super::{deployment_record_path, display_record_path, write_deployment_record};
    use crate::types::DeploymentRecord;

    /// Build a record deployed at the given contract address
    fn record_at(contract_address: Address) -> DeploymentRecord {
        DeploymentRecord::new(
            "core_testnet2",
            contract_address,
            Address::repeat_byte(0x11),
            42,
            B256::repeat_byte(0x22),
        )
    }

    #[test]
    fn test_record_file_named_by_network() {
        let path = deployment_record_path("out".as_ref(), "core_testnet2");
        assert_eq!(
            path.to_str().unwrap(),
            "out/deployment-core_testnet2.json"
        );
    }

    #[test]
    fn test_current_dir_record_shown_as_bare_file_name() {
        let path = deployment_record_path(".".as_ref(), "core_testnet2");
        assert_eq!(
            display_record_path(&path).to_str().unwrap(),
            "deployment-core_testnet2.json"
        );

        // Paths outside the current directory are shown unchanged
        let elsewhere = deployment_record_path("/tmp/deployments".as_ref(), "core_testnet2");
        assert_eq!(display_record_path(&elsewhere), elsewhere.as_path());
    }

    #[test]
    fn test_written_record_round_trips() {
        let dir = tempdir().unwrap();
        let record = record_at(Address::repeat_byte(0xab));

        let path = write_deployment_record(dir.path(), &record).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "deployment-core_testnet2.json"
        );

        let contents = fs::read_to_string(&path).unwrap();
        // Pretty-printed, one field per line
        assert!(contents.contains('\n'));

        let parsed: DeploymentRecord = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.contract_address, record.contract_address);
        assert_eq!(parsed.network, "core_testnet2");
    }

    #[test]
    fn test_existing_record_overwritten() {
        let dir = tempdir().unwrap();

        let first = record_at(Address::repeat_byte(0xaa));
        let second = record_at(Address::repeat_byte(0xbb));
        write_deployment_record(dir.path(), &first).unwrap();
        let path = write_deployment_record(dir.path(), &second).unwrap();

        let parsed: DeploymentRecord =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed.contract_address, second.contract_address);
    }
}
