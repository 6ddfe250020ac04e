//! Best-effort contract verification against the block explorer API
//!
//! Verification failures never fail a deployment: the caller inspects the
//! returned `Result` and reports the message instead of propagating it.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy::primitives::Address;
use serde::Deserialize;
use tracing::debug;

use crate::constants::{
    PROJECT_CONTRACT_NAME, PROJECT_SOURCE, SOLIDITY_COMPILER_VERSION, VERIFICATION_NETWORK,
};

/// An error reported while submitting the contract for verification.
///
/// Displays as the bare failure message so the caller can embed it
/// in its own status line.
#[derive(Debug)]
pub struct VerifyError(String);

impl Display for VerifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for VerifyError {}

/// The response envelope of the Etherscan-compatible explorer API
#[derive(Deserialize)]
struct ExplorerResponse {
    /// "1" on success, "0" on failure
    status: String,
    /// The submission GUID on success, the failure reason otherwise
    result: String,
}

/// Whether verification is attempted for the given network.
///
/// Only the Core Testnet 2 explorer is wired up; on every other network
/// the verification step is skipped entirely.
pub fn is_verification_network(network: &str) -> bool {
    network == VERIFICATION_NETWORK
}

/// Submit the deployed contract's source to the explorer's
/// `verifysourcecode` endpoint.
///
/// A single submission, no retries. Returns the submission GUID the
/// explorer assigns; the explorer validates the recompiled bytecode
/// asynchronously on its side.
pub async fn verify_contract(
    api_url: &str,
    api_key: &str,
    contract_address: Address,
    constructor_args: &str,
) -> Result<String, VerifyError> {
    let params = [
        ("apikey", api_key.to_string()),
        ("module", "contract".to_string()),
        ("action", "verifysourcecode".to_string()),
        ("contractaddress", contract_address.to_string()),
        ("sourceCode", PROJECT_SOURCE.to_string()),
        ("codeformat", "solidity-single-file".to_string()),
        ("contractname", PROJECT_CONTRACT_NAME.to_string()),
        ("compilerversion", SOLIDITY_COMPILER_VERSION.to_string()),
        ("optimizationUsed", "1".to_string()),
        ("runs", "200".to_string()),
        // The parameter name inherits Etherscan's misspelling
        ("constructorArguements", constructor_args.to_string()),
    ];

    let response = reqwest::Client::new()
        .post(api_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| VerifyError(e.to_string()))?
        .error_for_status()
        .map_err(|e| VerifyError(e.to_string()))?
        .json::<ExplorerResponse>()
        .await
        .map_err(|e| VerifyError(e.to_string()))?;

    if response.status == "1" {
        debug!(guid = %response.result, "verification request submitted");
        Ok(response.result)
    } else {
        Err(VerifyError(response.result))
    }
}
