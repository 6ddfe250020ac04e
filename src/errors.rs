//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error fetching the balance of the deployer
    BalanceFetching(String),
    /// Error parsing the compiled contract artifact
    ArtifactParsing(String),
    /// Error deploying the contract
    ContractDeployment(String),
    /// Error waiting for block confirmations
    ConfirmationWait(String),
    /// Error serializing the deployment record
    Serde(String),
    /// Error writing the deployment record file
    WriteFile(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::BalanceFetching(s) => write!(f, "error fetching balance: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ConfirmationWait(s) => {
                write!(f, "error waiting for confirmations: {}", s)
            }
            ScriptError::Serde(s) => write!(f, "error serializing deployment record: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing deployment record: {}", s),
        }
    }
}

impl Error for ScriptError {}
