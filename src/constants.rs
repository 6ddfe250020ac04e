//! Constants used in the deploy scripts

use std::time::Duration;

/// The ABI of the Project contract, as emitted by the Solidity compiler
pub const PROJECT_ABI: &str = include_str!("../artifacts/Project.abi");

/// The creation bytecode of the Project contract, hex-encoded without a `0x` prefix
pub const PROJECT_BYTECODE: &str = include_str!("../artifacts/Project.bin");

/// The flattened Solidity source of the Project contract,
/// submitted to the block explorer during verification
pub const PROJECT_SOURCE: &str = include_str!("../artifacts/Project.sol");

/// The name of the contract being deployed
pub const PROJECT_CONTRACT_NAME: &str = "Project";

/// The exact compiler version the artifact was built with,
/// in the long-form notation the explorer verification API expects
pub const SOLIDITY_COMPILER_VERSION: &str = "v0.8.19+commit.7dd6d404";

/// The number of confirmations to wait for the deployment transaction itself
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The number of additional confirmations to wait before
/// submitting the contract for verification
pub const NUM_VERIFICATION_CONFIRMATIONS: u64 = 6;

/// The name of the only network on which verification is attempted
pub const VERIFICATION_NETWORK: &str = "core_testnet2";

/// The URL of the Core Testnet 2 explorer's Etherscan-compatible API
pub const CORE_TESTNET2_API_URL: &str = "https://api.test2.btcs.network/api";

/// The prefix of the per-network deployment record file name
pub const DEPLOYMENT_FILE_PREFIX: &str = "deployment-";

/// The interval at which the chain head is polled while
/// waiting for verification confirmations
pub const BLOCK_POLL_INTERVAL: Duration = Duration::from_secs(3);
