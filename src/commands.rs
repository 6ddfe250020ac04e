//! Implementations of the deploy scripts

use std::sync::Arc;

use alloy::{
    network::TransactionBuilder,
    primitives::{utils::format_ether, Address},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use tokio::time::sleep;
use tracing::debug;

use crate::{
    cli::DeployProjectArgs,
    constants::{
        BLOCK_POLL_INTERVAL, CORE_TESTNET2_API_URL, NUM_DEPLOY_CONFIRMATIONS,
        NUM_VERIFICATION_CONFIRMATIONS,
    },
    errors::ScriptError,
    types::{DeploymentRecord, ProjectArtifact},
    utils::{display_record_path, write_deployment_record},
    verify::{is_verification_network, verify_contract},
};

/// Deploy the Project contract, verify it on the explorer where available,
/// and write the deployment record file.
///
/// Returns the deployed contract's address. Every step except verification
/// is fail-fast; a verification failure is reported and swallowed since the
/// deployment itself has already succeeded.
pub async fn deploy_project(
    args: DeployProjectArgs,
    client: Arc<impl Provider>,
    deployer: Address,
    network: &str,
) -> Result<Address, ScriptError> {
    println!("🚀 Starting deployment of AI-Training On-Chain Game...");
    println!("📝 Deploying contracts with account: {deployer}");

    let balance = client
        .get_balance(deployer)
        .await
        .map_err(|e| ScriptError::BalanceFetching(e.to_string()))?;
    println!("💰 Account balance: {balance}");

    let artifact = ProjectArtifact::parse()?;
    debug!(
        functions = artifact.abi.functions().count(),
        bytecode_bytes = artifact.bytecode.len(),
        "parsed Project artifact"
    );

    println!("⏳ Deploying Project contract...");

    // The Project constructor takes no arguments, so the deployment
    // transaction's input is the creation bytecode itself
    let tx = TransactionRequest::default().with_deploy_code(artifact.bytecode);

    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let contract_address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment("receipt carries no contract address".to_string())
    })?;
    let block_number = receipt.block_number.ok_or_else(|| {
        ScriptError::ContractDeployment("receipt carries no block number".to_string())
    })?;
    let transaction_hash = receipt.transaction_hash;

    println!("✅ Project contract deployed!");
    println!("📍 Contract address: {contract_address}");

    let closing_balance = client
        .get_balance(deployer)
        .await
        .map_err(|e| ScriptError::BalanceFetching(e.to_string()))?;

    println!("\n{}", "=".repeat(50));
    println!("🎮 AI-TRAINING ON-CHAIN GAME DEPLOYMENT SUMMARY");
    println!("{}", "=".repeat(50));
    println!("📍 Contract Address: {contract_address}");
    println!("🌐 Network: {network}");
    println!("👤 Deployer: {deployer}");
    println!("💰 Deployer Balance: {} ETH", format_ether(closing_balance));
    println!("{}", "=".repeat(50));

    if is_verification_network(network) {
        println!("\n⏳ Waiting for block confirmations...");
        wait_for_confirmations(client.as_ref(), block_number, NUM_VERIFICATION_CONFIRMATIONS)
            .await?;

        println!("🔍 Verifying contract on Core Testnet 2...");
        match verify_contract(
            CORE_TESTNET2_API_URL,
            &args.api_key,
            contract_address,
            "", // no constructor arguments
        )
        .await
        {
            Ok(_guid) => println!("✅ Contract verified successfully!"),
            Err(e) => println!("❌ Contract verification failed: {e}"),
        }
    }

    let record = DeploymentRecord::new(
        network,
        contract_address,
        deployer,
        block_number,
        transaction_hash,
    );
    let record_path = write_deployment_record(&args.output_dir, &record)?;
    println!(
        "📄 Deployment info saved to {}",
        display_record_path(&record_path).display()
    );

    println!("\n🎯 NEXT STEPS:");
    println!("1. Save the contract address for frontend integration");
    println!("2. Fund the contract if needed for prize pool");
    println!("3. Test the contract functionality");
    println!("4. Deploy to mainnet when ready");

    Ok(contract_address)
}

/// Poll the chain head until the given number of additional confirmations
/// has been mined on top of the deployment block
async fn wait_for_confirmations(
    client: &impl Provider,
    mined_block: u64,
    confirmations: u64,
) -> Result<(), ScriptError> {
    let target_block = mined_block + confirmations;
    loop {
        let head = client
            .get_block_number()
            .await
            .map_err(|e| ScriptError::ConfirmationWait(e.to_string()))?;
        if head >= target_block {
            return Ok(());
        }
        sleep(BLOCK_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::Arc};

    use alloy::{
        primitives::{Address, U256},
        providers::{mock::Asserter, ProviderBuilder},
    };
    use tempfile::tempdir;

    use super::deploy_project;
    use crate::{cli::DeployProjectArgs, errors::ScriptError};

    #[tokio::test]
    async fn test_failed_deployment_writes_no_record() {
        let dir = tempdir().unwrap();

        // Balance query succeeds, then the RPC rejects the deployment
        let asserter = Asserter::new();
        asserter.push_success(&U256::from(1_000_000_000_000_000_000u128));
        asserter.push_failure_msg("transaction rejected");
        let client = Arc::new(ProviderBuilder::new().on_mocked_client(asserter));

        let args = DeployProjectArgs {
            api_key: String::new(),
            output_dir: dir.path().to_path_buf(),
        };

        let err = deploy_project(args, client, Address::repeat_byte(0x11), "core_testnet2")
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::ContractDeployment(_)));

        // Fail-fast deployment leaves no record file behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
