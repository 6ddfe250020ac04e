//! Definitions of CLI arguments and commands for the deploy scripts

use std::{path::PathBuf, sync::Arc};

use alloy::{primitives::Address, providers::Provider};
use clap::{Args, Parser, Subcommand};

use crate::{commands::deploy_project, errors::ScriptError};

/// Deploy the AI-Training On-Chain Game contract and record the deployment
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOYER_PRIV_KEY", hide_env_values = true)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long)]
    pub rpc_url: String,

    /// Name of the network being deployed to, used for the deployment
    /// record file name and to decide whether verification is attempted
    #[arg(short, long)]
    pub network: String,

    /// The deploy command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available deploy commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the Project contract
    DeployProject(DeployProjectArgs),
}

/// Arguments to the `deploy-project` command
#[derive(Args)]
pub struct DeployProjectArgs {
    /// Block explorer API key used for contract verification
    #[arg(short, long, env = "EXPLORER_API_KEY", default_value = "")]
    pub api_key: String,

    /// Directory the deployment record file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Command {
    /// Run the command against the given client
    pub async fn run(
        self,
        client: Arc<impl Provider>,
        deployer: Address,
        network: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployProject(args) => {
                let address = deploy_project(args, client, deployer, network).await?;
                println!("\n🎉 Deployment completed successfully!");
                println!("Contract address: {address}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
