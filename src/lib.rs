//! Scripts for deploying and verifying the AI-Training On-Chain Game contract.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;
mod verify;
