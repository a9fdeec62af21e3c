//! Network configuration and the submission seam of the alto front end.
//!
//! The configuration is a JSON document read once before a session starts;
//! nothing in the form depends on it.
mod error;
mod submit;
mod types;
mod utils;

pub use error::{ConfigError, SubmissionError};
pub use submit::{DryRunSubmitter, Submitter};
pub use types::*;
pub use utils::{format_address, parse_address, parse_secret_key};

/// Compiler version the auction contracts are built with.
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.17";
/// Optimizer runs the auction contracts are built with.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;
/// Name of the network profile used when none is given.
pub const DEFAULT_NETWORK: &str = "fuji";
pub const FUJI_URL: &str = "https://api.avax-test.network/ext/bc/C/rpc";
pub const FUJI_CHAIN_ID: u64 = 43113;
/// Deployed NFT contract.
pub const NFT_ADDRESS: &str = "0xB9e76f90838CaaFEcb601754fbd2B112D513869a";
/// Deployed AuctionManager contract.
pub const AUCTION_MANAGER_ADDRESS: &str = "0x0cc272d5EeE3997834A177921135A962d2d00b71";
