use crate::utils::format_address;
use crate::{NetworkConfig, SubmissionError};
use alto_auction::assertions::ValidatedAuction;
use alto_auction::instruction::factory::{create_auction, CreateAuctionArgs};
use alto_auction::instruction::Instruction;
use alto_auction::state::{AuctionDraft, UnixTimestamp};
use alto_auction::utils::unix_now;

use log::{info, warn};

/// A path that hands a validated auction to the auction manager contract.
pub trait Submitter {
    fn submit(&mut self, auction: &ValidatedAuction) -> Result<Instruction, SubmissionError>;

    fn mint(&mut self) -> Result<Instruction, SubmissionError> {
        Err(SubmissionError::NotImplemented("minting"))
    }

    /// Validates `draft` before submitting it.
    fn submit_draft(&mut self, draft: &AuctionDraft) -> Result<Instruction, SubmissionError> {
        let auction = draft.validate()?;
        self.submit(&auction)
    }
}

/// Builds and logs the payload without broadcasting anything.
pub struct DryRunSubmitter {
    config: NetworkConfig,
    network: String,
    start_timestamp: Option<UnixTimestamp>,
    submitted: Vec<Instruction>,
}

impl DryRunSubmitter {
    pub fn new(config: NetworkConfig, network: impl Into<String>) -> Self {
        Self {
            config,
            network: network.into(),
            start_timestamp: None,
            submitted: Vec::new(),
        }
    }

    /// Pins the auction start instead of reading the system clock.
    pub fn with_start_timestamp(mut self, timestamp: UnixTimestamp) -> Self {
        self.start_timestamp = Some(timestamp);
        self
    }

    pub fn submitted(&self) -> &[Instruction] {
        &self.submitted
    }
}

impl Submitter for DryRunSubmitter {
    fn submit(&mut self, auction: &ValidatedAuction) -> Result<Instruction, SubmissionError> {
        let profile = self.config.network(&self.network)?;
        let signer = profile
            .accounts
            .first()
            .ok_or_else(|| SubmissionError::NoCredentials(self.network.clone()))?;
        if let Err(reason) = signer.secret_key() {
            return Err(crate::ConfigError::InvalidCredential {
                network: self.network.clone(),
                index: 0,
                reason,
            }
            .into());
        }

        let args = CreateAuctionArgs {
            auction_manager: self.config.contracts.auction_manager_address()?,
            nft_contract: self.config.contracts.nft_address()?,
            auction: *auction,
            start_timestamp: self.start_timestamp.unwrap_or_else(unix_now),
        };
        let instruction = create_auction(&args)?;

        warn!("dry run, nothing is broadcast");
        info!(
            "network: {} ({})    chain id: {}    signer: {}",
            self.network, profile.url, profile.chain_id, signer
        );
        info!(
            "contract: {}    data: {}",
            format_address(&instruction.contract),
            hex::encode(&instruction.data)
        );
        self.submitted.push(instruction.clone());
        Ok(instruction)
    }
}
