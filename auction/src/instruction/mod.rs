#[cfg(feature = "client")]
pub mod factory;

use crate::state::{TokenId, UnixTimestamp};
use borsh::{BorshDeserialize, BorshSerialize};

/// A 20-byte contract or account address.
pub type Address = [u8; 20];

#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub enum AuctionInstruction {
    CreateAuction {
        nft_contract: Address,
        token_id: TokenId,
        start_price: u64,
        min_increment: u64,
        direct_buy_price: u64,
        end_time: UnixTimestamp,
    },
}

/// Encoded call addressed to a single contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub contract: Address,
    pub data: Vec<u8>,
}
