use crate::error::UnknownField;

use borsh::{BorshDeserialize, BorshSerialize};
#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Identifier of an NFT held by the auction contract.
pub type TokenId = u64;
/// UNIX timestamp in seconds.
pub type UnixTimestamp = i64;

/// Value held by a single numeric input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "camelCase"))]
pub enum FieldValue {
    /// Nothing was entered yet.
    #[default]
    Unset,
    /// The input parsed as an integer.
    Int(i64),
    /// The input could not be parsed as an integer.
    NotANumber,
}

impl FieldValue {
    pub fn is_set(&self) -> bool {
        !matches!(self, FieldValue::Unset)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unset => write!(f, "null"),
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::NotANumber => write!(f, "NaN"),
        }
    }
}

/// The five numeric inputs of the auction creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "camelCase"))]
pub enum DraftField {
    StartPrice,
    TokenId,
    MinIncrement,
    DirectBuyPrice,
    /// Auction duration in minutes, stored under `end_time`.
    EndTime,
}

impl DraftField {
    /// Fields in the order the form lays them out.
    pub const ALL: [DraftField; 5] = [
        DraftField::StartPrice,
        DraftField::TokenId,
        DraftField::MinIncrement,
        DraftField::DirectBuyPrice,
        DraftField::EndTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::StartPrice => "Start Price",
            DraftField::TokenId => "Token Id",
            DraftField::MinIncrement => "Minimum Increment",
            DraftField::DirectBuyPrice => "Direct Buy Price",
            DraftField::EndTime => "Duration In Minutes",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DraftField::StartPrice => "start-price",
            DraftField::TokenId => "token-id",
            DraftField::MinIncrement => "min-increment",
            DraftField::DirectBuyPrice => "direct-buy-price",
            DraftField::EndTime => "duration",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        DraftField::ALL
            .iter()
            .find(|field| field.key() == key || (key == "end-time" && **field == DraftField::EndTime))
            .copied()
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

/// The in-memory, unsaved representation of a prospective auction.
///
/// Values are replaced, never mutated: every update produces a new draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "camelCase"))]
pub struct AuctionDraft {
    pub start_price: FieldValue,
    /// Duration of the auction in minutes.
    pub end_time: FieldValue,
    pub token_id: FieldValue,
    pub min_increment: FieldValue,
    pub direct_buy_price: FieldValue,
}

impl AuctionDraft {
    pub fn get(&self, field: DraftField) -> FieldValue {
        match field {
            DraftField::StartPrice => self.start_price,
            DraftField::TokenId => self.token_id,
            DraftField::MinIncrement => self.min_increment,
            DraftField::DirectBuyPrice => self.direct_buy_price,
            DraftField::EndTime => self.end_time,
        }
    }

    /// Returns a new draft with `field` replaced by `value`.
    #[must_use]
    pub fn with_field(self, field: DraftField, value: FieldValue) -> Self {
        let mut draft = self;
        match field {
            DraftField::StartPrice => draft.start_price = value,
            DraftField::TokenId => draft.token_id = value,
            DraftField::MinIncrement => draft.min_increment = value,
            DraftField::DirectBuyPrice => draft.direct_buy_price = value,
            DraftField::EndTime => draft.end_time = value,
        }
        draft
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|field| !self.get(*field).is_set())
    }
}

impl fmt::Display for AuctionDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ startPrice: {}, endTime: {}, tokenId: {}, minIncrement: {}, directBuyPrice: {} }}",
            self.start_price, self.end_time, self.token_id, self.min_increment, self.direct_buy_price
        )
    }
}

/// An auction listed by the auction manager contract.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "camelCase"))]
pub struct AuctionRecord {
    pub token_id: TokenId,
    pub start_price: u64,
    pub min_increment: u64,
    pub direct_buy_price: u64,
    pub end_time: UnixTimestamp,
    /// `0x`-prefixed address of the seller.
    pub seller: String,
}

/// Auctions to display.
pub type AuctionList = Vec<AuctionRecord>;
/// Tokens owned by the connected account.
pub type OwnedItems = Vec<TokenId>;
