use crate::error::ValidationError;
use crate::state::{AuctionDraft, DraftField, FieldValue, TokenId, UnixTimestamp};
use crate::utils::minutes_to_seconds;

use borsh::{BorshDeserialize, BorshSerialize};
#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

/// A draft whose every field holds a usable value.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "camelCase"))]
pub struct ValidatedAuction {
    pub start_price: u64,
    pub token_id: TokenId,
    pub min_increment: u64,
    pub direct_buy_price: u64,
    pub duration_minutes: u64,
}

impl ValidatedAuction {
    /// Absolute end of the auction for an auction starting at `now`.
    pub fn end_timestamp(&self, now: UnixTimestamp) -> Result<UnixTimestamp, ValidationError> {
        minutes_to_seconds(self.duration_minutes)
            .and_then(|duration| now.checked_add(duration))
            .ok_or(ValidationError::ArithmeticError)
    }
}

pub fn assert_present(field: DraftField, value: FieldValue) -> Result<i64, ValidationError> {
    match value {
        FieldValue::Unset => Err(ValidationError::Missing(field)),
        FieldValue::NotANumber => Err(ValidationError::NotANumber(field)),
        FieldValue::Int(value) => Ok(value),
    }
}

pub fn assert_non_negative(field: DraftField, value: FieldValue) -> Result<u64, ValidationError> {
    let value = assert_present(field, value)?;
    u64::try_from(value).map_err(|_| ValidationError::Negative(field))
}

pub fn assert_positive(field: DraftField, value: FieldValue) -> Result<u64, ValidationError> {
    match assert_non_negative(field, value)? {
        0 => Err(ValidationError::Zero(field)),
        value => Ok(value),
    }
}

impl AuctionDraft {
    /// Checks the draft field by field in form order, then across fields.
    pub fn validate(&self) -> Result<ValidatedAuction, ValidationError> {
        let start_price = assert_positive(DraftField::StartPrice, self.start_price)?;
        let token_id = assert_non_negative(DraftField::TokenId, self.token_id)?;
        let min_increment = assert_non_negative(DraftField::MinIncrement, self.min_increment)?;
        let direct_buy_price =
            assert_non_negative(DraftField::DirectBuyPrice, self.direct_buy_price)?;
        let duration_minutes = assert_positive(DraftField::EndTime, self.end_time)?;

        if direct_buy_price < start_price {
            return Err(ValidationError::DirectBuyBelowStart {
                start: start_price,
                direct_buy: direct_buy_price,
            });
        }

        Ok(ValidatedAuction {
            start_price,
            token_id,
            min_increment,
            direct_buy_price,
            duration_minutes,
        })
    }
}
