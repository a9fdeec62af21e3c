use crate::state::DraftField;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is missing")]
    Missing(DraftField),
    #[error("{0} is not a number")]
    NotANumber(DraftField),
    #[error("{0} must not be negative")]
    Negative(DraftField),
    #[error("{0} must be greater than zero")]
    Zero(DraftField),
    #[error("direct buy price ({direct_buy}) is below the start price ({start})")]
    DirectBuyBelowStart { start: u64, direct_buy: u64 },
    #[error("auction end time overflows")]
    ArithmeticError,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field \"{0}\"")]
pub struct UnknownField(pub String);
