//! Draft state and form component of the alto NFT auction front end.
//!
//! The form holds a single [`AuctionDraft`](state::AuctionDraft) per session
//! and replaces it wholesale on every input event, notifying registered
//! observers with the new value.
mod error;

/// Checks turning a raw draft into a submittable auction.
pub mod assertions;
/// The auction creation form and its displays.
pub mod frontend;
/// Payloads a submission path would send to the auction contract.
pub mod instruction;
/// Data structures that describe the form's current state.
pub mod state;
/// Parsing and time helpers.
pub mod utils;

pub use error::{UnknownField, ValidationError};

/// Seconds per minute, used when converting the auction duration.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Separator placed between entries of the owned-items display.
pub const OWNED_ITEMS_SEPARATOR: &str = ", ";
