#![no_std]

//! Storage schema and state machine of the NFT auction ledger.
//!
//! Both contract revisions (`nft-auction` and `nft-auction-v2`) are thin
//! wrappers over this crate, so the persisted layout in [`types`] is defined
//! once and shared by every revision attached to the same contract address.

pub mod admin;
pub mod auction;
pub mod custody;
pub mod errors;
pub mod events;
pub mod oracle;
pub mod price_feed;
pub mod storage;
pub mod types;
pub mod upgrade;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use errors::Error;
pub use types::{AssetKey, Auction};
