#![no_std]

//! # NFT Auction (revision 2)
//!
//! Installed over a revision 1 contract with `upgrade`. It reads the same
//! storage through `auction-ledger` and adds:
//!
//! - [`NftAuctionV2::get_remaining_time`], a derived read over existing
//!   auction records;
//! - [`NftAuctionV2::migrate`] / [`NftAuctionV2::get_revision`], which record
//!   the storage revision under a key appended after every revision 1 key;
//! - [`NftAuctionV2::transfer_admin`], explicit admin rotation.
//!
//! Nothing here rewrites a record created by revision 1. This revision has
//! no initializer: it is only ever attached to an address revision 1 has
//! already initialized.

use auction_ledger::{
    admin, auction, price_feed, storage, upgrade, AssetKey, Auction, Error,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

/// Storage revision this code expects once migrated.
pub const REVISION: u32 = 2;

#[contract]
pub struct NftAuctionV2;

#[contractimpl]
impl NftAuctionV2 {
    // ========== MIGRATION ==========

    /// Bring storage up to this revision (admin only, idempotent).
    pub fn migrate(env: Env, admin: Address) -> Result<u32, Error> {
        upgrade::migrate(&env, admin, REVISION)
    }

    pub fn get_revision(env: Env) -> u32 {
        upgrade::get_revision(&env)
    }

    // ========== AUCTIONS ==========

    pub fn create_auction(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u32,
        duration: u64,
        start_price: i128,
    ) -> Result<u64, Error> {
        auction::create_auction(&env, seller, nft_contract, token_id, duration, start_price)
    }

    pub fn bid(env: Env, bidder: Address, auction_id: u64, amount: i128) -> Result<(), Error> {
        auction::bid(&env, bidder, auction_id, amount)
    }

    pub fn end_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        auction::end_auction(&env, auction_id)
    }

    pub fn withdraw(env: Env, bidder: Address) -> Result<i128, Error> {
        auction::withdraw(&env, bidder)
    }

    pub fn auctions(env: Env, auction_id: u64) -> Result<Auction, Error> {
        auction::get_auction(&env, auction_id)
    }

    /// Seconds until `auction_id` stops accepting bids; 0 once expired or
    /// settled.
    pub fn get_remaining_time(env: Env, auction_id: u64) -> Result<u64, Error> {
        auction::get_remaining_time(&env, auction_id)
    }

    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_count(&env)
    }

    pub fn get_pending_return(env: Env, bidder: Address) -> i128 {
        storage::get_pending_return(&env, &bidder)
    }

    // ========== PRICE FEEDS ==========

    pub fn set_price_feed(
        env: Env,
        admin: Address,
        asset: AssetKey,
        oracle: Address,
    ) -> Result<(), Error> {
        price_feed::set_price_feed(&env, admin, asset, oracle)
    }

    pub fn get_price_feed(env: Env, asset: AssetKey) -> Result<Address, Error> {
        price_feed::get_price_feed(&env, &asset)
    }

    pub fn get_price(env: Env, asset: AssetKey) -> Result<i128, Error> {
        price_feed::get_price(&env, &asset)
    }

    pub fn get_bid_value(env: Env, auction_id: u64) -> Result<i128, Error> {
        price_feed::get_bid_value(&env, auction_id)
    }

    // ========== ADMIN ==========

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        admin::get_admin(&env)
    }

    /// Rotate the admin role. Both the current and the new admin sign.
    pub fn transfer_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        admin::transfer_admin(&env, current_admin, new_admin)
    }

    pub fn upgrade(env: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        upgrade::upgrade(&env, admin, new_wasm_hash)
    }
}

#[cfg(test)]
mod test;
