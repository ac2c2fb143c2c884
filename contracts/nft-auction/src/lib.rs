#![no_std]

//! # NFT Auction (revision 1)
//!
//! English auction for a single NFT per auction, paid in the native
//! currency. The seller's NFT and the current highest bid are both held by
//! the contract until anyone settles the auction after its duration.
//!
//! The ledger logic and storage layout live in `auction-ledger`; this crate
//! is the first contract revision exposing them. Revision 2
//! (`nft-auction-v2`) is installed in place with [`NftAuction::upgrade`].

use auction_ledger::{
    admin, auction, price_feed, storage, upgrade, AssetKey, Auction, Error,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env};

#[contract]
pub struct NftAuction;

#[contractimpl]
impl NftAuction {
    // ========== INITIALIZATION ==========

    /// Set the administrator and the native-currency token used for escrow.
    /// Runs as part of deployment, so no uninitialized instance is ever
    /// reachable by another caller.
    pub fn __constructor(env: Env, admin: Address, native_token: Address) {
        if let Err(err) = upgrade::initialize(&env, admin, native_token) {
            panic_with_error!(&env, err);
        }
    }

    // ========== AUCTIONS ==========

    /// Escrow `token_id` of `nft_contract` and open an auction for it.
    ///
    /// The seller must own the token and have approved this contract.
    /// Returns the new auction id.
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

    /// Outbid the current leader. `amount` is moved into escrow and the
    /// previous leader is refunded in the same call.
    pub fn bid(env: Env, bidder: Address, auction_id: u64, amount: i128) -> Result<(), Error> {
        auction::bid(&env, bidder, auction_id, amount)
    }

    /// Settle an expired auction. Callable by anyone, exactly once.
    pub fn end_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        auction::end_auction(&env, auction_id)
    }

    /// Collect refunds that could not be delivered when outbid.
    pub fn withdraw(env: Env, bidder: Address) -> Result<i128, Error> {
        auction::withdraw(&env, bidder)
    }

    pub fn auctions(env: Env, auction_id: u64) -> Result<Auction, Error> {
        auction::get_auction(&env, auction_id)
    }

    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_count(&env)
    }

    pub fn get_pending_return(env: Env, bidder: Address) -> i128 {
        storage::get_pending_return(&env, &bidder)
    }

    // ========== PRICE FEEDS ==========

    /// Register the oracle for `asset` (admin only).
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

    /// Latest oracle price for `asset`, 8 fractional digits.
    pub fn get_price(env: Env, asset: AssetKey) -> Result<i128, Error> {
        price_feed::get_price(&env, &asset)
    }

    /// Highest bid of `auction_id` valued with the native-currency feed.
    pub fn get_bid_value(env: Env, auction_id: u64) -> Result<i128, Error> {
        price_feed::get_bid_value(&env, auction_id)
    }

    // ========== ADMIN ==========

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        admin::get_admin(&env)
    }

    /// Replace the contract code with `new_wasm_hash` (admin only).
    pub fn upgrade(env: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        upgrade::upgrade(&env, admin, new_wasm_hash)
    }
}

#[cfg(test)]
mod test;
