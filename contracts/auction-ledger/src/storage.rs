use soroban_sdk::{Address, Env};

use crate::types::{
    AssetKey, Auction, DataKey, BASE_REVISION, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// Everything the ledger owns sits in persistent storage so it is tied to the
// contract address, not to whichever WASM currently runs there.

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

fn read<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        bump(env, key);
    }
    value
}

fn write<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump(env, key);
}

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    write(env, &DataKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Option<Address> {
    read(env, &DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    write(env, &DataKey::Admin, admin);
}

// ========== Native currency ==========

pub fn get_native_token(env: &Env) -> Option<Address> {
    read(env, &DataKey::NativeToken)
}

pub fn set_native_token(env: &Env, token: &Address) {
    write(env, &DataKey::NativeToken, token);
}

// ========== Auctions ==========

pub fn get_auction_count(env: &Env) -> u64 {
    read(env, &DataKey::AuctionCount).unwrap_or(0)
}

/// Reserve the next auction id. Ids start at 0 and are never reused.
pub fn next_auction_id(env: &Env) -> u64 {
    let id = get_auction_count(env);
    write(env, &DataKey::AuctionCount, &(id + 1));
    id
}

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    read(env, &DataKey::Auction(auction_id))
}

pub fn save_auction(env: &Env, auction_id: u64, auction: &Auction) {
    write(env, &DataKey::Auction(auction_id), auction);
}

// ========== Price feeds ==========

pub fn get_price_feed(env: &Env, asset: &AssetKey) -> Option<Address> {
    read(env, &DataKey::PriceFeed(asset.clone()))
}

pub fn set_price_feed(env: &Env, asset: &AssetKey, oracle: &Address) {
    write(env, &DataKey::PriceFeed(asset.clone()), oracle);
}

// ========== Deferred refunds ==========

pub fn get_pending_return(env: &Env, bidder: &Address) -> i128 {
    read(env, &DataKey::PendingReturn(bidder.clone())).unwrap_or(0)
}

pub fn add_pending_return(env: &Env, bidder: &Address, amount: i128) {
    let total = get_pending_return(env, bidder) + amount;
    write(env, &DataKey::PendingReturn(bidder.clone()), &total);
}

pub fn remove_pending_return(env: &Env, bidder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::PendingReturn(bidder.clone()));
}

// ========== Revision ==========

pub fn get_revision(env: &Env) -> u32 {
    read(env, &DataKey::Revision).unwrap_or(BASE_REVISION)
}

pub fn set_revision(env: &Env, revision: u32) {
    write(env, &DataKey::Revision, &revision);
}
