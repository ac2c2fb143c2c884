use soroban_sdk::{log, Address, Env};

use crate::admin;
use crate::errors::Error;
use crate::events::PriceFeedSet;
use crate::oracle;
use crate::storage;
use crate::types::{AssetKey, NATIVE_DECIMALS};

/// Register or replace the oracle for `asset` (admin only). The oracle is
/// not queried here; a dead feed only shows up when it is read.
pub fn set_price_feed(env: &Env, admin: Address, asset: AssetKey, oracle: Address) -> Result<(), Error> {
    admin::require_admin(env, &admin)?;

    storage::set_price_feed(env, &asset, &oracle);

    log!(env, "price feed set by {}", admin);

    PriceFeedSet { asset, oracle }.publish(env);

    Ok(())
}

pub fn get_price_feed(env: &Env, asset: &AssetKey) -> Result<Address, Error> {
    storage::get_price_feed(env, asset).ok_or(Error::FeedNotSet)
}

/// Latest price of `asset` with 8 fractional digits.
pub fn get_price(env: &Env, asset: &AssetKey) -> Result<i128, Error> {
    let oracle = get_price_feed(env, asset)?;
    oracle::latest_price(env, &oracle)
}

/// Current highest bid of an auction valued through the native-currency
/// feed, with 8 fractional digits. Informational only.
pub fn get_bid_value(env: &Env, auction_id: u64) -> Result<i128, Error> {
    let auction = storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)?;
    let price = get_price(env, &AssetKey::Native)?;
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    auction
        .highest_bid
        .checked_mul(price)
        .map(|value| value / 10i128.pow(NATIVE_DECIMALS))
        .ok_or(Error::InvalidPrice)
}
