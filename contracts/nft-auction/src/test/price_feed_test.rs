use crate::test::{register_aggregator, setup_test, TENTH};
use auction_ledger::{AssetKey, Error};

/// 1800 with 8 fractional digits.
const ETH_USD: i128 = 180_000_000_000;

#[test]
fn test_set_price_feed_by_admin() {
    let ctx = setup_test();
    let aggregator = register_aggregator(&ctx.env, ETH_USD);

    ctx.client
        .set_price_feed(&ctx.admin, &AssetKey::Native, &aggregator.address);

    assert_eq!(ctx.client.get_price_feed(&AssetKey::Native), aggregator.address);
    assert_eq!(ctx.client.get_price(&AssetKey::Native), ETH_USD);
}

#[test]
fn test_set_price_feed_by_non_admin_fails() {
    let ctx = setup_test();
    let aggregator = register_aggregator(&ctx.env, ETH_USD);

    let result =
        ctx.client
            .try_set_price_feed(&ctx.seller, &AssetKey::Native, &aggregator.address);
    assert_eq!(result, Err(Ok(Error::NotAdmin)));

    let result = ctx.client.try_get_price(&AssetKey::Native);
    assert_eq!(result, Err(Ok(Error::FeedNotSet)));
}

#[test]
fn test_price_without_feed() {
    let ctx = setup_test();

    let asset = AssetKey::Contract(ctx.nft.address.clone());
    assert_eq!(ctx.client.try_get_price(&asset), Err(Ok(Error::FeedNotSet)));
    assert_eq!(ctx.client.try_get_price_feed(&asset), Err(Ok(Error::FeedNotSet)));
}

#[test]
fn test_price_feed_upsert_and_updates() {
    let ctx = setup_test();
    let first = register_aggregator(&ctx.env, ETH_USD);
    let second = register_aggregator(&ctx.env, 2 * ETH_USD);

    ctx.client
        .set_price_feed(&ctx.admin, &AssetKey::Native, &first.address);
    first.update_answer(&(3 * ETH_USD / 2));
    assert_eq!(ctx.client.get_price(&AssetKey::Native), 3 * ETH_USD / 2);

    ctx.client
        .set_price_feed(&ctx.admin, &AssetKey::Native, &second.address);
    assert_eq!(ctx.client.get_price(&AssetKey::Native), 2 * ETH_USD);
}

#[test]
fn test_price_is_normalised_to_eight_decimals() {
    let ctx = setup_test();
    let aggregator = register_aggregator(&ctx.env, 1_800_000_000);
    aggregator.set_decimals(&6);

    let asset = AssetKey::Contract(ctx.nft.address.clone());
    ctx.client.set_price_feed(&ctx.admin, &asset, &aggregator.address);

    assert_eq!(ctx.client.get_price(&asset), ETH_USD);
}

#[test]
fn test_bid_value() {
    let ctx = setup_test();
    let aggregator = register_aggregator(&ctx.env, ETH_USD);
    ctx.client
        .set_price_feed(&ctx.admin, &AssetKey::Native, &aggregator.address);

    let auction_id = ctx.create_auction(1);
    assert_eq!(ctx.client.get_bid_value(&auction_id), 0);

    // 0.2 units at 1800 = 360.00000000
    ctx.client.bid(&ctx.buyer1, &auction_id, &(2 * TENTH));
    assert_eq!(ctx.client.get_bid_value(&auction_id), 36_000_000_000);
}

#[test]
fn test_bid_value_rejects_non_positive_price() {
    let ctx = setup_test();
    let aggregator = register_aggregator(&ctx.env, 0);
    ctx.client
        .set_price_feed(&ctx.admin, &AssetKey::Native, &aggregator.address);

    let auction_id = ctx.create_auction(1);
    let result = ctx.client.try_get_bid_value(&auction_id);
    assert_eq!(result, Err(Ok(Error::InvalidPrice)));
}
