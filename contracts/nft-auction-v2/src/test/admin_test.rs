use crate::test::setup_v2;
use auction_ledger::testutils::{MockAggregator, MockAggregatorClient};
use auction_ledger::{AssetKey, Error};
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_transfer_admin() {
    let ctx = setup_v2();
    let v2 = ctx.v2();
    let new_admin = Address::generate(&ctx.env);

    v2.transfer_admin(&ctx.admin, &new_admin);
    assert_eq!(v2.get_admin(), new_admin);

    let aggregator_id = ctx.env.register(MockAggregator, ());
    MockAggregatorClient::new(&ctx.env, &aggregator_id).update_answer(&100_000_000);

    let result = v2.try_set_price_feed(&ctx.admin, &AssetKey::Native, &aggregator_id);
    assert_eq!(result, Err(Ok(Error::NotAdmin)));

    v2.set_price_feed(&new_admin, &AssetKey::Native, &aggregator_id);
    assert_eq!(v2.get_price(&AssetKey::Native), 100_000_000);
}

#[test]
fn test_transfer_admin_by_non_admin_fails() {
    let ctx = setup_v2();
    let v2 = ctx.v2();

    let result = v2.try_transfer_admin(&ctx.seller, &ctx.seller);
    assert_eq!(result, Err(Ok(Error::NotAdmin)));
    assert_eq!(v2.get_admin(), ctx.admin);
}
