use crate::test::{advance_ledger, setup_v1, setup_v2, DURATION, TENTH};
use auction_ledger::Error;

#[test]
fn test_remaining_time_counts_down() {
    let ctx = setup_v2();
    let v2 = ctx.v2();
    let auction_id = v2.create_auction(&ctx.seller, &ctx.nft.address, &1, &DURATION, &TENTH);

    assert_eq!(v2.get_remaining_time(&auction_id), DURATION);

    advance_ledger(&ctx.env, 600);
    assert_eq!(v2.get_remaining_time(&auction_id), DURATION - 600);

    advance_ledger(&ctx.env, DURATION);
    assert_eq!(v2.get_remaining_time(&auction_id), 0);
}

#[test]
fn test_remaining_time_of_settled_auction_is_zero() {
    let ctx = setup_v2();
    let v2 = ctx.v2();
    let auction_id = v2.create_auction(&ctx.seller, &ctx.nft.address, &1, &DURATION, &TENTH);

    advance_ledger(&ctx.env, DURATION);
    v2.end_auction(&auction_id);
    assert_eq!(v2.get_remaining_time(&auction_id), 0);
}

#[test]
fn test_remaining_time_of_v1_auction() {
    let ctx = setup_v1();
    let auction_id = ctx
        .v1()
        .create_auction(&ctx.seller, &ctx.nft.address, &1, &DURATION, &TENTH);
    advance_ledger(&ctx.env, 100);

    ctx.upgrade_to_v2();
    let v2 = ctx.v2();

    assert_eq!(v2.get_remaining_time(&auction_id), DURATION - 100);
    // reading it changed nothing
    assert!(!v2.auctions(&auction_id).ended);
}

#[test]
fn test_remaining_time_missing_auction() {
    let ctx = setup_v2();

    let result = ctx.v2().try_get_remaining_time(&3);
    assert_eq!(result, Err(Ok(Error::AuctionNotFound)));
}
