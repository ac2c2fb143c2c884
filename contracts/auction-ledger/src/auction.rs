//! The auction state machine.
//!
//! Every entry point persists its state change before talking to another
//! contract (NFT custody or the native-currency token). A call that comes
//! back into the ledger from one of those contracts therefore always sees
//! the new leader, or `ended == true`, and cannot bid at a stale price,
//! collect a refund twice, or settle twice.

use soroban_sdk::{log, token, Address, Env};

use crate::custody::NonFungibleTokenClient;
use crate::errors::Error;
use crate::events::{AuctionCreated, AuctionEnded, BidPlaced, RefundDeferred, RefundWithdrawn};
use crate::storage;
use crate::types::Auction;

pub fn create_auction(
    env: &Env,
    seller: Address,
    nft_contract: Address,
    token_id: u32,
    duration: u64,
    start_price: i128,
) -> Result<u64, Error> {
    seller.require_auth();

    let ledger = env.current_contract_address();
    let native_token = storage::get_native_token(env).ok_or(Error::NotInitialized)?;
    if nft_contract == ledger || nft_contract == native_token {
        return Err(Error::InvalidAsset);
    }

    if duration == 0 {
        return Err(Error::ZeroDuration);
    }

    if start_price <= 0 {
        return Err(Error::ZeroStartPrice);
    }

    let nft = NonFungibleTokenClient::new(env, &nft_contract);
    if nft.owner_of(&token_id) != seller {
        return Err(Error::NotOwner);
    }

    let auction_id = storage::next_auction_id(env);
    let auction = Auction {
        seller: seller.clone(),
        nft_contract: nft_contract.clone(),
        token_id,
        duration,
        start_time: env.ledger().timestamp(),
        start_price,
        highest_bidder: None,
        highest_bid: 0,
        ended: false,
    };
    storage::save_auction(env, auction_id, &auction);

    nft.transfer_from(&ledger, &seller, &ledger, &token_id);

    log!(env, "auction {} created for token {}", auction_id, token_id);

    AuctionCreated {
        auction_id,
        seller,
        nft_contract,
        token_id,
    }
    .publish(env);

    Ok(auction_id)
}

pub fn bid(env: &Env, bidder: Address, auction_id: u64, amount: i128) -> Result<(), Error> {
    bidder.require_auth();

    let mut auction = storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)?;

    if !auction.is_open(env.ledger().timestamp()) {
        return Err(Error::AuctionClosed);
    }

    match auction.highest_bidder {
        None if amount < auction.start_price => return Err(Error::BelowStartPrice),
        Some(_) if amount <= auction.highest_bid => return Err(Error::BidTooLow),
        _ => {}
    }

    let native_token = storage::get_native_token(env).ok_or(Error::NotInitialized)?;

    let previous_bidder = auction.highest_bidder.replace(bidder.clone());
    let previous_bid = auction.highest_bid;
    auction.highest_bid = amount;
    storage::save_auction(env, auction_id, &auction);

    // A failed pull aborts the call, which discards the save above.
    let token_client = token::TokenClient::new(env, &native_token);
    token_client.transfer(&bidder, &env.current_contract_address(), &amount);

    if let Some(previous_bidder) = previous_bidder {
        refund(env, &token_client, auction_id, &previous_bidder, previous_bid);
    }

    log!(env, "auction {} new highest bid {}", auction_id, amount);

    BidPlaced {
        auction_id,
        bidder,
        amount,
    }
    .publish(env);

    Ok(())
}

/// Return an outbid amount. A failed transfer parks the amount for
/// [`withdraw`] instead of undoing the bid that displaced it.
fn refund(
    env: &Env,
    token_client: &token::TokenClient,
    auction_id: u64,
    bidder: &Address,
    amount: i128,
) {
    let ledger = env.current_contract_address();
    if let Ok(Ok(())) = token_client.try_transfer(&ledger, bidder, &amount) {
        return;
    }

    log!(env, "refund of {} deferred for auction {}", amount, auction_id);
    storage::add_pending_return(env, bidder, amount);

    RefundDeferred {
        bidder: bidder.clone(),
        auction_id,
        amount,
    }
    .publish(env);
}

pub fn end_auction(env: &Env, auction_id: u64) -> Result<(), Error> {
    let mut auction = storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)?;

    if env.ledger().timestamp() < auction.end_time() {
        return Err(Error::NotYetExpired);
    }

    if auction.ended {
        return Err(Error::AlreadyEnded);
    }

    auction.ended = true;
    storage::save_auction(env, auction_id, &auction);

    let ledger = env.current_contract_address();
    let nft = NonFungibleTokenClient::new(env, &auction.nft_contract);

    match &auction.highest_bidder {
        Some(winner) => {
            nft.transfer(&ledger, winner, &auction.token_id);

            let native_token = storage::get_native_token(env).ok_or(Error::NotInitialized)?;
            token::TokenClient::new(env, &native_token).transfer(
                &ledger,
                &auction.seller,
                &auction.highest_bid,
            );
        }
        None => {
            nft.transfer(&ledger, &auction.seller, &auction.token_id);
        }
    }

    log!(env, "auction {} settled", auction_id);

    AuctionEnded {
        auction_id,
        winner: auction.highest_bidder,
        token_id: auction.token_id,
    }
    .publish(env);

    Ok(())
}

/// Pay out refunds that could not be delivered while bidding.
pub fn withdraw(env: &Env, bidder: Address) -> Result<i128, Error> {
    bidder.require_auth();

    let amount = storage::get_pending_return(env, &bidder);
    if amount <= 0 {
        return Err(Error::NothingToWithdraw);
    }

    storage::remove_pending_return(env, &bidder);

    let native_token = storage::get_native_token(env).ok_or(Error::NotInitialized)?;
    token::TokenClient::new(env, &native_token).transfer(
        &env.current_contract_address(),
        &bidder,
        &amount,
    );

    RefundWithdrawn {
        bidder,
        amount,
    }
    .publish(env);

    Ok(amount)
}

pub fn get_auction(env: &Env, auction_id: u64) -> Result<Auction, Error> {
    storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)
}

pub fn get_remaining_time(env: &Env, auction_id: u64) -> Result<u64, Error> {
    let auction = get_auction(env, auction_id)?;
    Ok(auction.remaining_time(env.ledger().timestamp()))
}
