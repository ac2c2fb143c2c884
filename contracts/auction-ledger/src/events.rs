use soroban_sdk::{contractevent, Address, BytesN};

use crate::types::AssetKey;

/// Event emitted when the ledger is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    #[topic]
    pub admin: Address,
    pub native_token: Address,
}

/// Event emitted when an NFT is put up for auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
    pub nft_contract: Address,
    pub token_id: u32,
}

/// Event emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted on settlement; `winner` is `None` when nobody bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub token_id: u32,
}

/// Event emitted when an outbid refund could not be delivered and was
/// parked for withdrawal
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundDeferred {
    #[topic]
    pub bidder: Address,
    pub auction_id: u64,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawn {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when the admin registers or replaces a price feed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceFeedSet {
    #[topic]
    pub asset: AssetKey,
    pub oracle: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Upgraded {
    #[topic]
    pub admin: Address,
    pub new_wasm_hash: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Migrated {
    #[topic]
    pub admin: Address,
    pub from_revision: u32,
    pub to_revision: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    #[topic]
    pub old_admin: Address,
    #[topic]
    pub new_admin: Address,
}
