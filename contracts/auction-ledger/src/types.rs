use soroban_sdk::{contracttype, Address};

// TTL constants (same cadence as the marketplace storage)
pub const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Fractional digits of every price returned by the valuation reads.
pub const PRICE_DECIMALS: u32 = 8;

/// Fractional digits of the native currency (stroops per lumen).
pub const NATIVE_DECIMALS: u32 = 7;

/// Revision reported when no migration has ever run.
pub const BASE_REVISION: u32 = 1;

/// Storage keys shared by every logic revision.
///
/// The discriminant order and payload types are the persisted layout:
/// existing variants are frozen, later revisions only append.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // revision 1
    Initialized,
    Admin,
    NativeToken,
    AuctionCount,
    Auction(u64),
    PriceFeed(AssetKey),
    PendingReturn(Address),
    // revision 2
    Revision,
}

/// Key of a price feed entry. `Native` stands for the chain currency.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetKey {
    Native,
    Contract(Address),
}

/// One English auction over a single escrowed NFT.
///
/// Field order and types are frozen: revision 2 decodes records written
/// by revision 1 with this exact definition.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub nft_contract: Address,
    pub token_id: u32,
    pub duration: u64,
    pub start_time: u64,
    pub start_price: i128,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub ended: bool,
}

impl Auction {
    /// Timestamp from which the auction no longer accepts bids.
    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(self.duration)
    }

    pub fn is_open(&self, now: u64) -> bool {
        !self.ended && now < self.end_time()
    }

    pub fn remaining_time(&self, now: u64) -> u64 {
        if self.ended {
            return 0;
        }
        self.end_time().saturating_sub(now)
    }
}
