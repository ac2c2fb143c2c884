use soroban_sdk::contracterror;

/// Failure reasons surfaced to callers of both contract revisions.
///
/// Discriminants are part of the on-chain interface and must never be
/// renumbered; new variants are appended.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidAsset = 1,
    ZeroDuration = 2,
    ZeroStartPrice = 3,
    NotOwner = 4,
    AuctionNotFound = 5,
    AuctionClosed = 6,
    BelowStartPrice = 7,
    BidTooLow = 8,
    NotYetExpired = 9,
    AlreadyEnded = 10,
    NotAdmin = 11,
    FeedNotSet = 12,
    AlreadyInitialized = 13,
    NotInitialized = 14,
    NothingToWithdraw = 15,
    InvalidPrice = 16,
}
