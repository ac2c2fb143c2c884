pub mod admin_test;
pub mod remaining_time_test;

use crate::{NftAuctionV2, NftAuctionV2Client};
use auction_ledger::testutils::{Fixture, MockNftClient};
use nft_auction::{NftAuction, NftAuctionClient};
use soroban_sdk::{token, Address, Env};

pub use auction_ledger::testutils::{advance_ledger, DURATION, START_BALANCE, TENTH};

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub admin: Address,
    pub seller: Address,
    pub buyer1: Address,
    pub buyer2: Address,
    pub nft: MockNftClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_address: Address,
}

impl TestContext {
    /// Client speaking the revision 1 interface at the shared address.
    pub fn v1(&self) -> NftAuctionClient<'static> {
        NftAuctionClient::new(&self.env, &self.contract_id)
    }

    /// Client speaking the revision 2 interface at the shared address.
    pub fn v2(&self) -> NftAuctionV2Client<'static> {
        NftAuctionV2Client::new(&self.env, &self.contract_id)
    }

    /// Attach revision 2 code to the address revision 1 was deployed at,
    /// keeping every storage entry.
    pub fn upgrade_to_v2(&self) {
        self.env.register_at(&self.contract_id, NftAuctionV2, ());
    }
}

/// Deploy revision 1, with five NFTs owned by the seller and approved for
/// the auction contract.
pub fn setup_v1() -> TestContext {
    let fixture = Fixture::new();
    let contract_id = fixture.env.register(
        NftAuction,
        (fixture.admin.clone(), fixture.token_address.clone()),
    );
    fixture.approve_all(&contract_id);

    let Fixture {
        env,
        admin,
        seller,
        buyer1,
        buyer2,
        nft,
        token,
        token_address,
    } = fixture;

    TestContext {
        env,
        contract_id,
        admin,
        seller,
        buyer1,
        buyer2,
        nft,
        token,
        token_address,
    }
}

/// Revision 1 deployment upgraded before any auction exists.
pub fn setup_v2() -> TestContext {
    let ctx = setup_v1();
    ctx.upgrade_to_v2();
    ctx
}
