pub mod price_feed_test;

use crate::{NftAuction, NftAuctionClient};
use auction_ledger::testutils::{
    last_events, published, Fixture, MockAggregator, MockAggregatorClient, MockNftClient,
};
use soroban_sdk::{token, Address, Env, Event, Val, Vec};

pub use auction_ledger::testutils::{advance_ledger, DURATION, START_BALANCE, START_TIME, TENTH};

pub struct TestContext {
    pub env: Env,
    pub client: NftAuctionClient<'static>,
    pub admin: Address,
    pub seller: Address,
    pub buyer1: Address,
    pub buyer2: Address,
    pub nft: MockNftClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_address: Address,
}

impl TestContext {
    /// Open an auction on `token_id` with the default duration and a 0.1
    /// start price.
    pub fn create_auction(&self, token_id: u32) -> u64 {
        self.client
            .create_auction(&self.seller, &self.nft.address, &token_id, &DURATION, &TENTH)
    }

    /// The last `count` events published by the auction contract.
    pub fn last_events(&self, count: u32) -> Vec<(Address, Vec<Val>, Val)> {
        last_events(&self.env, &self.client.address, count)
    }

    pub fn event<E: Event>(&self, event: &E) -> (Address, Vec<Val>, Val) {
        published(&self.env, &self.client.address, event)
    }
}

pub fn setup_test() -> TestContext {
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
        client: NftAuctionClient::new(&env, &contract_id),
        env,
        admin,
        seller,
        buyer1,
        buyer2,
        nft,
        token,
        token_address,
    }
}

/// Register an aggregator reporting `answer` with 8 fractional digits.
pub fn register_aggregator(env: &Env, answer: i128) -> MockAggregatorClient<'static> {
    let aggregator_id = env.register(MockAggregator, ());
    let aggregator = MockAggregatorClient::new(env, &aggregator_id);
    aggregator.update_answer(&answer);
    aggregator
}
