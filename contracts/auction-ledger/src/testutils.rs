//! Test doubles for the contracts the ledger talks to: a minimal NFT
//! collection, an aggregator with a settable answer, and a token whose
//! payouts to chosen recipients can be made to fail. [`Fixture`] wires the
//! accounts and assets every auction contract test starts from.

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events as _, Ledger},
    token, Address, Env, Event, Val, Vec,
};

/// 0.1 in the native currency (7 fractional digits).
pub const TENTH: i128 = 1_000_000;
pub const START_BALANCE: i128 = 10_000 * TENTH;
pub const START_TIME: u64 = 1_000;
pub const DURATION: u64 = 3600;
/// NFTs `1..=LISTED_TOKENS` are minted to the seller.
pub const LISTED_TOKENS: u32 = 5;

/// Accounts, a funded native currency and an NFT collection owned by the
/// seller. The auction contract itself is deployed by each test crate.
pub struct Fixture {
    pub env: Env,
    pub admin: Address,
    pub seller: Address,
    pub buyer1: Address,
    pub buyer2: Address,
    pub nft: MockNftClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_address: Address,
}

impl Fixture {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START_TIME);

        let admin = Address::generate(&env);
        let seller = Address::generate(&env);
        let buyer1 = Address::generate(&env);
        let buyer2 = Address::generate(&env);

        let token_admin = Address::generate(&env);
        let token_address = env
            .register_stellar_asset_contract_v2(token_admin)
            .address();
        let token_admin_client = token::StellarAssetClient::new(&env, &token_address);
        token_admin_client.mint(&buyer1, &START_BALANCE);
        token_admin_client.mint(&buyer2, &START_BALANCE);

        let nft_id = env.register(MockNft, ());
        let nft = MockNftClient::new(&env, &nft_id);
        for token_id in 1..=LISTED_TOKENS {
            nft.mint(&seller, &token_id);
        }

        Fixture {
            token: token::TokenClient::new(&env, &token_address),
            env,
            admin,
            seller,
            buyer1,
            buyer2,
            nft,
            token_address,
        }
    }

    /// Let `operator` take custody of every NFT the seller holds.
    pub fn approve_all(&self, operator: &Address) {
        for token_id in 1..=LISTED_TOKENS {
            self.nft.approve(&self.seller, operator, &token_id);
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}

/// The last `count` events published by `contract_id`, oldest first. Read
/// them right after the call under test.
pub fn last_events(env: &Env, contract_id: &Address, count: u32) -> Vec<(Address, Vec<Val>, Val)> {
    let mut emitted = Vec::new(env);
    for event in env.events().all().iter() {
        if event.0 == *contract_id {
            emitted.push_back(event);
        }
    }
    emitted.slice(emitted.len().saturating_sub(count)..)
}

/// `event` as it appears in the event log of `contract_id`.
pub fn published<E: Event>(env: &Env, contract_id: &Address, event: &E) -> (Address, Vec<Val>, Val) {
    (contract_id.clone(), event.topics(env), event.data(env))
}

#[contracttype]
#[derive(Clone)]
enum MockNftKey {
    Owner(u32),
    Approved(u32),
}

#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    pub fn mint(env: Env, to: Address, token_id: u32) {
        if env.storage().persistent().has(&MockNftKey::Owner(token_id)) {
            panic!("token already minted");
        }
        env.storage().persistent().set(&MockNftKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage()
            .persistent()
            .get(&MockNftKey::Owner(token_id))
            .unwrap_or_else(|| panic!("token does not exist"))
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        env.storage().persistent().get(&MockNftKey::Approved(token_id))
    }

    pub fn approve(env: Env, approver: Address, approved: Address, token_id: u32) {
        approver.require_auth();
        if Self::owner_of(env.clone(), token_id) != approver {
            panic!("approver is not the owner");
        }
        env.storage()
            .persistent()
            .set(&MockNftKey::Approved(token_id), &approved);
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        Self::move_token(&env, &from, &to, token_id);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();
        if spender != from && Self::get_approved(env.clone(), token_id) != Some(spender) {
            panic!("spender is not approved");
        }
        Self::move_token(&env, &from, &to, token_id);
    }

    fn move_token(env: &Env, from: &Address, to: &Address, token_id: u32) {
        if Self::owner_of(env.clone(), token_id) != *from {
            panic!("from is not the owner");
        }
        env.storage().persistent().set(&MockNftKey::Owner(token_id), to);
        env.storage()
            .persistent()
            .remove(&MockNftKey::Approved(token_id));
    }
}

#[contracttype]
#[derive(Clone)]
enum MockAggregatorKey {
    Answer,
    Decimals,
}

#[contract]
pub struct MockAggregator;

#[contractimpl]
impl MockAggregator {
    pub fn update_answer(env: Env, answer: i128) {
        env.storage().instance().set(&MockAggregatorKey::Answer, &answer);
    }

    pub fn set_decimals(env: Env, decimals: u32) {
        env.storage()
            .instance()
            .set(&MockAggregatorKey::Decimals, &decimals);
    }

    pub fn latest_answer(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&MockAggregatorKey::Answer)
            .unwrap_or(0)
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockAggregatorKey::Decimals)
            .unwrap_or(8)
    }
}

#[contracttype]
#[derive(Clone)]
enum MockTokenKey {
    Balance(Address),
    Frozen(Address),
}

/// Native-currency stand-in that refuses to credit frozen accounts.
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&MockTokenKey::Balance(to), &(balance + amount));
    }

    pub fn set_frozen(env: Env, account: Address, frozen: bool) {
        env.storage()
            .persistent()
            .set(&MockTokenKey::Frozen(account), &frozen);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&MockTokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let frozen: bool = env
            .storage()
            .persistent()
            .get(&MockTokenKey::Frozen(to.clone()))
            .unwrap_or(false);
        if frozen {
            panic!("recipient is frozen");
        }
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage()
            .persistent()
            .set(&MockTokenKey::Balance(from), &(from_balance - amount));
        Self::mint(env, to, amount);
    }
}
