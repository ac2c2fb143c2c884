use soroban_sdk::{contractclient, Address, Env};

/// The slice of a non-fungible token contract the ledger relies on to take
/// and release custody. Approval of the ledger by the seller happens outside
/// the ledger, before `create_auction`.
#[allow(dead_code)]
#[contractclient(name = "NonFungibleTokenClient")]
pub trait NonFungibleToken {
    /// Current owner of `token_id`.
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Move `token_id` owned by `from`, authorised by `from`.
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);

    /// Move `token_id` owned by `from` on behalf of an approved `spender`.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}
