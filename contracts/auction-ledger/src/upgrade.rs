//! Attaching logic revisions to the ledger storage.
//!
//! Initialization runs from the revision 1 constructor and is guarded by its
//! own `Initialized` flag rather than by the revision number, so no later
//! revision can run it again to reset the admin or the auction counter.

use soroban_sdk::{log, Address, BytesN, Env};

use crate::admin;
use crate::errors::Error;
use crate::events::{Initialized, Migrated, Upgraded};
use crate::storage;

pub fn initialize(env: &Env, admin: Address, native_token: Address) -> Result<(), Error> {
    if storage::is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }

    admin.require_auth();

    storage::set_initialized(env);
    storage::set_admin(env, &admin);
    storage::set_native_token(env, &native_token);

    Initialized {
        admin,
        native_token,
    }
    .publish(env);

    Ok(())
}

/// Swap the WASM behind this contract address (admin only). Storage is left
/// exactly as it is.
pub fn upgrade(env: &Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
    admin::require_initialized(env)?;
    admin::require_admin(env, &admin)?;

    Upgraded {
        admin,
        new_wasm_hash: new_wasm_hash.clone(),
    }
    .publish(env);

    env.deployer().update_current_contract_wasm(new_wasm_hash);

    Ok(())
}

/// Record that storage has been brought up to `target` (admin only).
///
/// Idempotent: nothing is written when the stored revision is already at or
/// past `target`. Only keys appended by later revisions may be touched here.
pub fn migrate(env: &Env, admin: Address, target: u32) -> Result<u32, Error> {
    admin::require_initialized(env)?;
    admin::require_admin(env, &admin)?;

    let current = storage::get_revision(env);
    if current >= target {
        return Ok(current);
    }

    storage::set_revision(env, target);

    log!(env, "storage migrated from revision {} to {}", current, target);

    Migrated {
        admin,
        from_revision: current,
        to_revision: target,
    }
    .publish(env);

    Ok(target)
}

pub fn get_revision(env: &Env) -> u32 {
    storage::get_revision(env)
}
