use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::AdminTransferred;
use crate::storage;

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !storage::is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

/// Authenticate `admin` and check it is the stored administrator.
pub fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    admin.require_auth();
    let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
    if stored_admin != *admin {
        return Err(Error::NotAdmin);
    }
    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    storage::get_admin(env).ok_or(Error::NotInitialized)
}

/// Hand the admin role to `new_admin`. Only reachable from revision 2.
pub fn transfer_admin(env: &Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
    require_admin(env, &current_admin)?;
    new_admin.require_auth();

    storage::set_admin(env, &new_admin);

    AdminTransferred {
        old_admin: current_admin,
        new_admin,
    }
    .publish(env);

    Ok(())
}
