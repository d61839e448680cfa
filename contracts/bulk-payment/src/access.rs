//! Owner, pause flag and reentrancy guard.

use soroban_sdk::{Address, Env};

use crate::error::BulkPaymentError;
use crate::types::DataKey;

pub fn owner(env: &Env) -> Result<Address, BulkPaymentError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(BulkPaymentError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, BulkPaymentError> {
    caller.require_auth();
    let owner = owner(env)?;
    if *caller != owner {
        return Err(BulkPaymentError::Unauthorized);
    }
    Ok(owner)
}

pub fn require_not_paused(env: &Env) -> Result<(), BulkPaymentError> {
    if is_paused(env) {
        return Err(BulkPaymentError::ProcessorPaused);
    }
    Ok(())
}

/// Marks the contract busy for the duration of an outbound transfer sequence.
///
/// A failed invocation never reaches `exit`; the host rollback discards the
/// flag together with the rest of the invocation's writes.
pub fn enter(env: &Env) -> Result<(), BulkPaymentError> {
    let busy: bool = env.storage().instance().get(&DataKey::Busy).unwrap_or(false);
    if busy {
        return Err(BulkPaymentError::Reentrancy);
    }
    env.storage().instance().set(&DataKey::Busy, &true);
    Ok(())
}

pub fn exit(env: &Env) {
    env.storage().instance().remove(&DataKey::Busy);
}
