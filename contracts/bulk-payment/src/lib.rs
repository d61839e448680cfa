//! # Bulk Payment Contract
//!
//! Pays many destinations in one atomic call. Each leg is denominated either in
//! native XLM or in any Soroban token, and a fixed protocol fee is kept back
//! from every leg. The fees stay in the contract until the owner sweeps them.
//!
//! ## Features
//! - Mixed native/token batches settled all-or-nothing
//! - Exact accounting of the attached native value against the native legs
//! - One `payment/sent` event per leg, carrying the net amount and deliverable
//! - Owner-only pause, ownership transfer and balance recovery
#![no_std]

mod access;
mod error;
mod fee;
mod gateway;
mod types;
mod validation;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use crate::error::BulkPaymentError;
pub use crate::types::{
    Asset, DataKey, FeeRatio, PaymentEvents, PaymentInstruction, DEFAULT_FEE_DENOMINATOR,
    DEFAULT_FEE_NUMERATOR,
};
use crate::gateway::AssetGateway;
use crate::validation::{validate_amount, validate_target};

#[contract]
pub struct BulkPaymentContract;

#[contractimpl]
impl BulkPaymentContract {
    /// Initializes the contract.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `owner` - The address allowed to pause, transfer ownership and withdraw
    /// * `native_asset` - The Stellar Asset Contract of the native currency
    /// * `fee_ratio` - The fixed net/gross ratio applied to every leg
    pub fn initialize(
        env: Env,
        owner: Address,
        native_asset: Address,
        fee_ratio: FeeRatio,
    ) -> Result<(), BulkPaymentError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(BulkPaymentError::AlreadyInitialized);
        }
        if !fee_ratio.is_valid() {
            return Err(BulkPaymentError::InvalidFeeRatio);
        }

        access::set_owner(&env, &owner);
        access::set_paused(&env, false);
        env.storage()
            .instance()
            .set(&DataKey::NativeAsset, &native_asset);
        env.storage().instance().set(&DataKey::FeeRatio, &fee_ratio);
        Ok(())
    }

    /// Executes a batch of payments on behalf of `payer`.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `payer` - The address charged for every leg (must authorize the call)
    /// * `payments` - The legs, processed and reported in order
    /// * `native_value` - Native currency attached to the call; must equal the
    ///   sum of the gross amounts of the native legs
    ///
    /// Token legs are pulled from `payer` through `transfer_from`, so `payer`
    /// must have approved this contract for at least the gross amount.
    pub fn pay(
        env: Env,
        payer: Address,
        payments: Vec<PaymentInstruction>,
        native_value: i128,
    ) -> Result<(), BulkPaymentError> {
        payer.require_auth();
        access::require_not_paused(&env)?;
        access::enter(&env)?;

        let ratio = load_fee_ratio(&env)?;
        let gateway = AssetGateway::new(&env, load_native_asset(&env)?);
        validate_amount(native_value)?;

        // Every leg is checked and the native total settled before anything moves.
        let mut required_native: i128 = 0;
        let mut nets: Vec<i128> = Vec::new(&env);
        for payment in payments.iter() {
            let (net, _fee) = fee::split(&ratio, payment.amount)?;
            nets.push_back(net);
            if payment.asset == Asset::Native {
                required_native = required_native
                    .checked_add(payment.amount)
                    .ok_or(BulkPaymentError::ArithmeticOverflow)?;
            }
        }
        if native_value > required_native {
            return Err(BulkPaymentError::OverpaidNative);
        }
        if native_value < required_native {
            return Err(BulkPaymentError::InsufficientNativeBalance);
        }

        log!(&env, "bulk payment", payer.clone(), payments.len(), native_value);
        gateway.collect_attached(&payer, native_value)?;

        for (payment, net) in payments.iter().zip(nets.iter()) {
            gateway.pull(&payment.asset, &payer, payment.amount)?;
            gateway.push(&payment.asset, &payment.destination, net)?;

            PaymentEvents::payment_sent(
                &env,
                &payment.asset,
                net,
                &payment.destination,
                &payment.deliverable,
                &payer,
            );
        }

        access::exit(&env);
        Ok(())
    }

    /// Stops `pay` until the owner unpauses.
    pub fn pause(env: Env, caller: Address) -> Result<(), BulkPaymentError> {
        access::require_owner(&env, &caller)?;
        if access::is_paused(&env) {
            return Err(BulkPaymentError::AlreadyPaused);
        }

        access::set_paused(&env, true);
        PaymentEvents::paused(&env, &caller);
        Ok(())
    }

    /// Resumes `pay` after a pause.
    pub fn unpause(env: Env, caller: Address) -> Result<(), BulkPaymentError> {
        access::require_owner(&env, &caller)?;
        if !access::is_paused(&env) {
            return Err(BulkPaymentError::NotPaused);
        }

        access::set_paused(&env, false);
        PaymentEvents::unpaused(&env, &caller);
        Ok(())
    }

    /// Hands the owner role to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), BulkPaymentError> {
        let previous_owner = access::require_owner(&env, &caller)?;
        validate_target(&env, &new_owner)?;

        access::set_owner(&env, &new_owner);
        PaymentEvents::ownership_transferred(&env, &previous_owner, &new_owner);
        Ok(())
    }

    /// Sends the contract's whole balance of `asset` to `destination`.
    ///
    /// The balance holds collected fees as well as anything sent to the
    /// contract by mistake; both are swept together. Passing `Asset::Native`
    /// recovers native fees.
    ///
    /// # Returns
    /// The amount withdrawn.
    pub fn withdraw_token(
        env: Env,
        caller: Address,
        asset: Asset,
        destination: Address,
    ) -> Result<i128, BulkPaymentError> {
        access::require_owner(&env, &caller)?;
        validate_target(&env, &destination)?;
        access::enter(&env)?;

        let gateway = AssetGateway::new(&env, load_native_asset(&env)?);
        let amount = gateway.balance(&asset)?;
        gateway.push(&asset, &destination, amount)?;

        access::exit(&env);
        log!(&env, "withdrawn", destination.clone(), amount);
        PaymentEvents::token_withdrawn(&env, &asset, amount, &destination);
        Ok(amount)
    }

    /// Returns the owner address.
    pub fn owner(env: Env) -> Result<Address, BulkPaymentError> {
        access::owner(&env)
    }

    /// Returns whether payments are paused.
    pub fn paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    /// Returns the fixed net/gross fee ratio.
    pub fn fee_ratio(env: Env) -> Result<FeeRatio, BulkPaymentError> {
        load_fee_ratio(&env)
    }

    /// Returns the Stellar Asset Contract used for native legs.
    pub fn native_asset(env: Env) -> Result<Address, BulkPaymentError> {
        load_native_asset(&env)
    }

    /// Returns `(net, fee)` for a gross amount under the configured ratio.
    pub fn quote(env: Env, gross: i128) -> Result<(i128, i128), BulkPaymentError> {
        fee::split(&load_fee_ratio(&env)?, gross)
    }
}

fn load_fee_ratio(env: &Env) -> Result<FeeRatio, BulkPaymentError> {
    env.storage()
        .instance()
        .get(&DataKey::FeeRatio)
        .ok_or(BulkPaymentError::NotInitialized)
}

fn load_native_asset(env: &Env) -> Result<Address, BulkPaymentError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeAsset)
        .ok_or(BulkPaymentError::NotInitialized)
}
