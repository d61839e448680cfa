//! Asset movement for native currency and tokens.
//!
//! Native currency is reached through its Stellar Asset Contract, so both
//! asset kinds end up as token calls. They still differ in one respect: a
//! token leg is pulled from the payer per leg, while native currency arrives
//! once per call as the attached value.

use soroban_sdk::{log, token, Address, Env};

use crate::error::BulkPaymentError;
use crate::types::Asset;

pub struct AssetGateway<'a> {
    env: &'a Env,
    native: Address,
}

impl<'a> AssetGateway<'a> {
    pub fn new(env: &'a Env, native: Address) -> Self {
        AssetGateway { env, native }
    }

    /// Pulls `amount` of a token from `from` into the contract using the
    /// allowance `from` granted. Native currency has no pull leg.
    pub fn pull(&self, asset: &Asset, from: &Address, amount: i128) -> Result<(), BulkPaymentError> {
        let token_id = match asset {
            Asset::Native => return Ok(()),
            Asset::Token(token_id) => token_id,
        };
        if amount == 0 {
            return Ok(());
        }

        let this = self.env.current_contract_address();
        let client = token::Client::new(self.env, token_id);
        match client.try_transfer_from(&this, from, &this, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "pull rejected", token_id.clone(), amount);
                Err(BulkPaymentError::TransferRejected)
            }
        }
    }

    /// Moves the native value attached to a call from the payer into the contract.
    pub fn collect_attached(&self, from: &Address, amount: i128) -> Result<(), BulkPaymentError> {
        if amount == 0 {
            return Ok(());
        }

        let this = self.env.current_contract_address();
        let client = token::Client::new(self.env, &self.native);
        match client.try_transfer(from, &this, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(BulkPaymentError::TransferRejected),
        }
    }

    /// Sends `amount` of `asset` from the contract to `to`.
    pub fn push(&self, asset: &Asset, to: &Address, amount: i128) -> Result<(), BulkPaymentError> {
        if amount == 0 {
            return Ok(());
        }

        let this = self.env.current_contract_address();
        let client = token::Client::new(self.env, self.resolve(asset));
        match client.try_transfer(&this, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "push rejected", to.clone(), amount);
                Err(BulkPaymentError::TransferRejected)
            }
        }
    }

    /// Current holding of `asset` by the contract.
    pub fn balance(&self, asset: &Asset) -> Result<i128, BulkPaymentError> {
        let client = token::Client::new(self.env, self.resolve(asset));
        match client.try_balance(&self.env.current_contract_address()) {
            Ok(Ok(balance)) => Ok(balance),
            _ => Err(BulkPaymentError::TransferRejected),
        }
    }

    fn resolve<'b>(&'b self, asset: &'b Asset) -> &'b Address {
        match asset {
            Asset::Native => &self.native,
            Asset::Token(token_id) => token_id,
        }
    }
}
