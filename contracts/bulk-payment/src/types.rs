//! Data types and events for bulk payments.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

/// Numerator of the protocol fee ratio (net = gross * 100_000 / 100_875).
pub const DEFAULT_FEE_NUMERATOR: i128 = 100_000;

/// Denominator of the protocol fee ratio.
pub const DEFAULT_FEE_DENOMINATOR: i128 = 100_875;

/// Asset a payment leg is denominated in.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Asset {
    /// The network's native currency, reached through its Stellar Asset Contract.
    Native,
    /// Any contract implementing the token interface.
    Token(Address),
}

/// One leg of a bulk payment.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PaymentInstruction {
    pub asset: Asset,
    /// Gross amount charged to the payer, fee included (smallest unit)
    pub amount: i128,
    pub destination: Address,
    /// Opaque content hash describing what is being paid for
    pub deliverable: BytesN<32>,
}

/// Fixed ratio applied to every leg: `net = gross * numerator / denominator`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeeRatio {
    pub numerator: i128,
    pub denominator: i128,
}

impl FeeRatio {
    pub fn protocol_default() -> Self {
        FeeRatio {
            numerator: DEFAULT_FEE_NUMERATOR,
            denominator: DEFAULT_FEE_DENOMINATOR,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.numerator > 0 && self.numerator < self.denominator
    }
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Paused,
    Busy,
    FeeRatio,
    NativeAsset,
}

pub struct PaymentEvents;

impl PaymentEvents {
    pub fn payment_sent(
        env: &Env,
        asset: &Asset,
        net_amount: i128,
        destination: &Address,
        deliverable: &BytesN<32>,
        payer: &Address,
    ) {
        let topics = (symbol_short!("payment"), symbol_short!("sent"));
        env.events().publish(
            topics,
            (
                asset.clone(),
                net_amount,
                destination.clone(),
                deliverable.clone(),
                payer.clone(),
            ),
        );
    }

    pub fn token_withdrawn(env: &Env, asset: &Asset, amount: i128, destination: &Address) {
        let topics = (symbol_short!("token"), symbol_short!("withdrawn"));
        env.events()
            .publish(topics, (asset.clone(), amount, destination.clone()));
    }

    pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
        let topics = (symbol_short!("owner"), symbol_short!("transfer"));
        env.events()
            .publish(topics, (previous_owner.clone(), new_owner.clone()));
    }

    pub fn paused(env: &Env, caller: &Address) {
        let topics = (symbol_short!("guard"), symbol_short!("paused"));
        env.events().publish(topics, caller.clone());
    }

    pub fn unpaused(env: &Env, caller: &Address) {
        let topics = (symbol_short!("guard"), symbol_short!("unpaused"));
        env.events().publish(topics, caller.clone());
    }
}
