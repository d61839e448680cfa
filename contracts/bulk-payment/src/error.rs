use soroban_sdk::contracterror;

/// Error codes for the bulk payment contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BulkPaymentError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Contract already initialized
    AlreadyInitialized = 2,
    /// Caller is not the owner
    Unauthorized = 3,
    /// Payments are paused
    ProcessorPaused = 4,
    /// More native currency attached than the native legs require
    OverpaidNative = 5,
    /// Less native currency attached than the native legs require
    InsufficientNativeBalance = 6,
    /// An asset movement failed
    TransferRejected = 7,
    /// Amount arithmetic exceeded the integer range
    ArithmeticOverflow = 8,
    /// Contract is already paused
    AlreadyPaused = 9,
    /// Contract is not paused
    NotPaused = 10,
    /// Address cannot be used as an owner or withdrawal target
    InvalidAddress = 11,
    /// Negative amount
    InvalidAmount = 12,
    /// Fee ratio must satisfy 0 < numerator < denominator
    InvalidFeeRatio = 13,
    /// A payment or withdrawal is already in flight
    Reentrancy = 14,
}
