use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Whitelist mint is closed")]
    WhitelistMintClosed {},

    #[error("Allowlist mint is closed")]
    AllowlistMintClosed {},

    #[error("Public mint is not started")]
    PublicMintClosed {},

    #[error("Address is not whitelisted")]
    AddressNotWhitelisted {},

    #[error("Address is not allowlisted")]
    AddressNotAllowlisted {},

    #[error("Address has reached the mint limit")]
    AddressReachedMintLimit {},

    #[error("Whitelist limit is reached")]
    WhitelistLimitReached {},

    #[error("Max token supply exceeded")]
    MaxSupplyExceeded {},

    #[error("Insufficient payment")]
    InsufficientPayment { expected: Uint128, sent: Uint128 },

    #[error("Invalid number of tokens")]
    InvalidNumTokens {},

    #[error("Per wallet limit cannot be zero")]
    PerWalletLimitZero {},

    #[error("Invalid whitelist limit")]
    InvalidWhitelistLimit {},

    #[error("Invalid merkle root")]
    InvalidMerkleRoot {},

    #[error("Quantity cannot be zero")]
    InvalidQuantity {},

    #[error("Nothing to withdraw")]
    NothingToWithdraw {},

    #[error("Overflow error")]
    OverflowError {},

    #[error("Cannot migrate from a different contract: {actual}")]
    InvalidMigrationContract { actual: String },

    #[error("Cannot migrate from version {stored} to {requested}")]
    InvalidMigrationVersion { stored: String, requested: String },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}

impl From<OverflowError> for ContractError {
    fn from(_err: OverflowError) -> Self {
        ContractError::OverflowError {}
    }
}
