use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub max_total_supply: u32,
    pub per_wallet_limit: u32,
    pub whitelist_limit: u32,
    pub mint_denom: String,
}

#[cw_serde]
pub struct CollectionDetails {
    pub name: String,
    pub symbol: String,
    // Token uri is base_uri + token_id, no separator is inserted
    pub base_uri: String,
}

/// Which mint paths are currently open. Flags are independent and only ever
/// flip from closed to open.
#[cw_serde]
pub struct PhaseFlags {
    pub whitelist_open: bool,
    pub allowlist_open: bool,
    pub public_open: bool,
}

impl Default for PhaseFlags {
    fn default() -> Self {
        PhaseFlags {
            whitelist_open: false,
            allowlist_open: false,
            public_open: false,
        }
    }
}

/// Per-token prices for the paid phases, in the configured mint denom.
/// Whitelist and treasury mints are price-exempt.
#[cw_serde]
pub struct MintPrices {
    pub allowlist_price: Uint128,
    pub public_price: Uint128,
}

impl Default for MintPrices {
    fn default() -> Self {
        MintPrices {
            allowlist_price: Uint128::zero(),
            public_price: Uint128::zero(),
        }
    }
}

#[cw_serde]
pub struct UserDetails {
    pub minted_tokens: Vec<u32>,
    pub total_minted_count: u32,
}

impl Default for UserDetails {
    fn default() -> Self {
        UserDetails {
            minted_tokens: Vec::new(),
            total_minted_count: 0,
        }
    }
}
