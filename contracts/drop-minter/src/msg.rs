use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub max_total_supply: u32,
    pub per_wallet_limit: u32,
    pub whitelist_limit: u32,
    pub mint_denom: String,
    pub base_uri: Option<String>,
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    MintWhitelist {
        quantity: u32,
        proof: Vec<HexBinary>,
    },
    MintAllowlist {
        quantity: u32,
        proof: Vec<HexBinary>,
    },
    MintPublic {
        quantity: u32,
    },
    TreasuryMint {
        quantity: u32,
        recipient: Option<String>,
    },
    SetWhitelistRoot {
        root: HexBinary,
    },
    SetAllowlistRoot {
        root: HexBinary,
    },
    SetAllowlistPrice {
        price: Uint128,
    },
    SetPublicPrice {
        price: Uint128,
    },
    SetBaseUri {
        base_uri: String,
    },
    OpenWhitelistMint {},
    OpenAllowlistMint {},
    OpenPublicMint {},
    Withdraw {},
}

#[cw_serde]
pub struct MigrateMsg {}
