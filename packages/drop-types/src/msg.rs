use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary};

use crate::types::{CollectionDetails, Config, MintPrices, PhaseFlags, UserDetails};

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(CollectionDetails)]
    Collection {},

    #[returns(PhaseFlags)]
    Phases {},

    #[returns(MintPrices)]
    Prices {},

    #[returns(MerkleRootsResponse)]
    MerkleRoots {},

    #[returns(u32)]
    TotalSupply {},

    #[returns(u32)]
    WhitelistMinted {},

    #[returns(Addr)]
    OwnerOf { token_id: u32 },

    #[returns(String)]
    TokenUri { token_id: u32 },

    #[returns(UserDetails)]
    MintedTokens { address: String },
}

#[cw_serde]
pub struct MerkleRootsResponse {
    pub whitelist_root: Option<HexBinary>,
    pub allowlist_root: Option<HexBinary>,
}
