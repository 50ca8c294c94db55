use cosmwasm_std::{Addr, HexBinary};
use cw_storage_plus::{Item, Map};

use drop_types::{CollectionDetails, Config, MintPrices, PhaseFlags, UserDetails};

pub const CONFIG: Item<Config> = Item::new("config");
pub const COLLECTION: Item<CollectionDetails> = Item::new("collection");
pub const PHASES: Item<PhaseFlags> = Item::new("phases");
pub const PRICES: Item<MintPrices> = Item::new("prices");
// Absent root means nobody is eligible for that phase
pub const WHITELIST_ROOT: Item<HexBinary> = Item::new("whitelist_root");
pub const ALLOWLIST_ROOT: Item<HexBinary> = Item::new("allowlist_root");
// Number of tokens issued so far; ids are 1..=TOTAL_SUPPLY with no gaps
pub const TOTAL_SUPPLY: Item<u32> = Item::new("total_supply");
// Tokens issued through the whitelist phase
pub const WHITELIST_MINTED: Item<u32> = Item::new("whitelist_minted");
// Address and tokens minted by it
pub const MINTED_TOKENS: Map<Addr, UserDetails> = Map::new("minted_tokens");
// Token id to owner, written once at mint time
pub const TOKEN_OWNERS: Map<u32, Addr> = Map::new("token_owners");
