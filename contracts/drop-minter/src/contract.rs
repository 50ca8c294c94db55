#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Response,
    StdError, StdResult, Storage, Uint128,
};

use cw_storage_plus::Item;
use cw_utils::{may_pay, maybe_addr, nonpayable};

use drop_types::{
    CollectionDetails, Config, MerkleRootsResponse, MintPrices, PhaseFlags, QueryMsg, UserDetails,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{
    ALLOWLIST_ROOT, COLLECTION, CONFIG, MINTED_TOKENS, PHASES, PRICES, TOKEN_OWNERS, TOTAL_SUPPLY,
    WHITELIST_MINTED, WHITELIST_ROOT,
};

use cw2::set_contract_version;

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:drop-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    nonpayable(&info)?;

    if msg.max_total_supply == 0 {
        return Err(ContractError::InvalidNumTokens {});
    }
    if msg.per_wallet_limit == 0 {
        return Err(ContractError::PerWalletLimitZero {});
    }
    // The whitelist aggregate cap carves a tranche out of the total supply
    if msg.whitelist_limit == 0 || msg.whitelist_limit > msg.max_total_supply {
        return Err(ContractError::InvalidWhitelistLimit {});
    }

    let admin = maybe_addr(deps.api, msg.admin.clone())?.unwrap_or(info.sender.clone());

    let config = Config {
        admin: admin.clone(),
        max_total_supply: msg.max_total_supply,
        per_wallet_limit: msg.per_wallet_limit,
        whitelist_limit: msg.whitelist_limit,
        mint_denom: msg.mint_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    let collection = CollectionDetails {
        name: msg.name,
        symbol: msg.symbol,
        base_uri: msg.base_uri.unwrap_or_default(),
    };
    COLLECTION.save(deps.storage, &collection)?;

    // All phases start closed, prices start at zero, no roots are committed
    PHASES.save(deps.storage, &PhaseFlags::default())?;
    PRICES.save(deps.storage, &MintPrices::default())?;
    TOTAL_SUPPLY.save(deps.storage, &0u32)?;
    WHITELIST_MINTED.save(deps.storage, &0u32)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin);

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintWhitelist { quantity, proof } => {
            execute_mint_whitelist(deps, env, info, quantity, proof)
        }
        ExecuteMsg::MintAllowlist { quantity, proof } => {
            execute_mint_allowlist(deps, env, info, quantity, proof)
        }
        ExecuteMsg::MintPublic { quantity } => execute_mint_public(deps, env, info, quantity),
        ExecuteMsg::TreasuryMint {
            quantity,
            recipient,
        } => execute_treasury_mint(deps, env, info, quantity, recipient),
        ExecuteMsg::SetWhitelistRoot { root } => {
            execute_set_root(deps, env, info, &WHITELIST_ROOT, "whitelist", root)
        }
        ExecuteMsg::SetAllowlistRoot { root } => {
            execute_set_root(deps, env, info, &ALLOWLIST_ROOT, "allowlist", root)
        }
        ExecuteMsg::SetAllowlistPrice { price } => {
            execute_set_allowlist_price(deps, env, info, price)
        }
        ExecuteMsg::SetPublicPrice { price } => execute_set_public_price(deps, env, info, price),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, env, info, base_uri),
        ExecuteMsg::OpenWhitelistMint {} => execute_open_whitelist_mint(deps, env, info),
        ExecuteMsg::OpenAllowlistMint {} => execute_open_allowlist_mint(deps, env, info),
        ExecuteMsg::OpenPublicMint {} => execute_open_public_mint(deps, env, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn execute_mint_whitelist(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    quantity: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    // Whitelist mints are free of charge
    nonpayable(&info)?;

    let phases = PHASES.load(deps.storage)?;
    if !phases.whitelist_open {
        return Err(ContractError::WhitelistMintClosed {});
    }
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    let root = WHITELIST_ROOT
        .may_load(deps.storage)?
        .ok_or(ContractError::AddressNotWhitelisted {})?;
    if !merkle_proofs::verify(info.sender.as_bytes(), &proof, &root) {
        return Err(ContractError::AddressNotWhitelisted {});
    }

    let config = CONFIG.load(deps.storage)?;
    let mut user_details = MINTED_TOKENS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or_default();
    if user_details.total_minted_count as u64 + quantity as u64 > config.per_wallet_limit as u64 {
        return Err(ContractError::AddressReachedMintLimit {});
    }

    let whitelist_minted = WHITELIST_MINTED.load(deps.storage)?;
    if whitelist_minted as u64 + quantity as u64 > config.whitelist_limit as u64 {
        return Err(ContractError::WhitelistLimitReached {});
    }

    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    if total_supply as u64 + quantity as u64 > config.max_total_supply as u64 {
        return Err(ContractError::MaxSupplyExceeded {});
    }

    // Every check passed, commit
    let first_token_id = issue_tokens(deps.storage, &info.sender, quantity)?;
    record_user_mints(
        deps.storage,
        &info.sender,
        &mut user_details,
        first_token_id,
        quantity,
    )?;
    WHITELIST_MINTED.save(deps.storage, &(whitelist_minted + quantity))?;

    let res = Response::new()
        .add_attribute("action", "mint_whitelist")
        .add_attribute("minter", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", first_token_id.to_string());

    Ok(res)
}

pub fn execute_mint_allowlist(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    quantity: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    let phases = PHASES.load(deps.storage)?;
    if !phases.allowlist_open {
        return Err(ContractError::AllowlistMintClosed {});
    }
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    let root = ALLOWLIST_ROOT
        .may_load(deps.storage)?
        .ok_or(ContractError::AddressNotAllowlisted {})?;
    if !merkle_proofs::verify(info.sender.as_bytes(), &proof, &root) {
        return Err(ContractError::AddressNotAllowlisted {});
    }

    let config = CONFIG.load(deps.storage)?;
    let mut user_details = MINTED_TOKENS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or_default();
    if user_details.total_minted_count as u64 + quantity as u64 > config.per_wallet_limit as u64 {
        return Err(ContractError::AddressReachedMintLimit {});
    }

    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    if total_supply as u64 + quantity as u64 > config.max_total_supply as u64 {
        return Err(ContractError::MaxSupplyExceeded {});
    }

    // At least price * quantity must be attached; overpayment stays in the
    // treasury
    let prices = PRICES.load(deps.storage)?;
    let amount = may_pay(&info, &config.mint_denom)?;
    let required = prices
        .allowlist_price
        .checked_mul(Uint128::from(quantity))?;
    if amount < required {
        return Err(ContractError::InsufficientPayment {
            expected: required,
            sent: amount,
        });
    }

    // Every check passed, commit
    let first_token_id = issue_tokens(deps.storage, &info.sender, quantity)?;
    record_user_mints(
        deps.storage,
        &info.sender,
        &mut user_details,
        first_token_id,
        quantity,
    )?;

    let res = Response::new()
        .add_attribute("action", "mint_allowlist")
        .add_attribute("minter", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", first_token_id.to_string());

    Ok(res)
}

pub fn execute_mint_public(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let phases = PHASES.load(deps.storage)?;
    if !phases.public_open {
        return Err(ContractError::PublicMintClosed {});
    }
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    let config = CONFIG.load(deps.storage)?;
    let mut user_details = MINTED_TOKENS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or_default();
    if user_details.total_minted_count as u64 + quantity as u64 > config.per_wallet_limit as u64 {
        return Err(ContractError::AddressReachedMintLimit {});
    }

    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    if total_supply as u64 + quantity as u64 > config.max_total_supply as u64 {
        return Err(ContractError::MaxSupplyExceeded {});
    }

    let prices = PRICES.load(deps.storage)?;
    let amount = may_pay(&info, &config.mint_denom)?;
    let required = prices.public_price.checked_mul(Uint128::from(quantity))?;
    if amount < required {
        return Err(ContractError::InsufficientPayment {
            expected: required,
            sent: amount,
        });
    }

    // Every check passed, commit
    let first_token_id = issue_tokens(deps.storage, &info.sender, quantity)?;
    record_user_mints(
        deps.storage,
        &info.sender,
        &mut user_details,
        first_token_id,
        quantity,
    )?;

    let res = Response::new()
        .add_attribute("action", "mint_public")
        .add_attribute("minter", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", first_token_id.to_string());

    Ok(res)
}

pub fn execute_treasury_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    quantity: u32,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }
    let recipient = maybe_addr(deps.api, recipient)?.unwrap_or(config.admin.clone());

    // Treasury mints bypass the per-wallet and whitelist quotas but never
    // the supply cap
    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    if total_supply as u64 + quantity as u64 > config.max_total_supply as u64 {
        return Err(ContractError::MaxSupplyExceeded {});
    }

    let first_token_id = issue_tokens(deps.storage, &recipient, quantity)?;

    let res = Response::new()
        .add_attribute("action", "treasury_mint")
        .add_attribute("recipient", recipient)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", first_token_id.to_string());

    Ok(res)
}

/// Assign the next `quantity` token ids to `recipient` and advance the
/// supply counter. Every mint path converges here after its checks, so no
/// two mints can ever claim overlapping id ranges.
fn issue_tokens(
    storage: &mut dyn Storage,
    recipient: &Addr,
    quantity: u32,
) -> Result<u32, ContractError> {
    let total_supply = TOTAL_SUPPLY.load(storage)?;
    let first_token_id = total_supply + 1;
    for token_id in first_token_id..=total_supply + quantity {
        TOKEN_OWNERS.save(storage, token_id, recipient)?;
    }
    TOTAL_SUPPLY.save(storage, &(total_supply + quantity))?;
    Ok(first_token_id)
}

/// Book the freshly issued ids against the minter's cumulative quota. The
/// quota is shared across the whitelist, allowlist and public paths.
fn record_user_mints(
    storage: &mut dyn Storage,
    minter: &Addr,
    user_details: &mut UserDetails,
    first_token_id: u32,
    quantity: u32,
) -> Result<(), ContractError> {
    for offset in 0..quantity {
        user_details.minted_tokens.push(first_token_id + offset);
    }
    user_details.total_minted_count += quantity;
    MINTED_TOKENS.save(storage, minter.clone(), user_details)?;
    Ok(())
}

fn execute_set_root(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    item: &Item<HexBinary>,
    list: &str,
    root: HexBinary,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    if root.len() != merkle_proofs::HASH_SIZE {
        return Err(ContractError::InvalidMerkleRoot {});
    }
    item.save(deps.storage, &root)?;

    let res = Response::new()
        .add_attribute("action", format!("set_{}_root", list))
        .add_attribute("root", root.to_hex());
    Ok(res)
}

pub fn execute_set_allowlist_price(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    let mut prices = PRICES.load(deps.storage)?;
    prices.allowlist_price = price;
    PRICES.save(deps.storage, &prices)?;

    let res = Response::new()
        .add_attribute("action", "set_allowlist_price")
        .add_attribute("price", price.to_string());
    Ok(res)
}

pub fn execute_set_public_price(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    let mut prices = PRICES.load(deps.storage)?;
    prices.public_price = price;
    PRICES.save(deps.storage, &prices)?;

    let res = Response::new()
        .add_attribute("action", "set_public_price")
        .add_attribute("price", price.to_string());
    Ok(res)
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    let mut collection = COLLECTION.load(deps.storage)?;
    collection.base_uri = base_uri.clone();
    COLLECTION.save(deps.storage, &collection)?;

    let res = Response::new()
        .add_attribute("action", "set_base_uri")
        .add_attribute("base_uri", base_uri);
    Ok(res)
}

pub fn execute_open_whitelist_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    // One-way toggle; opening an open phase is a no-op success
    let mut phases = PHASES.load(deps.storage)?;
    phases.whitelist_open = true;
    PHASES.save(deps.storage, &phases)?;

    Ok(Response::new().add_attribute("action", "open_whitelist_mint"))
}

pub fn execute_open_allowlist_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    let mut phases = PHASES.load(deps.storage)?;
    phases.allowlist_open = true;
    PHASES.save(deps.storage, &phases)?;

    Ok(Response::new().add_attribute("action", "open_allowlist_mint"))
}

pub fn execute_open_public_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    let mut phases = PHASES.load(deps.storage)?;
    phases.public_open = true;
    PHASES.save(deps.storage, &phases)?;

    Ok(Response::new().add_attribute("action", "open_public_mint"))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }

    // The treasury is the contract's own balance in the mint denom
    let balance = deps
        .querier
        .query_balance(env.contract.address, config.mint_denom)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NothingToWithdraw {});
    }

    let bank_msg = BankMsg::Send {
        to_address: config.admin.to_string(),
        amount: vec![balance.clone()],
    };

    let res = Response::new()
        .add_message(bank_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("amount", balance.amount.to_string());

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Collection {} => to_json_binary(&query_collection(deps)?),
        QueryMsg::Phases {} => to_json_binary(&query_phases(deps)?),
        QueryMsg::Prices {} => to_json_binary(&query_prices(deps)?),
        QueryMsg::MerkleRoots {} => to_json_binary(&query_merkle_roots(deps)?),
        QueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps)?),
        QueryMsg::WhitelistMinted {} => to_json_binary(&query_whitelist_minted(deps)?),
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::MintedTokens { address } => {
            to_json_binary(&query_minted_tokens(deps, address)?)
        }
    }
}

fn query_config(deps: Deps) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_collection(deps: Deps) -> Result<CollectionDetails, ContractError> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(collection)
}

fn query_phases(deps: Deps) -> Result<PhaseFlags, ContractError> {
    let phases = PHASES.load(deps.storage)?;
    Ok(phases)
}

fn query_prices(deps: Deps) -> Result<MintPrices, ContractError> {
    let prices = PRICES.load(deps.storage)?;
    Ok(prices)
}

fn query_merkle_roots(deps: Deps) -> Result<MerkleRootsResponse, ContractError> {
    Ok(MerkleRootsResponse {
        whitelist_root: WHITELIST_ROOT.may_load(deps.storage)?,
        allowlist_root: ALLOWLIST_ROOT.may_load(deps.storage)?,
    })
}

fn query_total_supply(deps: Deps) -> Result<u32, ContractError> {
    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    Ok(total_supply)
}

fn query_whitelist_minted(deps: Deps) -> Result<u32, ContractError> {
    let whitelist_minted = WHITELIST_MINTED.load(deps.storage)?;
    Ok(whitelist_minted)
}

fn query_owner_of(deps: Deps, token_id: u32) -> Result<Addr, ContractError> {
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("token {}", token_id)))?;
    Ok(owner)
}

fn query_token_uri(deps: Deps, token_id: u32) -> Result<String, ContractError> {
    if !TOKEN_OWNERS.has(deps.storage, token_id) {
        return Err(StdError::not_found(format!("token {}", token_id)).into());
    }
    let collection = COLLECTION.load(deps.storage)?;
    Ok(format!("{}{}", collection.base_uri, token_id))
}

fn query_minted_tokens(deps: Deps, address: String) -> Result<UserDetails, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let user_details = MINTED_TOKENS
        .may_load(deps.storage, address)?
        .unwrap_or_default();
    Ok(user_details)
}
