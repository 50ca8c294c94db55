#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, Response};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use crate::contract::{CONTRACT_NAME, CONTRACT_VERSION};
use crate::error::ContractError;
use crate::msg::MigrateMsg;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigrationContract {
            actual: stored.contract,
        });
    }

    let stored_version: Version =
        stored
            .version
            .parse()
            .map_err(|_| ContractError::InvalidMigrationVersion {
                stored: stored.version.clone(),
                requested: CONTRACT_VERSION.to_string(),
            })?;
    let new_version: Version =
        CONTRACT_VERSION
            .parse()
            .map_err(|_| ContractError::InvalidMigrationVersion {
                stored: stored.version.clone(),
                requested: CONTRACT_VERSION.to_string(),
            })?;
    // Downgrades are refused; the state layout is otherwise unchanged
    if stored_version > new_version {
        return Err(ContractError::InvalidMigrationVersion {
            stored: stored.version,
            requested: CONTRACT_VERSION.to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let res = Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION);

    Ok(res)
}
