use cosmwasm_schema::write_api;

use drop_minter::msg::{ExecuteMsg, InstantiateMsg};

use drop_types::QueryMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
    }
}
