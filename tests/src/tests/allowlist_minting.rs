use cosmwasm_std::{coin, Addr, Uint128};
use cw_multi_test::Executor;

use drop_minter::error::ContractError;
use drop_minter::msg::ExecuteMsg;
use drop_types::QueryMsg;
use merkle_proofs::MerkleTree;

use crate::helpers::mock_messages::{return_minter_instantiate_msg, DENOM};
use crate::helpers::setup::setup;
use crate::helpers::utils::query_denom_balance;

#[test]
fn allowlist_minting_with_payment() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let stranger = res.test_accounts.stranger;
    let members = res.test_accounts.members;
    let mut app = res.app;

    let minter_addr = app
        .instantiate_contract(
            res.minter_code_id,
            admin.clone(),
            &return_minter_instantiate_msg(),
            &[],
            "drop-minter",
            None,
        )
        .unwrap();

    let tree = MerkleTree::new(members.iter().map(|member| member.as_str())).unwrap();
    let proof = tree.proof_of(members[0].as_bytes()).unwrap();

    // Closed until opened
    let error = app
        .execute_contract(
            members[0].clone(),
            minter_addr.clone(),
            &ExecuteMsg::MintAllowlist {
                quantity: 1,
                proof: proof.clone(),
            },
            &[coin(3000, DENOM)],
        )
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::AllowlistMintClosed {});

    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::SetAllowlistRoot { root: tree.root() },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::SetAllowlistPrice {
            price: Uint128::from(3000u128),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::OpenAllowlistMint {},
        &[],
    )
    .unwrap();

    // Not part of the committed set
    let error = app
        .execute_contract(
            stranger.clone(),
            minter_addr.clone(),
            &ExecuteMsg::MintAllowlist {
                quantity: 1,
                proof: proof.clone(),
            },
            &[coin(3000, DENOM)],
        )
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::AddressNotAllowlisted {});

    // Underpaying is rejected and nothing is charged
    let balance_before = query_denom_balance(&app, &members[0], DENOM);
    let error = app
        .execute_contract(
            members[0].clone(),
            minter_addr.clone(),
            &ExecuteMsg::MintAllowlist {
                quantity: 1,
                proof: proof.clone(),
            },
            &[coin(2000, DENOM)],
        )
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::InsufficientPayment {
            expected: Uint128::from(3000u128),
            sent: Uint128::from(2000u128)
        }
    );
    assert_eq!(query_denom_balance(&app, &members[0], DENOM), balance_before);

    let total_supply: u32 = app
        .wrap()
        .query_wasm_smart(minter_addr.clone(), &QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, 0);

    // Exact payment succeeds
    app.execute_contract(
        members[0].clone(),
        minter_addr.clone(),
        &ExecuteMsg::MintAllowlist {
            quantity: 1,
            proof: proof.clone(),
        },
        &[coin(3000, DENOM)],
    )
    .unwrap();
    let owner: Addr = app
        .wrap()
        .query_wasm_smart(minter_addr.clone(), &QueryMsg::OwnerOf { token_id: 1 })
        .unwrap();
    assert_eq!(owner, members[0]);
    assert_eq!(query_denom_balance(&app, &minter_addr, DENOM), 3000);

    // Overpayment is accepted and kept by the treasury
    app.execute_contract(
        members[0].clone(),
        minter_addr.clone(),
        &ExecuteMsg::MintAllowlist {
            quantity: 1,
            proof: proof.clone(),
        },
        &[coin(5000, DENOM)],
    )
    .unwrap();
    assert_eq!(query_denom_balance(&app, &minter_addr, DENOM), 8000);

    // Over the per wallet limit
    let error = app
        .execute_contract(
            members[0].clone(),
            minter_addr,
            &ExecuteMsg::MintAllowlist {
                quantity: 199,
                proof,
            },
            &[coin(597_000, DENOM)],
        )
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::AddressReachedMintLimit {});
}

#[test]
fn quota_is_shared_across_phases() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let members = res.test_accounts.members;
    let mut app = res.app;

    let minter_addr = app
        .instantiate_contract(
            res.minter_code_id,
            admin.clone(),
            &return_minter_instantiate_msg(),
            &[],
            "drop-minter",
            None,
        )
        .unwrap();

    let tree = MerkleTree::new(members.iter().map(|member| member.as_str())).unwrap();
    let proof = tree.proof_of(members[0].as_bytes()).unwrap();

    // Prices stay at zero so payment never interferes with the quota
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::SetAllowlistRoot { root: tree.root() },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::SetWhitelistRoot { root: tree.root() },
        &[],
    )
    .unwrap();
    for msg in [
        ExecuteMsg::OpenWhitelistMint {},
        ExecuteMsg::OpenAllowlistMint {},
        ExecuteMsg::OpenPublicMint {},
    ] {
        app.execute_contract(admin.clone(), minter_addr.clone(), &msg, &[])
            .unwrap();
    }

    app.execute_contract(
        members[0].clone(),
        minter_addr.clone(),
        &ExecuteMsg::MintAllowlist {
            quantity: 150,
            proof: proof.clone(),
        },
        &[],
    )
    .unwrap();

    // 150 + 51 would cross the shared limit of 200
    let error = app
        .execute_contract(
            members[0].clone(),
            minter_addr.clone(),
            &ExecuteMsg::MintPublic { quantity: 51 },
            &[],
        )
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::AddressReachedMintLimit {});

    app.execute_contract(
        members[0].clone(),
        minter_addr.clone(),
        &ExecuteMsg::MintPublic { quantity: 50 },
        &[],
    )
    .unwrap();

    // The wallet is exhausted for every consumer path
    let error = app
        .execute_contract(
            members[0].clone(),
            minter_addr.clone(),
            &ExecuteMsg::MintWhitelist { quantity: 1, proof },
            &[],
        )
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::AddressReachedMintLimit {});

    let total_supply: u32 = app
        .wrap()
        .query_wasm_smart(minter_addr, &QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, 200);
}

#[test]
fn withdraw_collects_treasury() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let stranger = res.test_accounts.stranger;
    let members = res.test_accounts.members;
    let mut app = res.app;

    let minter_addr = app
        .instantiate_contract(
            res.minter_code_id,
            admin.clone(),
            &return_minter_instantiate_msg(),
            &[],
            "drop-minter",
            None,
        )
        .unwrap();

    let tree = MerkleTree::new(members.iter().map(|member| member.as_str())).unwrap();
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::SetAllowlistRoot { root: tree.root() },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::SetAllowlistPrice {
            price: Uint128::from(3000u128),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::OpenAllowlistMint {},
        &[],
    )
    .unwrap();

    let proof = tree.proof_of(members[0].as_bytes()).unwrap();
    app.execute_contract(
        members[0].clone(),
        minter_addr.clone(),
        &ExecuteMsg::MintAllowlist { quantity: 1, proof },
        &[coin(3000, DENOM)],
    )
    .unwrap();

    // Only the admin may withdraw
    let error = app
        .execute_contract(
            stranger,
            minter_addr.clone(),
            &ExecuteMsg::Withdraw {},
            &[],
        )
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Unauthorized {});

    let admin_balance_before = query_denom_balance(&app, &admin, DENOM);
    app.execute_contract(
        admin.clone(),
        minter_addr.clone(),
        &ExecuteMsg::Withdraw {},
        &[],
    )
    .unwrap();
    assert_eq!(
        query_denom_balance(&app, &admin, DENOM),
        admin_balance_before + 3000
    );
    assert_eq!(query_denom_balance(&app, &minter_addr, DENOM), 0);

    // Treasury is empty after a full withdrawal
    let error = app
        .execute_contract(admin, minter_addr, &ExecuteMsg::Withdraw {}, &[])
        .unwrap_err();
    let error = error.source().unwrap().downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::NothingToWithdraw {});
}
