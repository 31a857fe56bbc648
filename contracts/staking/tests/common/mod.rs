#![allow(dead_code)]

use mbn_staking::{packages::DAY, standard_packages, StakingContract, StakingContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};

pub const SILVER: &str = "Silver Package";
pub const GOLD: &str = "Gold Package";
pub const PLATINUM: &str = "Platinum Package";

pub struct TestContext {
    pub env: Env,
    pub client: StakingContractClient<'static>,
    pub owner: Address,
    pub token: Address,
}

/// Creates a mocked Soroban environment with a token, deploys the contract
/// and initializes it with the standard packages.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &token, &standard_packages(&env));

    TestContext {
        env,
        client,
        owner,
        token,
    }
}

pub fn package(ctx: &TestContext, name: &str) -> String {
    String::from_str(&ctx.env, name)
}

/// Mints `amount` to `holder` and lets the contract pull the holder's whole
/// balance.
pub fn fund(ctx: &TestContext, holder: &Address, amount: i128) {
    StellarAssetClient::new(&ctx.env, &ctx.token).mint(holder, &amount);
    approve_all(ctx, holder);
}

/// Sets the contract's allowance over `holder` to the holder's balance.
pub fn approve_all(ctx: &TestContext, holder: &Address) {
    let balance = token_balance(ctx, holder);
    TokenClient::new(&ctx.env, &ctx.token).approve(
        holder,
        &ctx.client.address,
        &balance,
        &(ctx.env.ledger().sequence() + 1_000),
    );
}

/// Generates an account holding `amount` approved tokens.
pub fn funded_account(ctx: &TestContext, amount: i128) -> Address {
    let account = Address::generate(&ctx.env);
    fund(ctx, &account, amount);
    account
}

/// Puts `amount` into the reward pool from a fresh sponsor account.
pub fn fund_pool(ctx: &TestContext, amount: i128) {
    let sponsor = funded_account(ctx, amount);
    ctx.client.add_to_reward_pool(&sponsor, &amount);
}

pub fn advance_days(ctx: &TestContext, days: u64) {
    let now = ctx.env.ledger().timestamp();
    ctx.env.ledger().set_timestamp(now + days * DAY);
}

pub fn token_balance(ctx: &TestContext, account: &Address) -> i128 {
    TokenClient::new(&ctx.env, &ctx.token).balance(account)
}

/// Contract holdings must equal active principal plus the reward pool.
pub fn is_solvent(ctx: &TestContext) -> bool {
    token_balance(ctx, &ctx.client.address)
        == ctx.client.total_staked() + ctx.client.reward_pool_balance()
}
