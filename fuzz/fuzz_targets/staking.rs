#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mbn_staking::{standard_packages, StakingContract, StakingContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};

const NAMES: [&str; 4] = [
    "Silver Package",
    "Gold Package",
    "Platinum Package",
    "Bronze Package",
];
const DAY: u64 = 86_400;
const FUNDING: i128 = 1_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { user: u8, amount: i64, package: u8 },
    Unstake { user: u8, index: u8 },
    ForceUnstake { user: u8, index: u8 },
    Contribute { amount: i64 },
    Remove { amount: i64 },
    Pause,
    Unpause,
    AdvanceTime { days: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &token, &standard_packages(&env));

    let minter = StellarAssetClient::new(&env, &token);
    let tokens = TokenClient::new(&env, &token);

    // Four stakers plus a sponsor, each able to move everything they hold.
    let mut users = Vec::new();
    for _ in 0..5 {
        let user = Address::generate(&env);
        minter.mint(&user, &FUNDING);
        tokens.approve(&user, &contract_id, &FUNDING, &(env.ledger().sequence() + 10_000));
        users.push(user);
    }
    let sponsor = users[4].clone();

    for action in actions.into_iter().take(64) {
        match action {
            FuzzAction::Stake {
                user,
                amount,
                package,
            } => {
                let name = String::from_str(&env, NAMES[package as usize % NAMES.len()]);
                let _ = client.try_stake_tokens(&users[user as usize % 4], &(amount as i128), &name);
            }
            FuzzAction::Unstake { user, index } => {
                let _ = client.try_unstake(&users[user as usize % 4], &(index as u32 % 8));
            }
            FuzzAction::ForceUnstake { user, index } => {
                let _ = client.try_force_unstake(&users[user as usize % 4], &(index as u32 % 8));
            }
            FuzzAction::Contribute { amount } => {
                let _ = client.try_add_to_reward_pool(&sponsor, &(amount as i128));
            }
            FuzzAction::Remove { amount } => {
                let _ = client.try_remove_from_reward_pool(&owner, &(amount as i128));
            }
            FuzzAction::Pause => client.pause_staking(&owner),
            FuzzAction::Unpause => client.unpause_staking(&owner),
            FuzzAction::AdvanceTime { days } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + u64::from(days) * DAY);
            }
        }

        // Holdings always equal active principal plus the reward pool.
        let held = tokens.balance(&contract_id);
        assert_eq!(held, client.total_staked() + client.reward_pool_balance());
        assert!(client.reward_pool_balance() >= 0);
    }
});
