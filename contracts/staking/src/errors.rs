use soroban_sdk::contracttype;

/// Error categories for classifying failures.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid input parameters or registration data.
    Validation = 1,
    /// Caller lacks the owner capability.
    Authorization = 2,
    /// Package or stake lookups that miss.
    NotFound = 3,
    /// The request conflicts with the current ledger state; retrying later
    /// (after the lock elapses, after the pool is funded) may succeed.
    StateConflict = 4,
    /// Contract-level conditions: pausing, missing initialization, or
    /// accounting overflow.
    System = 5,
}

/// Every failure the ledger reports. Discriminants are part of the
/// persisted interface and must stay stable across upgrades.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    InvalidAmount = 4,
    UnknownPackage = 5,
    StakingPaused = 6,
    UndefinedStakeIndex = 7,
    AlreadyWithdrawn = 8,
    LockNotElapsed = 9,
    InsufficientRewardPool = 10,
    OutOfRange = 11,
    InvalidPackage = 12,
    DuplicatePackage = 13,
    ArithmeticOverflow = 14,
    NoPendingOwner = 15,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidAmount
            | ContractError::InvalidPackage
            | ContractError::DuplicatePackage => ErrorCategory::Validation,
            ContractError::NotOwner => ErrorCategory::Authorization,
            ContractError::UnknownPackage
            | ContractError::UndefinedStakeIndex
            | ContractError::OutOfRange
            | ContractError::NoPendingOwner => ErrorCategory::NotFound,
            ContractError::AlreadyWithdrawn
            | ContractError::LockNotElapsed
            | ContractError::InsufficientRewardPool => ErrorCategory::StateConflict,
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::StakingPaused
            | ContractError::ArithmeticOverflow => ErrorCategory::System,
        }
    }

    /// Returns `true` when the same call can succeed later without the
    /// caller changing its arguments.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            ContractError::StakingPaused
                | ContractError::LockNotElapsed
                | ContractError::InsufficientRewardPool
        )
    }

    /// Returns a human-readable reason for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::NotOwner => "Caller is not the owner",
            ContractError::InvalidAmount => "Amount must be greater than zero",
            ContractError::UnknownPackage => "There is no staking package with the given name",
            ContractError::StakingPaused => "Staking is paused",
            ContractError::UndefinedStakeIndex => "Stake index is not defined for this account",
            ContractError::AlreadyWithdrawn => "Stake has already been withdrawn",
            ContractError::LockNotElapsed => "Cannot unstake sooner than the blocked time",
            ContractError::InsufficientRewardPool => {
                "Token creators did not place enough liquidity in the contract for your reward to be paid"
            }
            ContractError::OutOfRange => "Package index is out of range",
            ContractError::InvalidPackage => "Package parameters are invalid",
            ContractError::DuplicatePackage => "A package with this name is already registered",
            ContractError::ArithmeticOverflow => "Arithmetic overflow in ledger accounting",
            ContractError::NoPendingOwner => "No ownership transfer is pending",
        }
    }
}
