use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You are not authorized to perform this action.")]
    Unauthorized,
    #[msg("Argument is invalid.")]
    InvalidArgument,
    #[msg("An overflow occurs.")]
    Overflow,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Token account does not match the expected mint.")]
    TokenMismatch,

    // lending
    #[msg("Withdrawal exceeds deposited collateral.")]
    InsufficientCollateral,
    #[msg("Borrow exceeds the maximum loan-to-value.")]
    ExceedsBorrowLimit,
    #[msg("Action leaves the position below the liquidation threshold.")]
    HealthFactorTooLow,
    #[msg("There is no outstanding debt to repay.")]
    NoDebtToRepay,
    #[msg("Not enough liquidity in the vault for this borrow.")]
    InsufficientLiquidity,
    #[msg("Collateral already backs debt in another borrow token.")]
    BorrowPairMismatch,

    // oracle
    #[msg("No price source yields a usable price.")]
    PriceUnavailable,
    #[msg("Pyth has an internal error.")]
    PythError,
    #[msg("Switchboard feed could not be read.")]
    SwitchboardError,
    #[msg("Price feed account does not match the configured route.")]
    PriceFeedMismatch,

    // savings
    #[msg("Stablecoin is not supported by the savings vault.")]
    UnsupportedStablecoin,
    #[msg("Deposit is below the minimum amount.")]
    BelowMinimumDeposit,
    #[msg("Savings deposits are paused.")]
    DepositsPaused,
    #[msg("Position has already been withdrawn.")]
    PositionAlreadyWithdrawn,
    #[msg("Position index is out of range.")]
    InvalidPositionIndex,
}
