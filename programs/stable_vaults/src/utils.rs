use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::states::SavingsVault;

// Asserts the savings vault is still accepting deposits
pub fn unrestricted_deposit_phase(savings_vault: &SavingsVault) -> Result<()> {
    if savings_vault.paused {
        return err!(ErrorCode::DepositsPaused);
    }
    Ok(())
}

pub fn now() -> Result<i64> {
    Ok(Clock::get()?.unix_timestamp)
}

/// True once `info` holds an account created by this program.
pub fn is_initialized(info: &AccountInfo) -> bool {
    info.owner == &crate::ID && !info.data_is_empty()
}

/// Deserializes a program account, failing if it is missing or of another type.
pub fn load_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<T> {
    require_keys_eq!(*info.owner, crate::ID, ErrorCode::InvalidArgument);
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Like `load_account`, but a ledger slot that was never created reads as empty.
pub fn load_or_default<T: AccountDeserialize + Default>(info: &AccountInfo) -> Result<T> {
    if !is_initialized(info) {
        return Ok(T::default());
    }
    load_account(info)
}
