use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::math::apply_bps;
use crate::types::LockPeriod;

/// GFT paid at maturity per deposit, by lock period. Amounts in reward-mint base units.
#[derive(Default, AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct RewardTable {
    pub quarterly: u64,
    pub semi_annual: u64,
    pub annual: u64,
}

impl RewardTable {
    pub fn reward_for(&self, period: LockPeriod) -> u64 {
        match period {
            LockPeriod::Quarterly => self.quarterly,
            LockPeriod::SemiAnnual => self.semi_annual,
            LockPeriod::Annual => self.annual,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProtocolStats {
    pub total_users: u64,
    pub total_positions: u64,
}

#[account]
#[derive(Default)]
pub struct SavingsVault {
    pub bump: u8,
    pub authority: Pubkey,
    /// Owner of the token accounts that fund interest and receive penalties
    pub treasury: Pubkey,
    pub gft_mint: Pubkey,
    pub paused: bool,
    pub rewards: RewardTable,

    pub total_users: u64,
    pub total_positions: u64,

    pub reserved: [u64; 8],
}

#[account]
#[derive(Default)]
pub struct StablecoinConfig {
    pub bump: u8,
    pub custody_bump: u8,
    pub mint: Pubkey,
    pub decimals: u8,
    pub supported: bool,
    pub custody: Pubkey,
    /// Principal of positions not yet withdrawn
    pub total_value_locked: u64,
}

#[account]
#[derive(Default)]
pub struct SavingsUser {
    pub bump: u8,
    pub owner: Pubkey,
    /// Number of positions ever opened; also the next position index
    pub position_count: u64,
    pub active_positions: u64,
}

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct SavingsPosition {
    pub bump: u8,
    /// Protocol-wide id, assigned in creation order
    pub position_id: u64,
    /// Index within the owner's positions
    pub index: u64,
    pub owner: Pubkey,
    pub stablecoin: Pubkey,
    pub principal: u64,
    pub deposit_time: i64,
    pub lock_end_time: i64,
    pub lock_period: LockPeriod,
    pub withdrawn: bool,
    pub stablecoin_interest: u64,
    pub gft_reward: u64,
}

/// Transfers owed to the owner when a position is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Payout {
    pub matured: bool,
    pub principal: u64,
    pub interest: u64,
    pub reward: u64,
    pub penalty: u64,
}

/// One token movement of a payout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayoutLeg {
    /// custody -> owner
    Principal(u64),
    /// custody -> treasury
    Penalty(u64),
    /// treasury -> owner
    Interest(u64),
    /// minted to owner
    Reward(u64),
}

impl Payout {
    /// Movements in the order they are carried out. Custody is drained before
    /// the treasury pays interest; empty legs are left out.
    pub fn legs(&self) -> Vec<PayoutLeg> {
        [
            PayoutLeg::Principal(self.principal),
            PayoutLeg::Penalty(self.penalty),
            PayoutLeg::Interest(self.interest),
            PayoutLeg::Reward(self.reward),
        ]
        .into_iter()
        .filter(|leg| leg.amount() > 0)
        .collect()
    }

    pub fn stablecoin_total(&self) -> Result<u64> {
        Ok(self
            .principal
            .checked_add(self.interest)
            .ok_or(ErrorCode::Overflow)?)
    }
}

impl PayoutLeg {
    pub fn amount(&self) -> u64 {
        match *self {
            PayoutLeg::Principal(amount)
            | PayoutLeg::Penalty(amount)
            | PayoutLeg::Interest(amount)
            | PayoutLeg::Reward(amount) => amount,
        }
    }
}

impl SavingsVault {
    pub fn stats(&self) -> ProtocolStats {
        ProtocolStats {
            total_users: self.total_users,
            total_positions: self.total_positions,
        }
    }

    /// Validates a deposit and builds the position with the current reward snapshot.
    /// Counters on the vault, user and stablecoin are updated together.
    pub fn open_position(
        &mut self,
        user: &mut SavingsUser,
        stablecoin: &mut StablecoinConfig,
        amount: u64,
        lock_period: LockPeriod,
        now: i64,
    ) -> Result<SavingsPosition> {
        require!(!self.paused, ErrorCode::DepositsPaused);
        require!(stablecoin.supported, ErrorCode::UnsupportedStablecoin);
        require!(
            amount >= stablecoin.min_deposit()?,
            ErrorCode::BelowMinimumDeposit
        );

        let terms = lock_period.terms();
        let lock_end_time = now
            .checked_add(terms.duration_secs)
            .ok_or(ErrorCode::Overflow)?;
        let position = SavingsPosition {
            bump: 0,
            position_id: self.total_positions,
            index: user.position_count,
            owner: user.owner,
            stablecoin: stablecoin.mint,
            principal: amount,
            deposit_time: now,
            lock_end_time,
            lock_period,
            withdrawn: false,
            stablecoin_interest: apply_bps(amount, terms.interest_bps)?,
            gft_reward: self.rewards.reward_for(lock_period),
        };

        let total_value_locked = stablecoin
            .total_value_locked
            .checked_add(amount)
            .ok_or(ErrorCode::Overflow)?;
        if user.position_count == 0 {
            self.total_users = self.total_users.checked_add(1).ok_or(ErrorCode::Overflow)?;
        }
        self.total_positions = self.total_positions.checked_add(1).ok_or(ErrorCode::Overflow)?;
        user.position_count += 1;
        user.active_positions += 1;
        stablecoin.total_value_locked = total_value_locked;

        Ok(position)
    }

    /// Settles a position and releases its principal from the stablecoin's TVL.
    pub fn close_position(
        &self,
        user: &mut SavingsUser,
        stablecoin: &mut StablecoinConfig,
        position: &mut SavingsPosition,
        now: i64,
    ) -> Result<Payout> {
        require_keys_eq!(position.stablecoin, stablecoin.mint, ErrorCode::TokenMismatch);
        let payout = position.settle(now)?;
        stablecoin.total_value_locked = stablecoin
            .total_value_locked
            .checked_sub(position.principal)
            .ok_or(ErrorCode::Overflow)?;
        user.active_positions = user.active_positions.saturating_sub(1);
        Ok(payout)
    }
}

impl StablecoinConfig {
    pub fn min_deposit(&self) -> Result<u64> {
        10u64
            .checked_pow(self.decimals as u32)
            .and_then(|unit| unit.checked_mul(MIN_SAVINGS_DEPOSIT_UNITS))
            .ok_or_else(|| error!(ErrorCode::Overflow))
    }
}

impl SavingsPosition {
    pub fn is_unlocked(&self, now: i64) -> bool {
        now >= self.lock_end_time
    }

    pub fn time_remaining(&self, now: i64) -> i64 {
        (self.lock_end_time - now).max(0)
    }

    /// Marks the position withdrawn and computes what it pays.
    /// Early exits return 90% of principal and forfeit interest and reward.
    pub fn settle(&mut self, now: i64) -> Result<Payout> {
        require!(!self.withdrawn, ErrorCode::PositionAlreadyWithdrawn);

        let payout = if self.is_unlocked(now) {
            Payout {
                matured: true,
                principal: self.principal,
                interest: self.stablecoin_interest,
                reward: self.gft_reward,
                penalty: 0,
            }
        } else {
            let returned = apply_bps(self.principal, EARLY_WITHDRAWAL_PAYOUT_BPS)?;
            Payout {
                matured: false,
                principal: returned,
                interest: 0,
                reward: 0,
                penalty: self.principal - returned,
            }
        };
        self.withdrawn = true;
        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: u64 = 1_000_000;
    const GFT: u64 = 1_000_000_000;
    const T0: i64 = 1_700_000_000;
    const DAY: i64 = SECONDS_PER_DAY;

    fn vault() -> SavingsVault {
        SavingsVault {
            rewards: RewardTable {
                quarterly: 1_000 * GFT,
                semi_annual: 1_000 * GFT,
                annual: 1_000 * GFT,
            },
            ..Default::default()
        }
    }

    fn usdt() -> StablecoinConfig {
        StablecoinConfig {
            mint: Pubkey::new_unique(),
            decimals: 6,
            supported: true,
            ..Default::default()
        }
    }

    fn user() -> SavingsUser {
        SavingsUser {
            owner: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    #[test]
    fn quarterly_deposit_snapshots_reward_without_interest() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
            .unwrap();

        assert_eq!(position.principal, 1_000 * UNIT);
        assert_eq!(position.lock_end_time, T0 + 90 * DAY);
        assert_eq!(position.gft_reward, 1_000 * GFT);
        assert_eq!(position.stablecoin_interest, 0);
        assert_eq!(position.owner, user.owner);
        assert_eq!(position.index, 0);
        assert!(!position.withdrawn);
    }

    #[test]
    fn annual_deposit_earns_two_percent() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Annual, T0)
            .unwrap();
        assert_eq!(position.stablecoin_interest, 20 * UNIT);
        assert_eq!(position.lock_end_time, T0 + 365 * DAY);
    }

    #[test]
    fn reward_changes_do_not_touch_existing_positions() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let first = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
            .unwrap();

        vault.rewards = RewardTable {
            quarterly: 500 * GFT,
            semi_annual: 750 * GFT,
            annual: 1_500 * GFT,
        };
        let second = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
            .unwrap();

        assert_eq!(first.gft_reward, 1_000 * GFT);
        assert_eq!(second.gft_reward, 500 * GFT);
    }

    #[test]
    fn deposit_preconditions() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        assert_eq!(
            vault
                .open_position(&mut user, &mut coin, 50 * UNIT, LockPeriod::Quarterly, T0)
                .unwrap_err(),
            error!(ErrorCode::BelowMinimumDeposit)
        );

        vault.paused = true;
        assert_eq!(
            vault
                .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
                .unwrap_err(),
            error!(ErrorCode::DepositsPaused)
        );

        vault.paused = false;
        coin.supported = false;
        assert_eq!(
            vault
                .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
                .unwrap_err(),
            error!(ErrorCode::UnsupportedStablecoin)
        );

        // nothing was counted by the rejected calls
        assert_eq!(vault.total_positions, 0);
        assert_eq!(vault.total_users, 0);
        assert_eq!(user.position_count, 0);
        assert_eq!(coin.total_value_locked, 0);
    }

    #[test]
    fn stats_count_distinct_users_and_positions() {
        let (mut vault, mut coin) = (vault(), usdt());
        let (mut alice, mut bob) = (user(), user());

        vault
            .open_position(&mut alice, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
            .unwrap();
        vault
            .open_position(&mut alice, &mut coin, 500 * UNIT, LockPeriod::Annual, T0)
            .unwrap();
        let third = vault
            .open_position(&mut bob, &mut coin, 1_000 * UNIT, LockPeriod::Annual, T0)
            .unwrap();

        assert_eq!(
            vault.stats(),
            ProtocolStats {
                total_users: 2,
                total_positions: 3
            }
        );
        assert_eq!(third.position_id, 2);
        assert_eq!(third.index, 0);
        assert_eq!(alice.position_count, 2);
        assert_eq!(alice.active_positions, 2);
        assert_eq!(coin.total_value_locked, 2_500 * UNIT);
    }

    #[test]
    fn early_withdrawal_pays_ninety_percent_and_no_rewards() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let mut position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
            .unwrap();

        let payout = vault
            .close_position(&mut user, &mut coin, &mut position, T0 + DAY)
            .unwrap();
        assert_eq!(
            payout,
            Payout {
                matured: false,
                principal: 900 * UNIT,
                interest: 0,
                reward: 0,
                penalty: 100 * UNIT,
            }
        );
        assert!(position.withdrawn);
        assert_eq!(coin.total_value_locked, 0);
        assert_eq!(user.active_positions, 0);
        assert_eq!(user.position_count, 1);
    }

    #[test]
    fn early_withdrawal_of_annual_forfeits_interest() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let mut position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Annual, T0)
            .unwrap();
        let payout = position.settle(T0 + 364 * DAY).unwrap();
        assert_eq!(payout.stablecoin_total().unwrap(), 900 * UNIT);
        assert_eq!(payout.reward, 0);
    }

    #[test]
    fn matured_annual_pays_principal_interest_and_reward() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let mut position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Annual, T0)
            .unwrap();

        let payout = position.settle(T0 + 365 * DAY).unwrap();
        assert!(payout.matured);
        assert_eq!(payout.stablecoin_total().unwrap(), 1_020 * UNIT);
        assert_eq!(payout.reward, 1_000 * GFT);
        assert_eq!(payout.penalty, 0);
    }

    #[test]
    fn payout_legs_drain_custody_before_the_treasury_pays() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let mut annual = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Annual, T0)
            .unwrap();
        let mut early = annual.clone();

        assert_eq!(
            annual.settle(T0 + 365 * DAY).unwrap().legs(),
            vec![
                PayoutLeg::Principal(1_000 * UNIT),
                PayoutLeg::Interest(20 * UNIT),
                PayoutLeg::Reward(1_000 * GFT),
            ]
        );
        assert_eq!(
            early.settle(T0 + DAY).unwrap().legs(),
            vec![
                PayoutLeg::Principal(900 * UNIT),
                PayoutLeg::Penalty(100 * UNIT),
            ]
        );
    }

    #[test]
    fn matured_quarterly_without_reward_is_a_single_transfer() {
        let payout = Payout {
            matured: true,
            principal: 100 * UNIT,
            interest: 0,
            reward: 0,
            penalty: 0,
        };
        assert_eq!(payout.legs(), vec![PayoutLeg::Principal(100 * UNIT)]);
    }

    #[test]
    fn a_position_settles_only_once() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let mut position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::SemiAnnual, T0)
            .unwrap();
        vault
            .close_position(&mut user, &mut coin, &mut position, T0 + 180 * DAY)
            .unwrap();
        assert_eq!(
            vault
                .close_position(&mut user, &mut coin, &mut position, T0 + 181 * DAY)
                .unwrap_err(),
            error!(ErrorCode::PositionAlreadyWithdrawn)
        );
        assert_eq!(user.active_positions, 0);
    }

    #[test]
    fn withdrawals_stay_open_while_paused() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let mut position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
            .unwrap();
        vault.paused = true;
        let payout = vault
            .close_position(&mut user, &mut coin, &mut position, T0 + 90 * DAY)
            .unwrap();
        assert!(payout.matured);
    }

    #[test]
    fn lock_window_helpers() {
        let (mut vault, mut coin, mut user) = (vault(), usdt(), user());
        let position = vault
            .open_position(&mut user, &mut coin, 1_000 * UNIT, LockPeriod::Quarterly, T0)
            .unwrap();
        assert!(!position.is_unlocked(T0 + 90 * DAY - 1));
        assert!(position.is_unlocked(T0 + 90 * DAY));
        assert_eq!(position.time_remaining(T0), 90 * DAY);
        assert_eq!(position.time_remaining(T0 + 100 * DAY), 0);
    }
}
