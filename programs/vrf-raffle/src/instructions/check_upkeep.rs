use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::{Raffle, UpkeepCheck},
};

/// Read-only condition check polled by the automation service.
///
/// Returns `upkeep_needed = true` only while the raffle is Open, the interval
/// has elapsed since the last reset, and the round has players and funds.
/// Safe to simulate at any time, nothing is written.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepCheck> {
    let now = Clock::get()?.unix_timestamp;
    let check = ctx.accounts.raffle.check_upkeep(now);

    msg!("Upkeep needed: {}", check.upkeep_needed);
    Ok(check)
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
