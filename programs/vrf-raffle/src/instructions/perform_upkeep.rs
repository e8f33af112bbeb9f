use anchor_lang::prelude::*;

use crate::{
    constants::{COORDINATOR_SEED, RAFFLE_SEED},
    state::{Coordinator, Raffle},
};

/// Event emitted when a round is closed and randomness is requested.
/// The oracle service listens for this event and answers with
/// `fulfill_random_words`.
#[event]
pub struct RandomnessRequested {
    /// Id the fulfillment must carry
    pub request_id: u64,
    /// Round being closed
    pub round: u64,
    /// Oracle key hash selecting the gas lane
    pub gas_lane: [u8; 32],
    /// Oracle subscription funding the request
    pub subscription_id: u64,
    /// Confirmations to wait for before answering
    pub request_confirmations: u16,
    /// Compute budget reserved for the fulfillment
    pub callback_gas_limit: u32,
    /// Random words requested
    pub num_words: u32,
}

/// Instruction to close entry and request randomness for the current round
///
/// Permissionless: anyone may call it, it only succeeds when the upkeep
/// condition holds.
///
/// # Errors
/// - `UpkeepNotNeeded` if the raffle is not Open, the interval has not
///   elapsed, or the round has no players or funds
/// - `Overflow` if the coordinator has run out of request ids
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let raffle = &mut ctx.accounts.raffle;
    let request_id = raffle.close_round(&mut *ctx.accounts.coordinator, now)?;
    let request = raffle.randomness_request();

    emit!(RandomnessRequested {
        request_id,
        round: raffle.round(),
        gas_lane: request.gas_lane,
        subscription_id: request.subscription_id,
        request_confirmations: request.request_confirmations,
        callback_gas_limit: request.callback_gas_limit,
        num_words: request.num_words,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [COORDINATOR_SEED],
        bump = coordinator.bump,
    )]
    pub coordinator: Account<'info, Coordinator>,
}
