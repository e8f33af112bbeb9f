use anchor_lang::prelude::*;

use crate::{
    constants::{ENTRANTS_SEED, RAFFLE_SEED},
    error::RaffleError,
    state::{EntrantSlots, Entrants, Raffle},
};

/// Returns the entrant at `index` in the current round.
pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
    let entrants_info = ctx.accounts.entrants.to_account_info();
    let entrants_data = entrants_info.try_borrow_data()?;
    let slots = EntrantSlots::new(&**entrants_data);

    usize::try_from(index)
        .ok()
        .and_then(|index| ctx.accounts.raffle.player(&slots, index))
        .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
}

#[derive(Accounts)]
pub struct GetPlayer<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [
            ENTRANTS_SEED,
            raffle.key().as_ref(),
        ],
        bump = raffle.entrants_bump,
    )]
    pub entrants: Account<'info, Entrants>,
}
