use anchor_lang::prelude::*;

use crate::{
    constants::{COORDINATOR_SEED, ENTRANTS_SEED, RAFFLE_SEED, RANDOM_WORD_LEN, VAULT_SEED},
    error::RaffleError,
    payout::VaultPayout,
    state::{Coordinator, EntrantSlots, Entrants, Raffle, Vault},
};

/// Event emitted when a round is settled
#[event]
pub struct WinnerPicked {
    /// The winner's address
    pub winner: Pubkey,
    /// Request that produced the winning word
    pub request_id: u64,
    /// Round that was settled
    pub round: u64,
    /// Lamports paid to the winner
    pub prize: u64,
}

/// Oracle callback delivering the random words for the pending request.
///
/// The first word picks the winner as `word mod players`, the whole pool is
/// paid to that player and the raffle reopens. Nothing is written when the
/// id does not match the pending request or the payout fails; in the latter
/// case the raffle stays Calculating until the same answer is delivered to a
/// winner account that can receive it. A failed delivery leaves no trace, so
/// the coordinator authority is trusted to answer each request id with one
/// value.
///
/// # Account Validations
/// * Coordinator - Its authority must sign
/// * Vault - Must be the raffle's vault PDA, pays the prize
/// * Entrants - The raffle's entrant list, the winner is read from its slot
/// * Winner - Must be the player the draw selects
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; RANDOM_WORD_LEN]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let vault_info = ctx.accounts.vault.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(vault_info.data_len());

    let entrants_info = ctx.accounts.entrants.to_account_info();
    let entrants_data = entrants_info.try_borrow_data()?;
    let slots = EntrantSlots::new(&**entrants_data);

    let mut payout = VaultPayout::new(&vault_info, &winner_info, rent_floor);
    let settlement = ctx
        .accounts
        .raffle
        .settle(request_id, &random_words, &slots, &mut payout, now)?;

    msg!(
        "Round {} won by player {} of request {}",
        settlement.round,
        settlement.winner_index,
        settlement.request_id
    );

    emit!(WinnerPicked {
        winner: settlement.winner,
        request_id: settlement.request_id,
        round: settlement.round,
        prize: settlement.prize,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [
            ENTRANTS_SEED,
            raffle.key().as_ref(),
        ],
        bump = raffle.entrants_bump,
    )]
    pub entrants: Account<'info, Entrants>,

    #[account(
        seeds = [COORDINATOR_SEED],
        bump = coordinator.bump,
        has_one = authority @ RaffleError::NotCoordinatorAuthority,
    )]
    pub coordinator: Account<'info, Coordinator>,

    pub authority: Signer<'info>,

    /// The drawn player, receives the prize
    /// CHECK: matched against the selected player before any lamports move
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
