use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{ENTRANTS_SEED, RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    state::{EntrantSlots, Entrants, Raffle, Vault},
};

/// Event emitted when a player enters the raffle
#[event]
pub struct EnteredRaffle {
    /// The entrant's address
    pub player: Pubkey,
    /// Lamports deposited into the pool
    pub amount: u64,
    /// Position of the entry in the current round
    pub player_index: u64,
}

/// Instruction to enter the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to deposit, at least the entrance fee
///
/// # Security Considerations
/// 1. Entry is only accepted while the raffle is Open
/// 2. The deposit must cover the entrance fee; any surplus joins the pool
/// 3. The vault balance is checked after the transfer
///
/// # Account Validations
/// * Raffle - Singleton PDA
/// * Entrants - The raffle's entrant list, grown by one slot when full (paid by the player)
/// * Vault - Must be the raffle's vault PDA
/// * Player - Signs and funds the deposit
///
/// # Implementation Notes
/// - Updates state before performing the transfer
/// - The player is written straight into its slot; the entrant list is never deserialized
/// - The entrants account never shrinks, slots freed by a reset are reused
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    let player_index = {
        let entrants_info = ctx.accounts.entrants.to_account_info();
        let mut entrants_data = entrants_info.try_borrow_mut_data()?;
        let mut slots = EntrantSlots::new(&mut **entrants_data);
        ctx.accounts.raffle.enter(&mut slots, player, amount)?
    };

    let pre_transfer_balance = ctx.accounts.vault.to_account_info().lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let post_transfer_balance = ctx.accounts.vault.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(EnteredRaffle {
        player,
        amount,
        player_index,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            ENTRANTS_SEED,
            raffle.key().as_ref(),
        ],
        bump = raffle.entrants_bump,
        realloc = Entrants::space(raffle.player_count + 1).max(entrants.to_account_info().data_len()),
        realloc::payer = player,
        realloc::zero = false,
    )]
    pub entrants: Account<'info, Entrants>,

    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
