use anchor_lang::prelude::*;

use crate::{
    constants::{COORDINATOR_SEED, ENTRANTS_SEED, RAFFLE_SEED, VAULT_SEED},
    state::{
        Coordinator, Entrants, Raffle, RaffleBumps, RaffleParams, Vault,
        COORDINATOR_ACCOUNT_SIZE, FIRST_REQUEST_ID, RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE,
    },
};

/// Event emitted once the raffle has been set up
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Entrance fee in lamports
    pub entrance_fee: u64,
    /// Seconds between a reset and the next close
    pub interval: i64,
    /// Key allowed to deliver randomness
    pub oracle_authority: Pubkey,
    /// Start of the first round
    pub start_time: i64,
}

/// Instruction to create the raffle, its vault, its entrant list and the randomness coordinator
/// This should be called once during program deployment
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Entrance fee, interval and randomness request settings
///
/// # Security Considerations
/// - The raffle and coordinator are singleton PDAs, so a second call fails at account creation
/// - Entrance fee and interval are validated here and never written again
/// - The oracle authority becomes the only key able to fulfill randomness requests
///
/// # Account Validations
/// * Raffle - New PDA with seed "raffle", fixed size
/// * Vault - New PDA with seeds ["vault", raffle_key]
/// * Entrants - New PDA with seeds ["entrants", raffle_key], header only until the first entry
/// * Coordinator - New PDA with seed "coordinator"
/// * Admin - Pays for all four accounts
pub fn initialize(ctx: Context<Initialize>, params: RaffleParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let bumps = RaffleBumps {
        raffle: ctx.bumps.raffle,
        vault: ctx.bumps.vault,
        entrants: ctx.bumps.entrants,
    };
    let raffle = Raffle::new(&params, now, bumps)?;
    ctx.accounts.raffle.set_inner(raffle);

    ctx.accounts.vault.raffle = ctx.accounts.raffle.key();
    ctx.accounts.vault.bump = ctx.bumps.vault;

    ctx.accounts.entrants.set_inner(Entrants {
        raffle: ctx.accounts.raffle.key(),
        bump: ctx.bumps.entrants,
    });

    ctx.accounts.coordinator.set_inner(Coordinator {
        authority: ctx.accounts.oracle_authority.key(),
        next_request_id: FIRST_REQUEST_ID,
        bump: ctx.bumps.coordinator,
    });

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        oracle_authority: ctx.accounts.oracle_authority.key(),
        start_time: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = admin,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init,
        payer = admin,
        space = Entrants::space(0),
        seeds = [
            ENTRANTS_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub entrants: Account<'info, Entrants>,

    #[account(
        init,
        payer = admin,
        space = COORDINATOR_ACCOUNT_SIZE,
        seeds = [COORDINATOR_SEED],
        bump
    )]
    pub coordinator: Account<'info, Coordinator>,

    #[account(mut)]
    pub admin: Signer<'info>,
    pub oracle_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
