use anchor_lang::prelude::*;

// 8 discriminator + 32 raffle + 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Holds the pooled entrance fees above its own rent-exempt minimum.
#[account]
pub struct Vault {
    pub raffle: Pubkey,
    pub bump: u8,
}
