use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Moves the prize pool to the winner of a round.
pub trait PayoutEngine {
    /// Transfers `amount` lamports to `winner`.
    ///
    /// A failed transfer must leave every balance untouched and surface as an
    /// error so the round stays in `Calculating`.
    fn payout(&mut self, winner: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays out of the program-owned vault PDA.
///
/// The winner account is supplied by the fulfilling transaction, so the
/// engine first checks it is the account the draw actually selected.
pub struct VaultPayout<'a, 'info> {
    vault: &'a AccountInfo<'info>,
    winner: &'a AccountInfo<'info>,
    rent_floor: u64,
}

impl<'a, 'info> VaultPayout<'a, 'info> {
    /// `rent_floor` is the vault's rent-exempt minimum, which is never paid out.
    pub fn new(vault: &'a AccountInfo<'info>, winner: &'a AccountInfo<'info>, rent_floor: u64) -> Self {
        Self {
            vault,
            winner,
            rent_floor,
        }
    }
}

impl PayoutEngine for VaultPayout<'_, '_> {
    fn payout(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*self.winner.key, *winner, RaffleError::WinnerAccountMismatch);

        let available = self
            .vault
            .lamports()
            .checked_sub(self.rent_floor)
            .ok_or(RaffleError::TransferFailed)?;
        require!(available >= amount, RaffleError::TransferFailed);

        let pre_transfer_balance = self.winner.lamports();

        // Direct debit only works because the vault is owned by this program.
        self.vault
            .sub_lamports(amount)
            .map_err(|_| error!(RaffleError::TransferFailed))?;
        self.winner
            .add_lamports(amount)
            .map_err(|_| error!(RaffleError::TransferFailed))?;

        let post_transfer_balance = self.winner.lamports();
        require!(
            post_transfer_balance
                == pre_transfer_balance
                    .checked_add(amount)
                    .ok_or(RaffleError::Overflow)?,
            RaffleError::TransferFailed
        );

        msg!("Paid {} lamports to {}", amount, winner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl TestAccount {
        fn new(owner: Pubkey, lamports: u64) -> Self {
            Self {
                key: Pubkey::new_unique(),
                owner,
                lamports,
                data: vec![],
            }
        }

        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                true,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    const RENT_FLOOR: u64 = 1_000_000;

    #[test]
    fn pays_the_selected_winner_from_the_vault() {
        let program_id = Pubkey::new_unique();
        let mut vault = TestAccount::new(program_id, RENT_FLOOR + 400);
        let mut winner = TestAccount::new(Pubkey::default(), 50);
        let winner_key = winner.key;

        {
            let vault_info = vault.info();
            let winner_info = winner.info();
            let mut engine = VaultPayout::new(&vault_info, &winner_info, RENT_FLOOR);
            engine.payout(&winner_key, 400).unwrap();
        }

        assert_eq!(vault.lamports, RENT_FLOOR);
        assert_eq!(winner.lamports, 450);
    }

    #[test]
    fn rejects_an_account_that_was_not_drawn() {
        let program_id = Pubkey::new_unique();
        let mut vault = TestAccount::new(program_id, RENT_FLOOR + 400);
        let mut impostor = TestAccount::new(Pubkey::default(), 0);
        let drawn = Pubkey::new_unique();

        {
            let vault_info = vault.info();
            let impostor_info = impostor.info();
            let mut engine = VaultPayout::new(&vault_info, &impostor_info, RENT_FLOOR);
            assert_eq!(
                engine.payout(&drawn, 400).unwrap_err(),
                RaffleError::WinnerAccountMismatch.into()
            );
        }

        assert_eq!(vault.lamports, RENT_FLOOR + 400);
        assert_eq!(impostor.lamports, 0);
    }

    #[test]
    fn never_dips_into_the_rent_floor() {
        let program_id = Pubkey::new_unique();
        let mut vault = TestAccount::new(program_id, RENT_FLOOR + 100);
        let mut winner = TestAccount::new(Pubkey::default(), 0);
        let winner_key = winner.key;

        {
            let vault_info = vault.info();
            let winner_info = winner.info();
            let mut engine = VaultPayout::new(&vault_info, &winner_info, RENT_FLOOR);
            assert_eq!(
                engine.payout(&winner_key, 400).unwrap_err(),
                RaffleError::TransferFailed.into()
            );
        }

        assert_eq!(vault.lamports, RENT_FLOOR + 100);
        assert_eq!(winner.lamports, 0);
    }
}
