use anchor_lang::prelude::*;

use crate::error::RaffleError;

// 8 (discriminator) + 32 (raffle) + 1 (bump)
pub const ENTRANTS_HEADER_SIZE: usize = 8 + 32 + 1;
pub const ENTRANT_SLOT_SIZE: usize = 32;

/// Header of the account holding the current round's entrants.
///
/// Entrants are not part of the Borsh layout: they live as raw 32-byte slots
/// after the header and are read and written in place through
/// [`EntrantSlots`], so the list is never copied onto the heap. The count of
/// occupied slots is `Raffle::player_count`.
#[account]
#[derive(Debug, Default)]
pub struct Entrants {
    pub raffle: Pubkey,
    pub bump: u8,
}

impl Entrants {
    /// Account size needed to hold `slots` entrants.
    pub fn space(slots: u64) -> usize {
        ENTRANTS_HEADER_SIZE + ENTRANT_SLOT_SIZE * slots as usize
    }
}

/// In-place view over the entrant slots of an `Entrants` account's data.
pub struct EntrantSlots<D> {
    data: D,
}

impl<D: AsRef<[u8]>> EntrantSlots<D> {
    /// Wraps the full account data, header included.
    pub fn new(data: D) -> Self {
        Self { data }
    }

    /// Number of slots the account currently has room for.
    pub fn capacity(&self) -> usize {
        self.data.as_ref().len().saturating_sub(ENTRANTS_HEADER_SIZE) / ENTRANT_SLOT_SIZE
    }

    pub fn get(&self, index: usize) -> Option<Pubkey> {
        let range = slot_range(index)?;
        let slot = self.data.as_ref().get(range)?;
        Pubkey::try_from(slot).ok()
    }
}

impl<D: AsRef<[u8]> + AsMut<[u8]>> EntrantSlots<D> {
    /// Writes `entrant` into slot `index`.
    ///
    /// # Errors
    /// - `MissingEntrantSlot` if the account has not grown to cover `index`
    pub fn set(&mut self, index: usize, entrant: &Pubkey) -> Result<()> {
        let slot = slot_range(index)
            .and_then(|range| self.data.as_mut().get_mut(range))
            .ok_or(RaffleError::MissingEntrantSlot)?;
        slot.copy_from_slice(entrant.as_ref());
        Ok(())
    }
}

fn slot_range(index: usize) -> Option<std::ops::Range<usize>> {
    let start = index
        .checked_mul(ENTRANT_SLOT_SIZE)?
        .checked_add(ENTRANTS_HEADER_SIZE)?;
    Some(start..start.checked_add(ENTRANT_SLOT_SIZE)?)
}
