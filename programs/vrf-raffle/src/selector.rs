use anchor_lang::prelude::*;
use arrayref::array_refs;

use crate::{constants::RANDOM_WORD_LEN, error::RaffleError};

/// Maps a random word onto a player index.
///
/// The word is read as a big-endian 256-bit unsigned integer and reduced
/// modulo `player_count`. The reduction walks the four 64-bit limbs from the
/// most significant one down, so the result equals `word mod player_count`
/// exactly without any wide-integer dependency.
///
/// No rejection sampling is applied: fairness rests on the entropy of the
/// oracle-supplied word.
///
/// # Errors
/// - `NoPlayers` if `player_count` is zero
pub fn select_winner_index(
    random_word: &[u8; RANDOM_WORD_LEN],
    player_count: usize,
) -> Result<usize> {
    require!(player_count > 0, RaffleError::NoPlayers);

    let modulus = player_count as u128;
    let (high, upper_mid, lower_mid, low) = array_refs![random_word, 8, 8, 8, 8];

    // remainder < modulus <= u64::MAX, so the shift never overflows u128
    let remainder = [high, upper_mid, lower_mid, low]
        .iter()
        .fold(0u128, |remainder, limb| {
            ((remainder << 64) | u64::from_be_bytes(**limb) as u128) % modulus
        });

    Ok(remainder as usize)
}
