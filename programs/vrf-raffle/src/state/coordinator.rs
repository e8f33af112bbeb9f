use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    oracle::{RandomnessOracle, RandomnessRequest},
};

// 8 discriminator + 32 authority + 8 next_request_id + 1 bump
pub const COORDINATOR_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 1;

/// First id handed out; zero is never a valid request.
pub const FIRST_REQUEST_ID: u64 = 1;

/// On-chain endpoint of the randomness oracle.
///
/// Issues request ids and names the only key allowed to answer them. The
/// oracle service itself watches for `RandomnessRequested` events.
#[account]
#[derive(Default)]
pub struct Coordinator {
    pub authority: Pubkey,
    pub next_request_id: u64,
    pub bump: u8,
}

impl RandomnessOracle for Coordinator {
    fn request_random_words(&mut self, request: &RandomnessRequest) -> Result<u64> {
        let request_id = self.next_request_id;
        self.next_request_id = request_id
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        msg!(
            "Randomness request {} for {} word(s), {} confirmations",
            request_id,
            request.num_words,
            request.request_confirmations
        );
        Ok(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NUM_WORDS, REQUEST_CONFIRMATIONS};

    fn request() -> RandomnessRequest {
        RandomnessRequest {
            gas_lane: [7; 32],
            subscription_id: 1,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: 500_000,
            num_words: NUM_WORDS,
        }
    }

    #[test]
    fn issues_fresh_ids_in_sequence() {
        let mut coordinator = Coordinator {
            next_request_id: FIRST_REQUEST_ID,
            ..Default::default()
        };

        assert_eq!(coordinator.request_random_words(&request()).unwrap(), 1);
        assert_eq!(coordinator.request_random_words(&request()).unwrap(), 2);
        assert_eq!(coordinator.next_request_id, 3);
    }

    #[test]
    fn exhausted_counter_fails_without_issuing() {
        let mut coordinator = Coordinator {
            next_request_id: u64::MAX,
            ..Default::default()
        };

        assert_eq!(
            coordinator.request_random_words(&request()).unwrap_err(),
            RaffleError::Overflow.into()
        );
        assert_eq!(coordinator.next_request_id, u64::MAX);
    }
}
