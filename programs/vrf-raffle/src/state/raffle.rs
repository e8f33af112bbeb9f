use anchor_lang::prelude::*;

use crate::{
    constants::{NUM_WORDS, RANDOM_WORD_LEN, REQUEST_CONFIRMATIONS},
    error::RaffleError,
    oracle::{RandomnessOracle, RandomnessRequest},
    payout::PayoutEngine,
    selector::select_winner_index,
    state::EntrantSlots,
};

// Space calculation:
// 8 (discriminator) +
// 1 (state) +
// 8 (entrance_fee) +
// 8 (interval) +
// 8 (last_timestamp) +
// 8 (player_count) +
// 8 (pool_balance) +
// 33 (recent_winner: Option<Pubkey>) +
// 25 (pending_request: Option<PendingRequest>) +
// 8 (round) +
// 32 (gas_lane) +
// 8 (subscription_id) +
// 4 (callback_gas_limit) +
// 1 (bump) +
// 1 (vault_bump) +
// 1 (entrants_bump) =
// 162 bytes
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 1 + 8 + 8 + 8 + 8 + 8 + 33 + 25 + 8 + 32 + 8 + 4 + 1 + 1 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RaffleState {
    /// Accepting entrants
    #[default]
    Open,
    /// Entry closed, waiting for the oracle to deliver randomness
    Calculating,
}

/// The outstanding randomness request and the round it will close.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub request_id: u64,
    pub round: u64,
    pub requested_at: i64,
}

/// Deployment parameters, fixed for the lifetime of the raffle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaffleParams {
    /// Minimum lamports an entrant must deposit
    pub entrance_fee: u64,
    /// Minimum seconds between a reset and the next close
    pub interval: i64,
    /// Oracle key hash selecting the gas lane
    pub gas_lane: [u8; 32],
    /// Oracle subscription funding the requests
    pub subscription_id: u64,
    /// Compute budget reserved for the fulfillment callback
    pub callback_gas_limit: u32,
}

/// Answer of the upkeep condition check.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    /// Passed back untouched to `perform_upkeep`. Always empty.
    pub perform_data: Vec<u8>,
}

/// Outcome of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub winner: Pubkey,
    pub winner_index: usize,
    pub request_id: u64,
    pub round: u64,
    pub prize: u64,
}

/// PDA bumps of the accounts created alongside the raffle.
#[derive(Clone, Copy, Debug, Default)]
pub struct RaffleBumps {
    pub raffle: u8,
    pub vault: u8,
    pub entrants: u8,
}

#[account]
#[derive(Debug, Default)]
pub struct Raffle {
    pub state: RaffleState,
    pub entrance_fee: u64,
    pub interval: i64,
    pub last_timestamp: i64,
    /// Occupied slots in the entrants account
    pub player_count: u64,
    pub pool_balance: u64,
    pub recent_winner: Option<Pubkey>,
    pub pending_request: Option<PendingRequest>,
    pub round: u64,
    pub gas_lane: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub bump: u8,
    pub vault_bump: u8,
    pub entrants_bump: u8,
}

impl Raffle {
    /// Builds an open raffle whose first interval starts at `now`.
    ///
    /// # Errors
    /// - `InvalidEntranceFee` if the fee is zero
    /// - `InvalidInterval` if the interval is not positive
    pub fn new(params: &RaffleParams, now: i64, bumps: RaffleBumps) -> Result<Self> {
        require!(params.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(params.interval > 0, RaffleError::InvalidInterval);

        Ok(Self {
            state: RaffleState::Open,
            entrance_fee: params.entrance_fee,
            interval: params.interval,
            last_timestamp: now,
            player_count: 0,
            pool_balance: 0,
            recent_winner: None,
            pending_request: None,
            round: 0,
            gas_lane: params.gas_lane,
            subscription_id: params.subscription_id,
            callback_gas_limit: params.callback_gas_limit,
            bump: bumps.raffle,
            vault_bump: bumps.vault,
            entrants_bump: bumps.entrants,
        })
    }

    pub fn entrance_fee(&self) -> u64 {
        self.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn state(&self) -> RaffleState {
        self.state
    }

    /// The entrant at `index` in this round, if there is one.
    pub fn player<D: AsRef<[u8]>>(
        &self,
        entrants: &EntrantSlots<D>,
        index: usize,
    ) -> Option<Pubkey> {
        if (index as u64) < self.player_count {
            entrants.get(index)
        } else {
            None
        }
    }

    pub fn number_of_players(&self) -> u64 {
        self.player_count
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn pool_balance(&self) -> u64 {
        self.pool_balance
    }

    pub fn pending_request_id(&self) -> Option<u64> {
        self.pending_request.map(|pending| pending.request_id)
    }

    /// Number of rounds completed so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Records an entrant for the current round.
    ///
    /// The open check runs first, so a closed raffle reports `NotOpen` no
    /// matter how much was offered. The whole `amount` joins the pool and
    /// the player takes the next free slot in `entrants`.
    ///
    /// Returns the player's index in the round.
    pub fn enter<D: AsRef<[u8]> + AsMut<[u8]>>(
        &mut self,
        entrants: &mut EntrantSlots<D>,
        player: Pubkey,
        amount: u64,
    ) -> Result<u64> {
        require!(self.state == RaffleState::Open, RaffleError::NotOpen);
        require!(amount >= self.entrance_fee, RaffleError::InsufficientFee);

        let index = self.player_count;
        let player_count = index.checked_add(1).ok_or(RaffleError::Overflow)?;
        let pool_balance = self
            .pool_balance
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        let slot = usize::try_from(index).map_err(|_| RaffleError::MissingEntrantSlot)?;
        entrants.set(slot, &player)?;

        self.player_count = player_count;
        self.pool_balance = pool_balance;

        Ok(index)
    }

    /// True when the round may be closed at `now`: open, the interval has
    /// elapsed since the last reset, and the pool has players and funds.
    pub fn upkeep_needed(&self, now: i64) -> bool {
        let is_open = self.state == RaffleState::Open;
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = self.player_count > 0;
        let has_balance = self.pool_balance > 0;

        is_open && time_passed && has_players && has_balance
    }

    pub fn check_upkeep(&self, now: i64) -> UpkeepCheck {
        UpkeepCheck {
            upkeep_needed: self.upkeep_needed(now),
            perform_data: Vec::new(),
        }
    }

    /// The request this raffle sends to the oracle.
    pub fn randomness_request(&self) -> RandomnessRequest {
        RandomnessRequest {
            gas_lane: self.gas_lane,
            subscription_id: self.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: self.callback_gas_limit,
            num_words: NUM_WORDS,
        }
    }

    /// Closes entry and asks the oracle for randomness.
    ///
    /// Nothing is written unless both the condition check and the oracle
    /// request succeed, so a failing oracle leaves the raffle open.
    ///
    /// # Errors
    /// - `UpkeepNotNeeded` if `upkeep_needed(now)` is false
    /// - whatever the oracle returns when the request cannot be issued
    pub fn close_round<O: RandomnessOracle>(&mut self, oracle: &mut O, now: i64) -> Result<u64> {
        if !self.upkeep_needed(now) {
            msg!(
                "Upkeep not needed: balance {}, players {}, state {:?}",
                self.pool_balance,
                self.player_count,
                self.state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let pending = self.request_randomness(oracle, now)?;
        self.state = RaffleState::Calculating;

        Ok(pending.request_id)
    }

    fn request_randomness<O: RandomnessOracle>(
        &mut self,
        oracle: &mut O,
        now: i64,
    ) -> Result<PendingRequest> {
        let request_id = oracle.request_random_words(&self.randomness_request())?;
        let pending = PendingRequest {
            request_id,
            round: self.round,
            requested_at: now,
        };
        self.pending_request = Some(pending);

        Ok(pending)
    }

    /// The pending request answered by `request_id`.
    ///
    /// Ids that were never issued, belong to an earlier round, or were
    /// already consumed all fail the same way.
    fn matching_request(&self, request_id: u64) -> Result<PendingRequest> {
        match self.pending_request {
            Some(pending) if pending.request_id == request_id => {
                debug_assert!(
                    self.state == RaffleState::Calculating && pending.round == self.round
                );
                Ok(pending)
            }
            _ => err!(RaffleError::UnknownRequest),
        }
    }

    /// Completes the round answered by `request_id`.
    ///
    /// The winner is `random_words[0] mod player_count`, read from its slot
    /// in `entrants`. The prize is paid before anything is written; if the
    /// payout fails the raffle stays in `Calculating` with the request still
    /// pending, so only a redelivery of the same request can complete it.
    ///
    /// The redelivered word is not compared with the first one. A failed
    /// fulfillment rolls back every write, so nothing of the first delivery
    /// survives to compare against; the coordinator authority is trusted to
    /// answer a request id with a single value.
    ///
    /// # Errors
    /// - `UnknownRequest` if `request_id` is not the pending request
    /// - `MissingRandomWords` if no word was delivered
    /// - `MissingEntrantSlot` if `entrants` does not hold the selected slot
    /// - the payout engine's error when the prize cannot be moved
    pub fn settle<D: AsRef<[u8]>, P: PayoutEngine>(
        &mut self,
        request_id: u64,
        random_words: &[[u8; RANDOM_WORD_LEN]],
        entrants: &EntrantSlots<D>,
        payout: &mut P,
        now: i64,
    ) -> Result<Settlement> {
        let pending = self.matching_request(request_id)?;
        let random_word = random_words
            .first()
            .ok_or(RaffleError::MissingRandomWords)?;

        let player_count =
            usize::try_from(self.player_count).map_err(|_| RaffleError::MissingEntrantSlot)?;
        let winner_index = select_winner_index(random_word, player_count)?;
        let winner = entrants
            .get(winner_index)
            .ok_or(RaffleError::MissingEntrantSlot)?;
        let prize = self.pool_balance;

        payout.payout(&winner, prize)?;

        self.recent_winner = Some(winner);
        self.reset_round(now)?;

        Ok(Settlement {
            winner,
            winner_index,
            request_id: pending.request_id,
            round: pending.round,
            prize,
        })
    }

    fn reset_round(&mut self, now: i64) -> Result<()> {
        self.player_count = 0;
        self.pool_balance = 0;
        self.last_timestamp = now.max(self.last_timestamp);
        self.pending_request = None;
        self.round = self.round.checked_add(1).ok_or(RaffleError::Overflow)?;
        self.state = RaffleState::Open;
        Ok(())
    }
}
