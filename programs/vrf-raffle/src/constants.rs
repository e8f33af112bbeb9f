/// Seed of the singleton raffle PDA.
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Seed of the vault PDA, combined with the raffle key.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of the entrant list PDA, combined with the raffle key.
pub const ENTRANTS_SEED: &[u8] = b"entrants";

/// Seed of the coordinator PDA that issues randomness request ids.
pub const COORDINATOR_SEED: &[u8] = b"coordinator";

/// Block confirmations the oracle waits for before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words asked for per request. Only the first one is consumed.
pub const NUM_WORDS: u32 = 1;

/// Width in bytes of a single random word (a big-endian 256-bit integer).
pub const RANDOM_WORD_LEN: usize = 32;
