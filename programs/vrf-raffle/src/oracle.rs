use anchor_lang::prelude::*;

/// Parameters of a single randomness request, as handed to the oracle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    /// Key hash selecting the oracle's gas lane
    pub gas_lane: [u8; 32],
    /// Oracle subscription that funds the request
    pub subscription_id: u64,
    /// Confirmations the oracle waits for before answering
    pub request_confirmations: u16,
    /// Compute budget reserved for the fulfillment callback
    pub callback_gas_limit: u32,
    /// Number of random words requested
    pub num_words: u32,
}

/// Outbound side of the randomness oracle.
///
/// Implementations hand out an opaque request id. The random words come back
/// later through an independent `fulfill_random_words` call that is matched
/// against the id, never through a continuation held by the caller.
pub trait RandomnessOracle {
    fn request_random_words(&mut self, request: &RandomnessRequest) -> Result<u64>;
}
