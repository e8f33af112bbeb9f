use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    #[msg("Raffle is not open for entries")]
    NotOpen,
    #[msg("Entry amount is below the entrance fee")]
    InsufficientFee,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Fulfillment does not match the pending randomness request")]
    UnknownRequest,
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,
    Overflow,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Fulfillment carried no random words")]
    MissingRandomWords,
    #[msg("Winner account does not match the selected player")]
    WinnerAccountMismatch,
    #[msg("The current round has no players")]
    NoPlayers,
    #[msg("Player index is out of bounds")]
    PlayerIndexOutOfBounds,
    #[msg("Only the coordinator authority may deliver randomness")]
    NotCoordinatorAuthority,
    #[msg("Entrants account has no slot at this index")]
    MissingEntrantSlot,
}
