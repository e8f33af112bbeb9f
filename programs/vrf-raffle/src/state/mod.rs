pub use coordinator::*;
pub use entrants::*;
pub use raffle::*;
pub use vault::*;

pub mod coordinator;
pub mod entrants;
pub mod raffle;
pub mod vault;
