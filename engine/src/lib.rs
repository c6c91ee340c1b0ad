pub mod identifiers;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use identifiers::RoundId;
pub use session_rng::SessionRng;
