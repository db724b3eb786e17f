//! Move legality, check detection, and reply enumeration.

pub mod check;
pub mod movegen;
pub mod validator;

pub use check::{find_general, is_in_check, threatens};
pub use movegen::{candidate_moves, has_escape};
pub use validator::is_legal;
