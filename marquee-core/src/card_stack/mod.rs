//! Card-stack carousel
//!
//! A fixed set of cards shown as a stack: one card in front, its neighbours
//! peeking out as `next`/`prev`, the rest hidden. Navigation wraps around and
//! is serialized by a fixed-duration transition lock.

pub mod board;
pub mod config;
pub mod controller;
pub mod messages;
pub mod roles;

pub use board::CardBoard;
pub use config::CardStackConfig;
pub use controller::CardStack;
pub use messages::CardStackMessage;
pub use roles::{CardRole, role_for, roles};
