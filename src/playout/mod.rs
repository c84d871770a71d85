//! Simulated play.
//!
//! Drives a game forward with seeded random legal moves. Useful for
//! filling a board to a realistic position, or for exercising the engine
//! over many games.

pub mod random;

pub use random::random_playout;
