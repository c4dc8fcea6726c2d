//! twenty48: a 2048 board-transition engine
//!
//! This crate provides:
//! - A grid `Board` type with ergonomic methods (`shift`, `make_move`, `state`, ...)
//! - Seed-injectable tile spawning for deterministic, reproducible games
//! - A thin terminal front end (the `twenty48` binary) for playing interactively
//!
//! Quick start:
//! ```
//! use twenty48::engine::{self, GameState, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic game setup with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let (board, state) = engine::new_game(4, &mut rng);
//! assert_eq!(state, GameState::InProgress);
//!
//! // Moves are value-in, value-out: the input board is untouched
//! let (next, state) = board.make_move(Move::Left, state, &mut rng);
//! assert!(next.count_empty() <= 14);
//! assert_eq!(board.count_empty(), 14);
//! # let _ = state;
//! ```
//!
//! Note: For convenience, there are also free functions mirroring the `Board` methods
//! (e.g., `engine::make_move`) that use thread-local RNG where relevant.
//! Prefer the methods when you need determinism.
//!
pub mod engine;
