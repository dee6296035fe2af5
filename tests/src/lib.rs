//! Cross-crate integration tests for the exchange board.

mod exchange;
