pub mod config;
pub mod error;
pub mod filter;
pub mod listing;

mod macros;
