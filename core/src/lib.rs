//! # Swapmeet Listing Core
//!
//! The session-local model behind the item exchange app: validating and
//! admitting drafts, keeping the ordered collection of accepted listings,
//! tracking which single row is in its detail state, and narrowing the
//! collection through filters.
//!
//! Presentation and capture concerns stay outside this crate. They reach the
//! core only through [`session::ListingSession`] and the traits in [`ports`];
//! the core holds no process-wide state of its own.

pub mod capture;
pub mod expansion;
pub mod filter;
pub mod ports;
pub mod session;
pub mod store;
