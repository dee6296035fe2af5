//! Traits defining what the core needs from the outside world.
//!
//! Only contracts live here; concrete implementations belong to the
//! presentation layer (or to tests). Domain types are used freely in the
//! signatures.

pub mod outbound;
