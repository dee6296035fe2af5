//! # Outbound Ports
//!
//! Contracts for collaborators the core consumes results from:
//!
//! * **Capture**: resolving an image asset for a draft ([`image_source`]).
//! * **Location**: precomputed distances to meetup spots ([`distance_source`]).
//!
//! ## Rules
//! 1. All items here must be `trait`s.
//! 2. No concrete implementations allowed.
//! 3. The core only ever consumes a collaborator's *completed* result; no
//!    collaborator work happens inside core operations.

pub mod distance_source;
pub mod image_source;
