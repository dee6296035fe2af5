//! # Listing Domain Model
//!
//! The entity schema for a single exchange listing, split into the stages it
//! passes through:
//!
//! * [`draft`]: the mutable form buffer the user fills in.
//! * [`record`]: the validated, immutable shape admitted into a session's
//!   collection.
//! * [`image`]: the opaque handle an external capture collaborator resolves.

pub mod draft;
pub mod image;
pub mod record;
