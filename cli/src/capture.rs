//! Concrete capture collaborators for the terminal front-end.
//!
//! Both adapters implement the core's
//! [`ImageSource`](swapmeet_core::ports::outbound::image_source::ImageSource)
//! port and resolve the same opaque handle shape; the core never learns
//! which one ran.

pub mod camera;
pub mod gallery;
