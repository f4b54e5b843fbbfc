//! Core building blocks shared across the panchito services.
//!
//! Pure configuration plumbing lives here. Web framework and database
//! wiring belong to the service crates.

pub mod settings;
