//! Domain logic for brand kits and ad layout generation.
//!
//! Everything in this crate is free of network and database access so the
//! prompt-building rules can be tested as plain functions. The only async
//! helper is [`retry::retry`], which sleeps between attempts.

pub mod error;
pub mod output;
pub mod prompt;
pub mod retry;
pub mod rules;
pub mod templates;
pub mod types;
pub mod validation;
