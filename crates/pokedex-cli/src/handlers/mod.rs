//! Command handlers.
//!
//! Handlers translate parsed arguments into adapter configuration and
//! delegate to `pokedex-axum` and `pokedex-core`; they hold no business
//! logic.

pub mod paths;
pub mod seed;
pub mod serve;
