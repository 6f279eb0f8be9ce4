//! # Text Module
//!
//! String helpers for item names and lore: colour code translation and
//! placeholder substitution.

pub mod color;
pub mod replace;

pub use color::*;
pub use replace::*;
