//! # ItemBuilder
//!
//! A fluent builder for Minecraft item stacks.
//!
//! ## Architecture Overview
//!
//! The crate is split into three layers:
//!
//! - **Item Model**: materials, enchantments, flags, item metadata and stacks
//! - **Text Helpers**: `&`-style colour code translation and placeholder replacement
//! - **Builder**: a mutable draft that materializes fresh [`ItemStack`]s on demand
//!
//! ## Quick Start
//!
//! ```
//! use itembuilder::{Enchantment, ItemBuilder, ItemFlag, Material};
//!
//! let mut builder = ItemBuilder::named(Material::DiamondSword, "&bFrostbite", true);
//! builder
//!     .add_enchant(Enchantment::Sharpness, 7)
//!     .add_flag(ItemFlag::HideEnchants)
//!     .set_unbreakable(true);
//!
//! let sword = builder.build();
//! assert_eq!(sword.amount(), 1);
//! assert_eq!(sword.item_meta().unwrap().display_name(), Some("§bFrostbite"));
//! ```

pub mod builder;
pub mod item;
pub mod text;

pub use builder::*;
pub use item::*;
pub use text::*;

/// Core error type for the item model.
#[derive(thiserror::Error, Debug)]
pub enum ItemError {
    /// Material name did not resolve
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Enchantment key did not resolve
    #[error("Unknown enchantment: {0}")]
    UnknownEnchantment(String),

    /// Item flag name did not resolve
    #[error("Unknown item flag: {0}")]
    UnknownItemFlag(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type ItemResult<T> = Result<T, ItemError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder configuration constants.
pub mod config {
    /// Character that introduces a colour code in user-facing text
    pub const ALT_COLOR_CHAR: char = '&';

    /// Amount used by `ItemBuilder::build`
    pub const DEFAULT_AMOUNT: i32 = 1;

    /// Smallest amount a built stack can carry
    pub const MIN_AMOUNT: i32 = 1;

    /// Smallest level stored for an enchantment
    pub const MIN_ENCHANT_LEVEL: i32 = 1;
}
