//! # Item Flags
//!
//! Tooltip visibility flags.

use crate::{ItemError, ItemResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hides a section of the item tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemFlag {
    HideEnchants,
    HideAttributes,
    HideUnbreakable,
    HideDestroys,
    HidePlacedOn,
    HideAdditionalTooltip,
    HideDye,
    HideArmorTrim,
}

impl ItemFlag {
    /// Every flag.
    pub const ALL: &'static [ItemFlag] = &[
        ItemFlag::HideEnchants,
        ItemFlag::HideAttributes,
        ItemFlag::HideUnbreakable,
        ItemFlag::HideDestroys,
        ItemFlag::HidePlacedOn,
        ItemFlag::HideAdditionalTooltip,
        ItemFlag::HideDye,
        ItemFlag::HideArmorTrim,
    ];

    /// Canonical name, e.g. `HIDE_ENCHANTS`.
    pub fn name(self) -> &'static str {
        match self {
            ItemFlag::HideEnchants => "HIDE_ENCHANTS",
            ItemFlag::HideAttributes => "HIDE_ATTRIBUTES",
            ItemFlag::HideUnbreakable => "HIDE_UNBREAKABLE",
            ItemFlag::HideDestroys => "HIDE_DESTROYS",
            ItemFlag::HidePlacedOn => "HIDE_PLACED_ON",
            ItemFlag::HideAdditionalTooltip => "HIDE_ADDITIONAL_TOOLTIP",
            ItemFlag::HideDye => "HIDE_DYE",
            ItemFlag::HideArmorTrim => "HIDE_ARMOR_TRIM",
        }
    }
}

impl FromStr for ItemFlag {
    type Err = ItemError;

    fn from_str(s: &str) -> ItemResult<Self> {
        ItemFlag::ALL
            .iter()
            .copied()
            .find(|flag| flag.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ItemError::UnknownItemFlag(s.to_string()))
    }
}

impl fmt::Display for ItemFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
