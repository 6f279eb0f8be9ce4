//! # Enchantments
//!
//! Enchantment identifiers and their normal level ranges.

use crate::{ItemError, ItemResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An enchantment that can be applied to item metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Enchantment {
    Protection,
    FireProtection,
    FeatherFalling,
    BlastProtection,
    ProjectileProtection,
    Respiration,
    AquaAffinity,
    Thorns,
    DepthStrider,
    FrostWalker,
    BindingCurse,
    Sharpness,
    Smite,
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,
    SweepingEdge,
    Efficiency,
    SilkTouch,
    Unbreaking,
    Fortune,
    Power,
    Punch,
    Flame,
    Infinity,
    LuckOfTheSea,
    Lure,
    Loyalty,
    Impaling,
    Riptide,
    Channeling,
    Multishot,
    QuickCharge,
    Piercing,
    Mending,
    VanishingCurse,
    SoulSpeed,
    SwiftSneak,
}

impl Enchantment {
    /// Every registered enchantment.
    pub const ALL: &'static [Enchantment] = &[
        Enchantment::Protection,
        Enchantment::FireProtection,
        Enchantment::FeatherFalling,
        Enchantment::BlastProtection,
        Enchantment::ProjectileProtection,
        Enchantment::Respiration,
        Enchantment::AquaAffinity,
        Enchantment::Thorns,
        Enchantment::DepthStrider,
        Enchantment::FrostWalker,
        Enchantment::BindingCurse,
        Enchantment::Sharpness,
        Enchantment::Smite,
        Enchantment::BaneOfArthropods,
        Enchantment::Knockback,
        Enchantment::FireAspect,
        Enchantment::Looting,
        Enchantment::SweepingEdge,
        Enchantment::Efficiency,
        Enchantment::SilkTouch,
        Enchantment::Unbreaking,
        Enchantment::Fortune,
        Enchantment::Power,
        Enchantment::Punch,
        Enchantment::Flame,
        Enchantment::Infinity,
        Enchantment::LuckOfTheSea,
        Enchantment::Lure,
        Enchantment::Loyalty,
        Enchantment::Impaling,
        Enchantment::Riptide,
        Enchantment::Channeling,
        Enchantment::Multishot,
        Enchantment::QuickCharge,
        Enchantment::Piercing,
        Enchantment::Mending,
        Enchantment::VanishingCurse,
        Enchantment::SoulSpeed,
        Enchantment::SwiftSneak,
    ];

    /// Registry name without namespace, e.g. `bane_of_arthropods`.
    pub fn name(self) -> &'static str {
        match self {
            Enchantment::Protection => "protection",
            Enchantment::FireProtection => "fire_protection",
            Enchantment::FeatherFalling => "feather_falling",
            Enchantment::BlastProtection => "blast_protection",
            Enchantment::ProjectileProtection => "projectile_protection",
            Enchantment::Respiration => "respiration",
            Enchantment::AquaAffinity => "aqua_affinity",
            Enchantment::Thorns => "thorns",
            Enchantment::DepthStrider => "depth_strider",
            Enchantment::FrostWalker => "frost_walker",
            Enchantment::BindingCurse => "binding_curse",
            Enchantment::Sharpness => "sharpness",
            Enchantment::Smite => "smite",
            Enchantment::BaneOfArthropods => "bane_of_arthropods",
            Enchantment::Knockback => "knockback",
            Enchantment::FireAspect => "fire_aspect",
            Enchantment::Looting => "looting",
            Enchantment::SweepingEdge => "sweeping_edge",
            Enchantment::Efficiency => "efficiency",
            Enchantment::SilkTouch => "silk_touch",
            Enchantment::Unbreaking => "unbreaking",
            Enchantment::Fortune => "fortune",
            Enchantment::Power => "power",
            Enchantment::Punch => "punch",
            Enchantment::Flame => "flame",
            Enchantment::Infinity => "infinity",
            Enchantment::LuckOfTheSea => "luck_of_the_sea",
            Enchantment::Lure => "lure",
            Enchantment::Loyalty => "loyalty",
            Enchantment::Impaling => "impaling",
            Enchantment::Riptide => "riptide",
            Enchantment::Channeling => "channeling",
            Enchantment::Multishot => "multishot",
            Enchantment::QuickCharge => "quick_charge",
            Enchantment::Piercing => "piercing",
            Enchantment::Mending => "mending",
            Enchantment::VanishingCurse => "vanishing_curse",
            Enchantment::SoulSpeed => "soul_speed",
            Enchantment::SwiftSneak => "swift_sneak",
        }
    }

    /// Namespaced key, e.g. `minecraft:sharpness`.
    pub fn key(self) -> String {
        format!("minecraft:{}", self.name())
    }

    /// Lowest level the enchantment table hands out.
    pub fn start_level(self) -> i32 {
        1
    }

    /// Highest level obtainable without commands or plugins.
    pub fn max_level(self) -> i32 {
        match self {
            Enchantment::Protection
            | Enchantment::FireProtection
            | Enchantment::FeatherFalling
            | Enchantment::BlastProtection
            | Enchantment::ProjectileProtection
            | Enchantment::Piercing => 4,
            Enchantment::Sharpness
            | Enchantment::Smite
            | Enchantment::BaneOfArthropods
            | Enchantment::Efficiency
            | Enchantment::Power
            | Enchantment::Impaling => 5,
            Enchantment::Respiration
            | Enchantment::Thorns
            | Enchantment::DepthStrider
            | Enchantment::Looting
            | Enchantment::SweepingEdge
            | Enchantment::Unbreaking
            | Enchantment::Fortune
            | Enchantment::LuckOfTheSea
            | Enchantment::Lure
            | Enchantment::Loyalty
            | Enchantment::Riptide
            | Enchantment::QuickCharge
            | Enchantment::SoulSpeed
            | Enchantment::SwiftSneak => 3,
            Enchantment::FrostWalker
            | Enchantment::Knockback
            | Enchantment::FireAspect
            | Enchantment::Punch => 2,
            Enchantment::AquaAffinity
            | Enchantment::BindingCurse
            | Enchantment::SilkTouch
            | Enchantment::Flame
            | Enchantment::Infinity
            | Enchantment::Channeling
            | Enchantment::Multishot
            | Enchantment::Mending
            | Enchantment::VanishingCurse => 1,
        }
    }

    /// Curses cannot be removed by a grindstone.
    pub fn is_cursed(self) -> bool {
        matches!(self, Enchantment::BindingCurse | Enchantment::VanishingCurse)
    }
}

impl FromStr for Enchantment {
    type Err = ItemError;

    /// Accepts a namespaced key or a bare name, ignoring case.
    fn from_str(s: &str) -> ItemResult<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let bare = lowered.strip_prefix("minecraft:").unwrap_or(lowered.as_str());

        Enchantment::ALL
            .iter()
            .copied()
            .find(|enchantment| enchantment.name() == bare)
            .ok_or_else(|| ItemError::UnknownEnchantment(s.to_string()))
    }
}

impl fmt::Display for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.name())
    }
}
