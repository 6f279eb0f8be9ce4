//! # Materials
//!
//! The item kind registry: canonical names and maximum stack sizes.

use crate::{ItemError, ItemResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NAMESPACE: &str = "minecraft:";

macro_rules! materials {
    ($($variant:ident => $name:literal, $stack:literal;)*) => {
        /// Kind of an item, as known to the server registry.
        ///
        /// Serializes as its canonical `SCREAMING_SNAKE_CASE` name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Material {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl Material {
            /// Every registered material, in declaration order.
            pub const ALL: &'static [Material] = &[$(Material::$variant,)*];

            /// Canonical registry name, e.g. `DIAMOND_SWORD`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Material::$variant => $name,)*
                }
            }

            /// Largest amount a single stack of this material may hold.
            pub fn max_stack_size(self) -> i32 {
                match self {
                    $(Material::$variant => $stack,)*
                }
            }
        }
    };
}

materials! {
    Air => "AIR", 64;
    Stone => "STONE", 64;
    Cobblestone => "COBBLESTONE", 64;
    Dirt => "DIRT", 64;
    GrassBlock => "GRASS_BLOCK", 64;
    OakLog => "OAK_LOG", 64;
    OakPlanks => "OAK_PLANKS", 64;
    Glass => "GLASS", 64;
    Torch => "TORCH", 64;
    Chest => "CHEST", 64;
    CraftingTable => "CRAFTING_TABLE", 64;
    Diamond => "DIAMOND", 64;
    Emerald => "EMERALD", 64;
    GoldIngot => "GOLD_INGOT", 64;
    IronIngot => "IRON_INGOT", 64;
    NetherStar => "NETHER_STAR", 64;
    Apple => "APPLE", 64;
    GoldenApple => "GOLDEN_APPLE", 64;
    Bread => "BREAD", 64;
    Arrow => "ARROW", 64;
    Paper => "PAPER", 64;
    Book => "BOOK", 64;
    ExperienceBottle => "EXPERIENCE_BOTTLE", 64;
    PlayerHead => "PLAYER_HEAD", 64;
    Compass => "COMPASS", 64;
    Clock => "CLOCK", 64;
    FilledMap => "FILLED_MAP", 64;
    EnderPearl => "ENDER_PEARL", 16;
    Snowball => "SNOWBALL", 16;
    Egg => "EGG", 16;
    Bucket => "BUCKET", 16;
    OakSign => "OAK_SIGN", 16;
    WhiteBanner => "WHITE_BANNER", 16;
    ArmorStand => "ARMOR_STAND", 16;
    HoneyBottle => "HONEY_BOTTLE", 16;
    WrittenBook => "WRITTEN_BOOK", 16;
    WaterBucket => "WATER_BUCKET", 1;
    LavaBucket => "LAVA_BUCKET", 1;
    WoodenSword => "WOODEN_SWORD", 1;
    IronSword => "IRON_SWORD", 1;
    DiamondSword => "DIAMOND_SWORD", 1;
    NetheriteSword => "NETHERITE_SWORD", 1;
    DiamondPickaxe => "DIAMOND_PICKAXE", 1;
    Bow => "BOW", 1;
    Crossbow => "CROSSBOW", 1;
    Trident => "TRIDENT", 1;
    Shield => "SHIELD", 1;
    Elytra => "ELYTRA", 1;
    DiamondHelmet => "DIAMOND_HELMET", 1;
    DiamondChestplate => "DIAMOND_CHESTPLATE", 1;
    DiamondLeggings => "DIAMOND_LEGGINGS", 1;
    DiamondBoots => "DIAMOND_BOOTS", 1;
    FishingRod => "FISHING_ROD", 1;
    Shears => "SHEARS", 1;
    FlintAndSteel => "FLINT_AND_STEEL", 1;
    Saddle => "SADDLE", 1;
    EnchantedBook => "ENCHANTED_BOOK", 1;
    Potion => "POTION", 1;
    TotemOfUndying => "TOTEM_OF_UNDYING", 1;
}

impl Material {
    /// Namespaced key, e.g. `minecraft:diamond_sword`.
    pub fn key(self) -> String {
        format!("{}{}", NAMESPACE, self.name().to_ascii_lowercase())
    }

    /// Returns true for the empty-slot material, which never carries metadata.
    pub fn is_air(self) -> bool {
        self == Material::Air
    }

    /// Lenient lookup used for user-typed names.
    ///
    /// Ignores case and an optional `minecraft:` prefix, and accepts spaces or
    /// hyphens in place of underscores.
    ///
    /// # Examples
    ///
    /// ```
    /// use itembuilder::Material;
    ///
    /// assert_eq!(Material::match_name("minecraft:diamond_sword"), Some(Material::DiamondSword));
    /// assert_eq!(Material::match_name("Ender Pearl"), Some(Material::EnderPearl));
    /// assert_eq!(Material::match_name("unobtainium"), None);
    /// ```
    pub fn match_name(name: &str) -> Option<Material> {
        let trimmed = name.trim();
        let bare = match trimmed.get(..NAMESPACE.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(NAMESPACE) => &trimmed[NAMESPACE.len()..],
            _ => trimmed,
        };
        let normalized: String = bare
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        normalized.parse().ok()
    }
}

impl FromStr for Material {
    type Err = ItemError;

    /// Exact lookup by canonical name.
    fn from_str(s: &str) -> ItemResult<Self> {
        Material::ALL
            .iter()
            .copied()
            .find(|material| material.name() == s)
            .ok_or_else(|| ItemError::UnknownMaterial(s.to_string()))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
