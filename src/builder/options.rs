//! # Builder Options
//!
//! Serializable construction parameters for [`ItemBuilder`](crate::ItemBuilder).

use crate::Material;
use serde::{Deserialize, Serialize};

/// Everything needed to start a draft in one value.
///
/// This is the form item definitions take in plugin configs, so it
/// deserializes with every field but `material` optional.
///
/// # Examples
///
/// ```
/// use itembuilder::{ItemBuilder, ItemOptions, Material};
///
/// let options: ItemOptions = serde_json::from_str(
///     r#"{ "material": "EMERALD", "display_name": "&aToken", "color": true }"#,
/// ).unwrap();
///
/// let builder = ItemBuilder::from_options(options);
/// assert_eq!(builder.material(), Material::Emerald);
/// assert_eq!(builder.display_name(), Some("§aToken"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOptions {
    /// Kind of item to build
    pub material: Material,
    /// Name shown instead of the default item name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Tooltip lines below the name
    #[serde(default)]
    pub lore: Option<Vec<String>>,
    /// Translate `&` codes in the name and lore on construction
    #[serde(default)]
    pub color: bool,
}

impl ItemOptions {
    /// Options for a plain item of `material`.
    pub fn new(material: Material) -> Self {
        Self {
            material,
            display_name: None,
            lore: None,
            color: false,
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl From<Material> for ItemOptions {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}

/// How [`ItemBuilder::from_item_with`](crate::ItemBuilder::from_item_with)
/// treats the source stack's metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaCopy {
    /// Copy metadata only when the stack reports none attached.
    ///
    /// Stacks that do carry metadata contribute just their material. This is
    /// the behaviour of `ItemBuilder::from_item`.
    #[default]
    Literal,
    /// Copy metadata whenever the stack carries some.
    WhenPresent,
}

impl MetaCopy {
    /// Whether metadata should be read from `item`.
    pub fn copies(self, item: &crate::ItemStack) -> bool {
        match self {
            MetaCopy::Literal => !item.has_item_meta(),
            MetaCopy::WhenPresent => item.has_item_meta(),
        }
    }
}
