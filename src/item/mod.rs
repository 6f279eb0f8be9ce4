//! # Item Module
//!
//! The server-side item model the builder writes into.
//!
//! This module contains:
//! - The material registry with stack limits
//! - Enchantment and tooltip flag identifiers
//! - Item metadata and item stacks, with JSON persistence

pub mod enchantment;
pub mod flag;
pub mod material;

pub use enchantment::*;
pub use flag::*;
pub use material::*;

use crate::ItemResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Descriptive data attached to an item stack.
///
/// An `ItemMeta` is a detached value: changes only reach a stack through
/// [`ItemStack::set_item_meta`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_model_data: Option<i32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    unbreakable: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    enchants: BTreeMap<Enchantment, i32>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    item_flags: BTreeSet<ItemFlag>,
}

impl ItemMeta {
    /// Creates metadata with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no field carries a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    pub fn has_lore(&self) -> bool {
        self.lore.is_some()
    }

    pub fn lore(&self) -> Option<&[String]> {
        self.lore.as_deref()
    }

    pub fn set_lore(&mut self, lore: Option<Vec<String>>) {
        self.lore = lore;
    }

    pub fn has_custom_model_data(&self) -> bool {
        self.custom_model_data.is_some()
    }

    pub fn custom_model_data(&self) -> Option<i32> {
        self.custom_model_data
    }

    pub fn set_custom_model_data(&mut self, data: Option<i32>) {
        self.custom_model_data = data;
    }

    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    pub fn set_unbreakable(&mut self, unbreakable: bool) {
        self.unbreakable = unbreakable;
    }

    pub fn has_enchants(&self) -> bool {
        !self.enchants.is_empty()
    }

    pub fn has_enchant(&self, enchantment: Enchantment) -> bool {
        self.enchants.contains_key(&enchantment)
    }

    /// Level of `enchantment`, or 0 when absent.
    pub fn enchant_level(&self, enchantment: Enchantment) -> i32 {
        self.enchants.get(&enchantment).copied().unwrap_or(0)
    }

    pub fn enchants(&self) -> &BTreeMap<Enchantment, i32> {
        &self.enchants
    }

    /// Applies an enchantment, overwriting any previous level.
    ///
    /// Unless `ignore_level_restriction` is set, levels outside the
    /// enchantment's normal `start_level..=max_level` range are refused and
    /// `false` is returned.
    pub fn add_enchant(
        &mut self,
        enchantment: Enchantment,
        level: i32,
        ignore_level_restriction: bool,
    ) -> bool {
        let in_range = (enchantment.start_level()..=enchantment.max_level()).contains(&level);
        if !ignore_level_restriction && !in_range {
            return false;
        }
        self.enchants.insert(enchantment, level);
        true
    }

    /// Returns true if the enchantment was present.
    pub fn remove_enchant(&mut self, enchantment: Enchantment) -> bool {
        self.enchants.remove(&enchantment).is_some()
    }

    pub fn has_item_flag(&self, flag: ItemFlag) -> bool {
        self.item_flags.contains(&flag)
    }

    pub fn item_flags(&self) -> &BTreeSet<ItemFlag> {
        &self.item_flags
    }

    pub fn add_item_flags(&mut self, flags: &[ItemFlag]) {
        self.item_flags.extend(flags.iter().copied());
    }

    pub fn remove_item_flags(&mut self, flags: &[ItemFlag]) {
        for flag in flags {
            self.item_flags.remove(flag);
        }
    }
}

/// A stack of items occupying one inventory slot.
///
/// # Examples
///
/// ```
/// use itembuilder::{ItemStack, Material};
///
/// let stack = ItemStack::new(Material::Apple);
/// assert_eq!(stack.amount(), 1);
/// assert!(!stack.has_item_meta());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    material: Material,
    amount: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<ItemMeta>,
}

impl ItemStack {
    /// Creates a single item of `material` with no metadata.
    pub fn new(material: Material) -> Self {
        Self::with_amount(material, 1)
    }

    /// Creates a stack of `amount` items with no metadata.
    pub fn with_amount(material: Material, amount: i32) -> Self {
        Self {
            material,
            amount,
            meta: None,
        }
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Sets the amount as given; stack limits are the caller's concern.
    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
    }

    pub fn max_stack_size(&self) -> i32 {
        self.material.max_stack_size()
    }

    /// Returns true when non-empty metadata is attached.
    pub fn has_item_meta(&self) -> bool {
        self.meta.as_ref().is_some_and(|meta| !meta.is_empty())
    }

    /// Returns a copy of the attached metadata.
    ///
    /// Stacks without metadata yield a fresh empty meta; air yields `None`.
    pub fn item_meta(&self) -> Option<ItemMeta> {
        if self.material.is_air() {
            return None;
        }
        Some(self.meta.clone().unwrap_or_default())
    }

    /// Attaches `meta` to the stack, replacing what was there.
    ///
    /// Empty metadata detaches instead. Returns false for air, which cannot
    /// carry metadata.
    pub fn set_item_meta(&mut self, meta: ItemMeta) -> bool {
        if self.material.is_air() {
            return false;
        }
        self.meta = if meta.is_empty() { None } else { Some(meta) };
        true
    }

    /// Compares everything except the amount.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        let meta = |stack: &ItemStack| stack.meta.clone().filter(|meta| !meta.is_empty());
        self.material == other.material && meta(self) == meta(other)
    }

    /// Serializes the stack to JSON.
    pub fn to_json(&self) -> ItemResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a stack from JSON produced by [`ItemStack::to_json`].
    pub fn from_json(json: &str) -> ItemResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
