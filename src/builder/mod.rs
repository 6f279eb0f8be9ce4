//! # Builder Module
//!
//! A mutable item draft that turns into fresh [`ItemStack`]s on demand.
//!
//! The draft never reports errors. Inputs it cannot use are absorbed:
//! - odd-length replacement lists leave the text untouched
//! - unknown material names keep the current material
//! - enchantment levels below 1 are raised to 1
//! - build amounts are clamped to `1..=max_stack_size`
//! - text edits on an unset name or lore do nothing

pub mod options;

pub use options::*;

use crate::config::{DEFAULT_AMOUNT, MIN_AMOUNT, MIN_ENCHANT_LEVEL};
use crate::{colorize, replace_pairs, Enchantment, ItemFlag, ItemStack, Material};
use log::{debug, trace};
use std::collections::HashMap;

/// Draft of an item: kind, text, enchantments and tooltip flags.
///
/// Every mutator returns `&mut Self` so calls chain. Building reads the
/// draft without consuming it, so one draft can stamp out many stacks.
///
/// # Examples
///
/// ```
/// use itembuilder::{ItemBuilder, Material};
///
/// let mut builder = ItemBuilder::with_lore(
///     Material::Paper,
///     "&6Bounty: {target}",
///     vec!["&7Reward: {reward}".to_string()],
///     false,
/// );
/// builder.color_and_replace_display_name("{target}", "Herobrine");
/// builder.color_and_replace_lore("{reward}", "500 coins");
///
/// let bounty = builder.build_amount(3);
/// let meta = bounty.item_meta().unwrap();
/// assert_eq!(bounty.amount(), 3);
/// assert_eq!(meta.display_name(), Some("§6Bounty: Herobrine"));
/// assert_eq!(meta.lore().unwrap()[0], "§7Reward: 500 coins");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBuilder {
    material: Material,
    display_name: Option<String>,
    lore: Option<Vec<String>>,
    custom_model_data: i32,
    unbreakable: bool,
    enchants: HashMap<Enchantment, i32>,
    flags: Vec<ItemFlag>,
}

impl ItemBuilder {
    /// Starts an empty draft of `material`.
    pub fn new(material: Material) -> Self {
        Self {
            material,
            display_name: None,
            lore: None,
            custom_model_data: 0,
            unbreakable: false,
            enchants: HashMap::new(),
            flags: Vec::new(),
        }
    }

    /// Starts a draft with a display name, translating `&` codes if `color`.
    pub fn named(material: Material, display_name: impl Into<String>, color: bool) -> Self {
        Self::from_options(
            ItemOptions::new(material)
                .display_name(display_name)
                .color(color),
        )
    }

    /// Starts a draft with a display name and lore, translating `&` codes in
    /// both if `color`.
    pub fn with_lore(
        material: Material,
        display_name: impl Into<String>,
        lore: Vec<String>,
        color: bool,
    ) -> Self {
        Self::from_options(ItemOptions {
            material,
            display_name: Some(display_name.into()),
            lore: Some(lore),
            color,
        })
    }

    /// Starts a draft from a full set of options.
    pub fn from_options(options: ItemOptions) -> Self {
        let mut builder = Self::new(options.material);
        builder.display_name = options.display_name;
        builder.lore = options.lore;

        if options.color {
            builder.color_display_name().color_lore();
        }
        builder
    }

    /// Starts a draft from an existing stack using [`MetaCopy::Literal`].
    ///
    /// The material is always taken. Name, lore, model data, unbreakable,
    /// enchantments and flags are only read when the stack reports no
    /// metadata attached, so a decorated stack yields a bare draft of the
    /// same material. Use [`ItemBuilder::from_item_with`] with
    /// [`MetaCopy::WhenPresent`] to copy the decorations.
    pub fn from_item(item: &ItemStack) -> Self {
        Self::from_item_with(item, MetaCopy::Literal)
    }

    /// Starts a draft from an existing stack under the given copy policy.
    pub fn from_item_with(item: &ItemStack, policy: MetaCopy) -> Self {
        let mut builder = Self::new(item.material());

        if !policy.copies(item) {
            trace!("{:?}: skipping metadata of {}", policy, item.material());
            return builder;
        }
        let Some(meta) = item.item_meta() else {
            return builder;
        };

        builder.display_name = meta.display_name().map(str::to_string);
        builder.lore = meta.lore().map(<[String]>::to_vec);
        builder.custom_model_data = meta.custom_model_data().unwrap_or(0);
        builder.unbreakable = meta.is_unbreakable();
        for (&enchantment, &level) in meta.enchants() {
            builder.add_enchant(enchantment, level);
        }
        builder.flags.extend(meta.item_flags().iter().copied());
        builder
    }

    /// Builds a single item.
    pub fn build(&self) -> ItemStack {
        self.build_amount(DEFAULT_AMOUNT)
    }

    /// Builds a stack of `amount` items, clamped to `1..=max_stack_size`.
    pub fn build_amount(&self, amount: i32) -> ItemStack {
        let amount = amount.max(MIN_AMOUNT).min(self.material.max_stack_size());
        let mut item = ItemStack::with_amount(self.material, amount);

        match item.item_meta() {
            Some(mut meta) => {
                meta.set_display_name(self.display_name.clone());
                meta.set_lore(self.lore.clone());
                meta.set_custom_model_data(Some(self.custom_model_data));
                meta.set_unbreakable(self.unbreakable);
                for (&enchantment, &level) in &self.enchants {
                    meta.add_enchant(enchantment, level, true);
                }
                meta.add_item_flags(&self.flags);
                item.set_item_meta(meta);
            }
            None => trace!("{} cannot carry metadata", self.material),
        }

        debug!("Built {} x{}", self.material, amount);
        item
    }

    /// Translates `&` codes in the display name.
    pub fn color_display_name(&mut self) -> &mut Self {
        self.edit_display_name("color_display_name", |name| Some(colorize(name)))
    }

    /// Replaces every `target` in the display name.
    pub fn replace_display_name(&mut self, target: &str, replacement: &str) -> &mut Self {
        self.edit_display_name("replace_display_name", |name| {
            Some(name.replace(target, replacement))
        })
    }

    /// Applies alternating target/replacement pairs to the display name.
    pub fn replace_display_name_many<S: AsRef<str>>(&mut self, pairs: &[S]) -> &mut Self {
        self.edit_display_name("replace_display_name_many", |name| {
            replace_pairs(name, pairs)
        })
    }

    /// Replaces every `target` in the display name, then translates `&` codes.
    pub fn color_and_replace_display_name(&mut self, target: &str, replacement: &str) -> &mut Self {
        self.edit_display_name("color_and_replace_display_name", |name| {
            Some(colorize(&name.replace(target, replacement)))
        })
    }

    /// Applies alternating target/replacement pairs to the display name,
    /// then translates `&` codes.
    pub fn color_and_replace_display_name_many<S: AsRef<str>>(&mut self, pairs: &[S]) -> &mut Self {
        self.edit_display_name("color_and_replace_display_name_many", |name| {
            replace_pairs(name, pairs).map(|replaced| colorize(&replaced))
        })
    }

    /// Translates `&` codes in every lore line.
    pub fn color_lore(&mut self) -> &mut Self {
        self.edit_lore("color_lore", colorize)
    }

    /// Replaces every `target` in every lore line.
    pub fn replace_lore(&mut self, target: &str, replacement: &str) -> &mut Self {
        self.edit_lore("replace_lore", |line| line.replace(target, replacement))
    }

    /// Applies alternating target/replacement pairs to every lore line.
    pub fn replace_lore_many<S: AsRef<str>>(&mut self, pairs: &[S]) -> &mut Self {
        if !is_paired(pairs) {
            trace!("replace_lore_many: odd replacement list, lore unchanged");
            return self;
        }
        self.edit_lore("replace_lore_many", |line| {
            replace_pairs(line, pairs).unwrap_or_default()
        })
    }

    /// Replaces every `target` in every lore line, then translates `&` codes.
    pub fn color_and_replace_lore(&mut self, target: &str, replacement: &str) -> &mut Self {
        self.edit_lore("color_and_replace_lore", |line| {
            colorize(&line.replace(target, replacement))
        })
    }

    /// Applies alternating target/replacement pairs to every lore line,
    /// translating `&` codes after each pair.
    ///
    /// Later pairs see the `§` codes produced by earlier ones. An empty pair
    /// list leaves the lore untouched.
    pub fn color_and_replace_lore_many<S: AsRef<str>>(&mut self, pairs: &[S]) -> &mut Self {
        if !is_paired(pairs) {
            trace!("color_and_replace_lore_many: odd replacement list, lore unchanged");
            return self;
        }
        self.edit_lore("color_and_replace_lore_many", |line| {
            pairs.chunks_exact(2).fold(line.to_string(), |acc, pair| {
                colorize(&acc.replace(pair[0].as_ref(), pair[1].as_ref()))
            })
        })
    }

    /// Returns true if `enchantment` is on the draft.
    pub fn has_enchant(&self, enchantment: Enchantment) -> bool {
        self.enchants.contains_key(&enchantment)
    }

    /// Returns the enchantments on the draft, in no particular order.
    pub fn enchantments(&self) -> Vec<Enchantment> {
        self.enchants.keys().copied().collect()
    }

    /// Level of `enchantment`, or 0 when it was never added.
    pub fn enchant_level(&self, enchantment: Enchantment) -> i32 {
        self.enchants.get(&enchantment).copied().unwrap_or(0)
    }

    /// Adds or overwrites an enchantment. Levels below 1 are stored as 1.
    ///
    /// Levels above the enchantment's normal maximum are kept as given.
    pub fn add_enchant(&mut self, enchantment: Enchantment, level: i32) -> &mut Self {
        if level < MIN_ENCHANT_LEVEL {
            trace!("{}: level {} raised to {}", enchantment, level, MIN_ENCHANT_LEVEL);
        }
        self.enchants.insert(enchantment, level.max(MIN_ENCHANT_LEVEL));
        self
    }

    /// Drops `enchantment` from the draft.
    pub fn remove_enchant(&mut self, enchantment: Enchantment) -> &mut Self {
        self.enchants.remove(&enchantment);
        self
    }

    /// Drops every enchantment.
    pub fn clear_enchants(&mut self) -> &mut Self {
        self.enchants.clear();
        self
    }

    /// Returns true if `flag` occurs at least once.
    pub fn has_flag(&self, flag: ItemFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Appends a flag. Adding the same flag twice keeps both entries.
    pub fn add_flag(&mut self, flag: ItemFlag) -> &mut Self {
        self.flags.push(flag);
        self
    }

    /// Appends each flag in order, duplicates included.
    pub fn add_flags(&mut self, flags: &[ItemFlag]) -> &mut Self {
        self.flags.extend_from_slice(flags);
        self
    }

    /// Removes the first occurrence of `flag`.
    pub fn remove_flag(&mut self, flag: ItemFlag) -> &mut Self {
        if let Some(index) = self.flags.iter().position(|f| *f == flag) {
            self.flags.remove(index);
        }
        self
    }

    /// Removes the first occurrence of each given flag.
    pub fn remove_flags(&mut self, flags: &[ItemFlag]) -> &mut Self {
        for &flag in flags {
            self.remove_flag(flag);
        }
        self
    }

    /// Drops every flag.
    pub fn clear_flags(&mut self) -> &mut Self {
        self.flags.clear();
        self
    }

    /// Returns a copy of the flag list, duplicates included.
    pub fn flags(&self) -> Vec<ItemFlag> {
        self.flags.clone()
    }

    /// Kind of item the draft builds.
    pub fn material(&self) -> Material {
        self.material
    }

    /// Changes the kind of item the draft builds.
    pub fn set_material(&mut self, material: Material) -> &mut Self {
        self.material = material;
        self
    }

    /// Sets the material from its canonical name, e.g. `GOLDEN_APPLE`.
    ///
    /// Names that do not resolve leave the current material in place.
    pub fn set_material_name(&mut self, name: &str) -> &mut Self {
        match name.parse::<Material>() {
            Ok(material) => self.material = material,
            Err(err) => trace!("{}; keeping {}", err, self.material),
        }
        self
    }

    /// Display name, if one is set.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Sets or clears the display name.
    pub fn set_display_name(&mut self, display_name: Option<String>) -> &mut Self {
        self.display_name = display_name;
        self
    }

    /// Lore lines, if set. An empty slice is distinct from `None`.
    pub fn lore(&self) -> Option<&[String]> {
        self.lore.as_deref()
    }

    /// Sets or clears the lore.
    pub fn set_lore(&mut self, lore: Option<Vec<String>>) -> &mut Self {
        self.lore = lore;
        self
    }

    /// Custom model data, 0 by default.
    pub fn custom_model_data(&self) -> i32 {
        self.custom_model_data
    }

    /// Sets the custom model data.
    pub fn set_custom_model_data(&mut self, custom_model_data: i32) -> &mut Self {
        self.custom_model_data = custom_model_data;
        self
    }

    /// Whether built items ignore durability.
    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    /// Sets whether built items ignore durability.
    pub fn set_unbreakable(&mut self, unbreakable: bool) -> &mut Self {
        self.unbreakable = unbreakable;
        self
    }

    /// Runs `edit` on the display name. `None` from `edit` keeps the old name.
    fn edit_display_name<F>(&mut self, operation: &str, edit: F) -> &mut Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let Some(name) = self.display_name.as_deref() else {
            trace!("{}: no display name set", operation);
            return self;
        };

        match edit(name) {
            Some(updated) => self.display_name = Some(updated),
            None => trace!("{}: odd replacement list, display name unchanged", operation),
        }
        self
    }

    /// Runs `edit` on each lore line; unset or empty lore is left alone.
    fn edit_lore<F>(&mut self, operation: &str, edit: F) -> &mut Self
    where
        F: Fn(&str) -> String,
    {
        match self.lore.as_mut() {
            Some(lore) if !lore.is_empty() => {
                for line in lore.iter_mut() {
                    *line = edit(line.as_str());
                }
            }
            _ => trace!("{}: lore unset or empty", operation),
        }
        self
    }
}

impl From<Material> for ItemBuilder {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}

impl From<ItemOptions> for ItemBuilder {
    fn from(options: ItemOptions) -> Self {
        Self::from_options(options)
    }
}

impl From<&ItemStack> for ItemBuilder {
    fn from(item: &ItemStack) -> Self {
        Self::from_item(item)
    }
}

fn is_paired<S>(pairs: &[S]) -> bool {
    pairs.len() % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemMeta;

    fn lore(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_new_builder_defaults() {
        let builder = ItemBuilder::new(Material::Stone);
        assert_eq!(builder.material(), Material::Stone);
        assert_eq!(builder.display_name(), None);
        assert_eq!(builder.lore(), None);
        assert_eq!(builder.custom_model_data(), 0);
        assert!(!builder.is_unbreakable());
        assert!(builder.enchantments().is_empty());
        assert!(builder.flags().is_empty());
    }

    #[test]
    fn test_named_with_and_without_color() {
        let plain = ItemBuilder::named(Material::Stone, "&cRed Stone", false);
        assert_eq!(plain.display_name(), Some("&cRed Stone"));

        let colored = ItemBuilder::named(Material::Stone, "&cRed Stone", true);
        assert_eq!(colored.display_name(), Some("§cRed Stone"));
        assert_eq!(colored.lore(), None);
    }

    #[test]
    fn test_with_lore_colors_both() {
        let builder = ItemBuilder::with_lore(
            Material::Book,
            "&9Tome",
            lore(&["&7first", "&8second"]),
            true,
        );
        assert_eq!(builder.display_name(), Some("§9Tome"));
        assert_eq!(builder.lore().unwrap(), &["§7first", "§8second"]);
    }

    #[test]
    fn test_empty_lore_is_not_unset() {
        let builder = ItemBuilder::with_lore(Material::Book, "Tome", Vec::new(), true);
        assert_eq!(builder.lore(), Some(&[][..]));
    }

    #[test]
    fn test_display_name_edits_without_name_are_noops() {
        let mut builder = ItemBuilder::new(Material::Dirt);
        builder
            .color_display_name()
            .replace_display_name("a", "b")
            .replace_display_name_many(&["a", "b"])
            .color_and_replace_display_name("a", "b")
            .color_and_replace_display_name_many(&["a", "b"]);
        assert_eq!(builder.display_name(), None);
    }

    #[test]
    fn test_replace_display_name() {
        let mut builder = ItemBuilder::named(Material::Diamond, "{owner}'s {item}", false);
        builder.replace_display_name("{owner}", "Alex");
        assert_eq!(builder.display_name(), Some("Alex's {item}"));

        builder.replace_display_name_many(&["{item}", "Gem", "Gem", "&bGem"]);
        assert_eq!(builder.display_name(), Some("Alex's &bGem"));
    }

    #[test]
    fn test_replace_display_name_odd_pairs() {
        let mut builder = ItemBuilder::named(Material::Diamond, "a b c", false);
        builder.replace_display_name_many(&["a", "b", "c"]);
        assert_eq!(builder.display_name(), Some("a b c"));

        builder.color_and_replace_display_name_many(&["a"]);
        assert_eq!(builder.display_name(), Some("a b c"));
    }

    #[test]
    fn test_color_and_replace_display_name() {
        let mut builder = ItemBuilder::named(Material::Diamond, "%c%Shiny", false);
        builder.color_and_replace_display_name("%c%", "&b");
        assert_eq!(builder.display_name(), Some("§bShiny"));

        let mut builder = ItemBuilder::named(Material::Diamond, "&l%n%", false);
        builder.color_and_replace_display_name_many(&["%n%", "&eGem"]);
        assert_eq!(builder.display_name(), Some("§l§eGem"));
    }

    #[test]
    fn test_lore_edits_without_lore_are_noops() {
        let mut builder = ItemBuilder::named(Material::Dirt, "Dirt", false);
        builder
            .color_lore()
            .replace_lore("x", "y")
            .replace_lore_many(&["x", "y"])
            .color_and_replace_lore("x", "y")
            .color_and_replace_lore_many(&["x", "y"]);
        assert_eq!(builder.lore(), None);

        builder.set_lore(Some(Vec::new())).replace_lore("x", "y");
        assert_eq!(builder.lore(), Some(&[][..]));
    }

    #[test]
    fn test_lore_edits_apply_to_every_line() {
        let mut builder = ItemBuilder::new(Material::Paper);
        builder.set_lore(Some(lore(&["&7HP: %hp%", "&7MP: %mp%", "%hp%/%mp%"])));

        builder.replace_lore("%hp%", "20");
        assert_eq!(builder.lore().unwrap(), &["&7HP: 20", "&7MP: %mp%", "20/%mp%"]);

        builder.replace_lore_many(&["%mp%", "5"]);
        assert_eq!(builder.lore().unwrap(), &["&7HP: 20", "&7MP: 5", "20/5"]);

        builder.color_lore();
        assert_eq!(builder.lore().unwrap(), &["§7HP: 20", "§7MP: 5", "20/5"]);
    }

    #[test]
    fn test_color_and_replace_lore() {
        let mut builder = ItemBuilder::new(Material::Paper);
        builder.set_lore(Some(lore(&["{c}one", "{c}two"])));
        builder.color_and_replace_lore("{c}", "&a");
        assert_eq!(builder.lore().unwrap(), &["§aone", "§atwo"]);

        builder.set_lore(Some(lore(&["{a} {b}"])));
        builder.color_and_replace_lore_many(&["{a}", "&cx", "{b}", "&dy"]);
        assert_eq!(builder.lore().unwrap(), &["§cx §dy"]);
    }

    #[test]
    fn test_color_and_replace_lore_empty_pairs_keep_lore() {
        let mut builder = ItemBuilder::new(Material::Paper);
        builder.set_lore(Some(lore(&["&7x"])));

        let none: [&str; 0] = [];
        builder.color_and_replace_lore_many(&none);
        assert_eq!(builder.lore().unwrap(), &["&7x"]);
    }

    #[test]
    fn test_color_and_replace_lore_colors_after_each_pair() {
        let mut builder = ItemBuilder::new(Material::Paper);
        builder.set_lore(Some(lore(&["Xc"])));

        // "&c" from the first pair becomes "§c" before the second pair runs.
        builder.color_and_replace_lore_many(&["X", "&", "§c", "!"]);
        assert_eq!(builder.lore().unwrap(), &["!"]);
    }

    #[test]
    fn test_color_and_replace_display_name_colors_once() {
        let mut builder = ItemBuilder::named(Material::Paper, "Xc", false);
        builder.color_and_replace_display_name_many(&["X", "&", "§c", "!"]);
        assert_eq!(builder.display_name(), Some("§c"));

        let none: [&str; 0] = [];
        let mut builder = ItemBuilder::named(Material::Paper, "&7x", false);
        builder.color_and_replace_display_name_many(&none);
        assert_eq!(builder.display_name(), Some("§7x"));
    }

    #[test]
    fn test_lore_odd_pairs_are_noops() {
        let mut builder = ItemBuilder::new(Material::Paper);
        builder.set_lore(Some(lore(&["&7keep"])));
        builder.replace_lore_many(&["keep", "drop", "extra"]);
        builder.color_and_replace_lore_many(&["keep"]);
        assert_eq!(builder.lore().unwrap(), &["&7keep"]);
    }

    #[test]
    fn test_enchant_operations() {
        let mut builder = ItemBuilder::new(Material::DiamondSword);
        assert_eq!(builder.enchant_level(Enchantment::Sharpness), 0);
        assert!(!builder.has_enchant(Enchantment::Sharpness));

        builder
            .add_enchant(Enchantment::Sharpness, 10)
            .add_enchant(Enchantment::Looting, 0)
            .add_enchant(Enchantment::Unbreaking, -4);
        assert_eq!(builder.enchant_level(Enchantment::Sharpness), 10);
        assert_eq!(builder.enchant_level(Enchantment::Looting), 1);
        assert_eq!(builder.enchant_level(Enchantment::Unbreaking), 1);
        assert_eq!(builder.enchantments().len(), 3);

        builder.add_enchant(Enchantment::Sharpness, 2);
        assert_eq!(builder.enchant_level(Enchantment::Sharpness), 2);

        builder.remove_enchant(Enchantment::Looting);
        assert!(!builder.has_enchant(Enchantment::Looting));

        builder.clear_enchants();
        assert!(builder.enchantments().is_empty());
    }

    #[test]
    fn test_flag_operations() {
        let mut builder = ItemBuilder::new(Material::Shield);
        builder.add_flag(ItemFlag::HideDye).add_flag(ItemFlag::HideDye);
        builder.remove_flag(ItemFlag::HideDye);
        assert_eq!(builder.flags(), vec![ItemFlag::HideDye]);

        builder.add_flags(&[ItemFlag::HideEnchants, ItemFlag::HideAttributes, ItemFlag::HideDye]);
        builder.remove_flags(&[ItemFlag::HideDye, ItemFlag::HideAttributes]);
        assert_eq!(builder.flags(), vec![ItemFlag::HideEnchants, ItemFlag::HideDye]);
        assert!(builder.has_flag(ItemFlag::HideEnchants));

        builder.remove_flag(ItemFlag::HideArmorTrim);
        assert_eq!(builder.flags().len(), 2);

        builder.clear_flags();
        assert!(!builder.has_flag(ItemFlag::HideEnchants));
    }

    #[test]
    fn test_flags_returns_copy() {
        let mut builder = ItemBuilder::new(Material::Shield);
        builder.add_flag(ItemFlag::HideDye);

        let mut copy = builder.flags();
        copy.clear();
        assert_eq!(builder.flags(), vec![ItemFlag::HideDye]);
    }

    #[test]
    fn test_set_material_name() {
        let mut builder = ItemBuilder::new(Material::Stone);
        builder.set_material_name("GOLDEN_APPLE");
        assert_eq!(builder.material(), Material::GoldenApple);

        builder.set_material_name("golden_apple").set_material_name("NOPE");
        assert_eq!(builder.material(), Material::GoldenApple);
    }

    #[test]
    fn test_build_copies_every_field() {
        let mut builder = ItemBuilder::with_lore(Material::Bow, "Longbow", lore(&["Old"]), false);
        builder
            .set_custom_model_data(1042)
            .set_unbreakable(true)
            .add_enchant(Enchantment::Power, 9)
            .add_flags(&[ItemFlag::HideEnchants, ItemFlag::HideEnchants]);

        let item = builder.build();
        let meta = item.item_meta().unwrap();
        assert_eq!(item.material(), Material::Bow);
        assert_eq!(item.amount(), 1);
        assert_eq!(meta.display_name(), Some("Longbow"));
        assert_eq!(meta.lore().unwrap(), &["Old"]);
        assert_eq!(meta.custom_model_data(), Some(1042));
        assert!(meta.is_unbreakable());
        assert_eq!(meta.enchant_level(Enchantment::Power), 9);
        assert_eq!(meta.item_flags().len(), 1);
    }

    #[test]
    fn test_build_amount_clamps() {
        let builder = ItemBuilder::new(Material::EnderPearl);
        assert_eq!(builder.build_amount(0).amount(), 1);
        assert_eq!(builder.build_amount(-3).amount(), 1);
        assert_eq!(builder.build_amount(7).amount(), 7);
        assert_eq!(builder.build_amount(16).amount(), 16);
        assert_eq!(builder.build_amount(64).amount(), 16);
    }

    #[test]
    fn test_build_does_not_mutate_draft() {
        let mut builder = ItemBuilder::named(Material::Apple, "Snack", false);
        builder.add_enchant(Enchantment::Mending, 1);
        let before = builder.clone();

        let first = builder.build();
        let second = builder.build();
        assert_eq!(builder, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_air_has_no_meta() {
        let builder = ItemBuilder::named(Material::Air, "ghost", false);
        let item = builder.build_amount(5);
        assert_eq!(item.amount(), 5);
        assert!(!item.has_item_meta());
    }

    #[test]
    fn test_from_item_literal_skips_present_meta() {
        let mut meta = ItemMeta::new();
        meta.set_display_name(Some("Named".to_string()));
        let mut item = ItemStack::new(Material::Emerald);
        item.set_item_meta(meta);

        let builder = ItemBuilder::from_item(&item);
        assert_eq!(builder.material(), Material::Emerald);
        assert_eq!(builder.display_name(), None);
    }

    #[test]
    fn test_from_item_literal_reads_bare_stack() {
        let builder = ItemBuilder::from_item(&ItemStack::new(Material::Chest));
        assert_eq!(builder, ItemBuilder::new(Material::Chest));
    }

    #[test]
    fn test_from_item_when_present_copies_meta() {
        let mut source = ItemBuilder::with_lore(Material::Trident, "Storm", lore(&["zap"]), false);
        source
            .set_custom_model_data(3)
            .set_unbreakable(true)
            .add_enchant(Enchantment::Channeling, 1)
            .add_flag(ItemFlag::HideUnbreakable);
        let item = source.build();

        let copy = ItemBuilder::from_item_with(&item, MetaCopy::WhenPresent);
        assert_eq!(copy, source);
    }

    #[test]
    fn test_from_item_when_present_clamps_low_levels() {
        let mut meta = ItemMeta::new();
        meta.add_enchant(Enchantment::Lure, 0, true);
        let mut item = ItemStack::new(Material::FishingRod);
        item.set_item_meta(meta);

        let copy = ItemBuilder::from_item_with(&item, MetaCopy::WhenPresent);
        assert_eq!(copy.enchant_level(Enchantment::Lure), 1);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ItemBuilder::from(Material::Egg), ItemBuilder::new(Material::Egg));

        let options = ItemOptions::new(Material::Egg).display_name("&eEgg").color(true);
        assert_eq!(ItemBuilder::from(options).display_name(), Some("§eEgg"));
    }
}
