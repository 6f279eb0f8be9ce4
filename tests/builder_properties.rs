//! Property tests for the builder's clamping and no-op rules.

use itembuilder::{Enchantment, ItemBuilder, ItemFlag, Material};
use proptest::prelude::*;

fn any_material() -> impl Strategy<Value = Material> {
    proptest::sample::select(Material::ALL)
}

fn any_enchantment() -> impl Strategy<Value = Enchantment> {
    proptest::sample::select(Enchantment::ALL)
}

fn any_flag() -> impl Strategy<Value = ItemFlag> {
    proptest::sample::select(ItemFlag::ALL)
}

proptest! {
    #[test]
    fn build_amount_is_clamped(material in any_material(), amount in any::<i32>()) {
        let item = ItemBuilder::new(material).build_amount(amount);
        let max = material.max_stack_size();

        if amount <= 1 {
            prop_assert_eq!(item.amount(), 1);
        } else if amount > max {
            prop_assert_eq!(item.amount(), max);
        } else {
            prop_assert_eq!(item.amount(), amount);
        }
    }

    #[test]
    fn build_defaults_to_one_and_leaves_draft_alone(
        material in any_material(),
        name in proptest::option::of(".{0,24}"),
        level in -5i32..300,
    ) {
        let mut builder = ItemBuilder::new(material);
        builder.set_display_name(name).add_enchant(Enchantment::Unbreaking, level);
        let before = builder.clone();

        let first = builder.build();
        let second = builder.build();

        prop_assert_eq!(first.amount(), 1);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&builder, &before);
    }

    #[test]
    fn stored_enchant_levels_are_at_least_one(
        enchantment in any_enchantment(),
        level in any::<i32>(),
    ) {
        let mut builder = ItemBuilder::new(Material::EnchantedBook);
        builder.add_enchant(enchantment, level);

        prop_assert_eq!(builder.enchant_level(enchantment), level.max(1));
    }

    #[test]
    fn odd_replacement_lists_change_nothing(
        name in ".{0,24}",
        lore in proptest::collection::vec(".{0,16}", 0..4),
        pairs in proptest::collection::vec("[a-z&]{0,3}", 0..4).prop_map(|mut v| {
            if v.len() % 2 == 0 {
                v.push("x".to_string());
            }
            v
        }),
    ) {
        let mut builder = ItemBuilder::new(Material::Paper);
        builder.set_display_name(Some(name)).set_lore(Some(lore));
        let before = builder.clone();

        builder
            .replace_display_name_many(&pairs)
            .color_and_replace_display_name_many(&pairs)
            .replace_lore_many(&pairs)
            .color_and_replace_lore_many(&pairs);

        prop_assert_eq!(builder, before);
    }

    #[test]
    fn removing_a_flag_drops_one_occurrence(flag in any_flag(), copies in 1usize..5) {
        let mut builder = ItemBuilder::new(Material::Shield);
        for _ in 0..copies {
            builder.add_flag(flag);
        }
        builder.remove_flag(flag);

        prop_assert_eq!(builder.flags().iter().filter(|f| **f == flag).count(), copies - 1);
    }

    #[test]
    fn unresolved_material_names_are_ignored(name in "[a-z ]{1,12}") {
        let mut builder = ItemBuilder::new(Material::Dirt);
        builder.set_material_name(&name);

        prop_assert_eq!(builder.material(), Material::Dirt);
    }
}
