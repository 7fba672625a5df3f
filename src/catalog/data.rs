// ABOUTME: Compiled-in seed data for the universal ingredient catalog
// ABOUTME: Ids, macros per portion, availability, allergen declarations, and translations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! Universal ingredient seed data
//!
//! Authored in the catalog administration tool and exported here as a
//! compiled-in snapshot. Macro values are per the default portion.

use crate::cultural::rules::derive_protein_tags;
use crate::models::{
    AllergenMode, Ingredient, IngredientCategory, MacroNutrients, Translation,
};
use std::collections::HashMap;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    category: IngredientCategory,
    macros: MacroNutrients,
    portion_grams: f64,
    available_in: &[&str],
    regional: bool,
    allergens: AllergenMode,
    names: &[(&str, &str)],
) -> Ingredient {
    let translations: HashMap<String, Translation> = names
        .iter()
        .map(|(locale, name)| ((*locale).to_owned(), Translation::name_only(*name)))
        .collect();
    Ingredient {
        protein_tags: derive_protein_tags(id),
        id: id.to_owned(),
        category,
        macros,
        portion_grams,
        available_in: available_in.iter().map(|&c| c.to_owned()).collect(),
        regional,
        allergens,
        translations,
    }
}

fn fixed(allergens: &[&str]) -> AllergenMode {
    AllergenMode::Static {
        allergens: allergens.iter().map(|&a| a.to_owned()).collect(),
    }
}

fn dynamic(static_floor: &[&str]) -> AllergenMode {
    AllergenMode::Dynamic {
        static_floor: static_floor.iter().map(|&a| a.to_owned()).collect(),
    }
}

/// The universal ingredient table
#[must_use]
pub fn universal_ingredients() -> Vec<Ingredient> {
    vec![
        entry(
            "black_coffee",
            IngredientCategory::Beverage,
            MacroNutrients::new(2.0, 0.3, 0.0, 0.0, 0.0),
            200.0,
            &[],
            false,
            fixed(&[]),
            &[
                ("en-US", "Black coffee"),
                ("pt-BR", "Café preto"),
                ("es-ES", "Café solo"),
            ],
        ),
        entry(
            "white_rice",
            IngredientCategory::Grain,
            MacroNutrients::new(130.0, 2.7, 28.0, 0.3, 0.4),
            100.0,
            &[],
            false,
            fixed(&[]),
            &[
                ("en-US", "White rice"),
                ("pt-BR", "Arroz branco"),
                ("es-ES", "Arroz blanco"),
            ],
        ),
        entry(
            "black_beans",
            IngredientCategory::Legume,
            MacroNutrients::new(132.0, 8.9, 23.7, 0.5, 8.7),
            100.0,
            &[],
            false,
            fixed(&[]),
            &[
                ("en-US", "Black beans"),
                ("pt-BR", "Feijão preto"),
                ("es-ES", "Frijoles negros"),
            ],
        ),
        entry(
            "eggs",
            IngredientCategory::Protein,
            MacroNutrients::new(155.0, 13.0, 1.1, 11.0, 0.0),
            100.0,
            &[],
            false,
            fixed(&["eggs"]),
            &[("en-US", "Eggs"), ("pt-BR", "Ovos"), ("es-ES", "Huevos")],
        ),
        entry(
            "chicken_breast",
            IngredientCategory::Protein,
            MacroNutrients::new(165.0, 31.0, 0.0, 3.6, 0.0),
            100.0,
            &[],
            false,
            fixed(&[]),
            &[
                ("en-US", "Chicken breast"),
                ("pt-BR", "Peito de frango"),
                ("es-ES", "Pechuga de pollo"),
            ],
        ),
        entry(
            "salmon",
            IngredientCategory::Protein,
            MacroNutrients::new(208.0, 20.0, 0.0, 13.0, 0.0),
            100.0,
            &[],
            false,
            fixed(&["fish"]),
            &[("en-US", "Salmon"), ("pt-BR", "Salmão"), ("es-ES", "Salmón")],
        ),
        entry(
            "banana",
            IngredientCategory::Fruit,
            MacroNutrients::new(89.0, 1.1, 23.0, 0.3, 2.6),
            118.0,
            &[],
            false,
            fixed(&[]),
            &[("en-US", "Banana"), ("pt-BR", "Banana"), ("es-ES", "Plátano")],
        ),
        entry(
            "blueberries",
            IngredientCategory::Fruit,
            MacroNutrients::new(57.0, 0.7, 14.5, 0.3, 2.4),
            100.0,
            &[],
            false,
            fixed(&[]),
            &[
                ("en-US", "Blueberries"),
                ("pt-BR", "Mirtilos"),
                ("es-ES", "Arándanos"),
            ],
        ),
        entry(
            "tomato",
            IngredientCategory::Vegetable,
            MacroNutrients::new(18.0, 0.9, 3.9, 0.2, 1.2),
            123.0,
            &[],
            false,
            fixed(&[]),
            &[("en-US", "Tomato"), ("pt-BR", "Tomate"), ("es-ES", "Tomate")],
        ),
        entry(
            "olive_oil",
            IngredientCategory::Fat,
            MacroNutrients::new(119.0, 0.0, 0.0, 13.5, 0.0),
            13.5,
            &[],
            false,
            fixed(&[]),
            &[
                ("en-US", "Olive oil"),
                ("pt-BR", "Azeite de oliva"),
                ("es-ES", "Aceite de oliva"),
            ],
        ),
        // Oats are gluten-free by composition but routinely cross-contaminated;
        // the current tags come from the safety source, floored at gluten.
        entry(
            "oats",
            IngredientCategory::Grain,
            MacroNutrients::new(389.0, 16.9, 66.0, 6.9, 10.6),
            40.0,
            &[],
            false,
            dynamic(&["gluten"]),
            &[("en-US", "Oats"), ("pt-BR", "Aveia"), ("es-ES", "Avena")],
        ),
        entry(
            "milk",
            IngredientCategory::Dairy,
            MacroNutrients::new(42.0, 3.4, 5.0, 1.0, 0.0),
            200.0,
            &[],
            false,
            fixed(&["dairy", "lactose"]),
            &[("en-US", "Milk"), ("pt-BR", "Leite"), ("es-ES", "Leche")],
        ),
        entry(
            "honey",
            IngredientCategory::Condiment,
            MacroNutrients::new(304.0, 0.3, 82.0, 0.0, 0.2),
            21.0,
            &[],
            false,
            fixed(&[]),
            &[("en-US", "Honey"), ("pt-BR", "Mel"), ("es-ES", "Miel")],
        ),
        entry(
            "soy_sauce",
            IngredientCategory::Condiment,
            MacroNutrients::new(53.0, 8.0, 4.9, 0.6, 0.8),
            18.0,
            &[],
            false,
            fixed(&["soy", "gluten"]),
            &[
                ("en-US", "Soy sauce"),
                ("pt-BR", "Molho de soja"),
                ("ja-JP", "醤油"),
            ],
        ),
        entry(
            "lentils",
            IngredientCategory::Legume,
            MacroNutrients::new(116.0, 9.0, 20.0, 0.4, 7.9),
            100.0,
            &[],
            false,
            fixed(&[]),
            &[
                ("en-US", "Lentils"),
                ("pt-BR", "Lentilhas"),
                ("es-ES", "Lentejas"),
            ],
        ),
        entry(
            "whole_grain_bread",
            IngredientCategory::Bakery,
            MacroNutrients::new(247.0, 13.0, 41.0, 3.4, 7.0),
            50.0,
            &[],
            false,
            dynamic(&["gluten"]),
            &[
                ("en-US", "Whole grain bread"),
                ("pt-BR", "Pão integral"),
                ("es-ES", "Pan integral"),
            ],
        ),
        // Not stocked everywhere; the availability set narrows it down.
        entry(
            "plantain",
            IngredientCategory::Fruit,
            MacroNutrients::new(122.0, 1.3, 31.9, 0.4, 2.3),
            179.0,
            &["BR", "MX", "US"],
            true,
            fixed(&[]),
            &[
                ("en-US", "Plantain"),
                ("pt-BR", "Banana-da-terra"),
                ("es-MX", "Plátano macho"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let ingredients = universal_ingredients();
        let mut ids: Vec<_> = ingredients.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn test_every_entry_has_default_locale_translation() {
        for ingredient in universal_ingredients() {
            assert!(
                ingredient.translations.contains_key("en-US"),
                "{} missing fallback translation",
                ingredient.id
            );
        }
    }

    #[test]
    fn test_protein_tags_derived_at_load() {
        let ingredients = universal_ingredients();
        let chicken = ingredients
            .iter()
            .find(|i| i.id == "chicken_breast")
            .unwrap();
        assert!(chicken.protein_tags.is_poultry);
        assert!(chicken.protein_tags.is_protein_source);
    }
}
