// ABOUTME: Compiled-in seed data for country-specific ingredients and substitution maps
// ABOUTME: BR, US, and JP records; one map entry is intentionally dangling to mirror production data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! Country-specific ingredient seed data
//!
//! Snapshot of the externally authored substitution tables. The `requeijao`
//! → `ES` entry references an id that resolves nowhere; that defect exists in
//! the production tables and the engine must pass it through rather than
//! crash, so it is kept here on purpose.

use crate::cultural::rules::derive_protein_tags;
use crate::models::{
    AllergenMode, CountrySpecificIngredient, Ingredient, IngredientCategory, MacroNutrients,
    Translation,
};
use std::collections::HashMap;

#[allow(clippy::too_many_arguments)]
fn record(
    country: &str,
    id: &str,
    category: IngredientCategory,
    macros: MacroNutrients,
    portion_grams: f64,
    regional: bool,
    allergens: AllergenMode,
    names: &[(&str, &str)],
    substitutions: &[(&str, &str)],
) -> CountrySpecificIngredient {
    let translations: HashMap<String, Translation> = names
        .iter()
        .map(|(locale, name)| ((*locale).to_owned(), Translation::name_only(*name)))
        .collect();
    CountrySpecificIngredient {
        ingredient: Ingredient {
            protein_tags: derive_protein_tags(id),
            id: id.to_owned(),
            category,
            macros,
            portion_grams,
            available_in: vec![country.to_owned()],
            regional,
            allergens,
            translations,
        },
        country: country.to_owned(),
        substitutions: substitutions
            .iter()
            .map(|(target, sub)| ((*target).to_owned(), (*sub).to_owned()))
            .collect(),
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

/// The country-specific ingredient table
#[must_use]
pub fn country_ingredients() -> Vec<CountrySpecificIngredient> {
    vec![
        // ── Brazil ─────────────────────────────────────────────────────
        record(
            "BR",
            "requeijao",
            IngredientCategory::Dairy,
            MacroNutrients::new(257.0, 11.0, 3.0, 22.0, 0.0),
            30.0,
            true,
            fixed(&["dairy", "lactose"]),
            &[("pt-BR", "Requeijão"), ("en-US", "Requeijão cream spread")],
            // "queso_fresco" resolves nowhere: tolerated dangling reference
            &[("US", "cream_cheese"), ("ES", "queso_fresco")],
        ),
        record(
            "BR",
            "farofa",
            IngredientCategory::Grain,
            MacroNutrients::new(365.0, 2.0, 44.0, 19.0, 4.0),
            30.0,
            true,
            fixed(&[]),
            &[("pt-BR", "Farofa"), ("en-US", "Toasted cassava flour")],
            &[("US", "breadcrumbs")],
        ),
        record(
            "BR",
            "pao_de_queijo",
            IngredientCategory::Bakery,
            MacroNutrients::new(300.0, 5.0, 34.0, 15.0, 1.0),
            50.0,
            true,
            fixed(&["dairy", "eggs"]),
            &[("pt-BR", "Pão de queijo"), ("en-US", "Brazilian cheese bread")],
            &[],
        ),
        record(
            "BR",
            "acai",
            IngredientCategory::Fruit,
            MacroNutrients::new(70.0, 1.0, 4.0, 5.0, 2.0),
            100.0,
            true,
            fixed(&[]),
            &[("pt-BR", "Açaí"), ("en-US", "Açaí pulp")],
            &[("US", "blueberries")],
        ),
        record(
            "BR",
            "feijao",
            IngredientCategory::Legume,
            MacroNutrients::new(127.0, 8.5, 22.8, 0.5, 8.3),
            100.0,
            false,
            fixed(&[]),
            &[("pt-BR", "Feijão carioca"), ("en-US", "Carioca beans")],
            &[("US", "black_beans")],
        ),
        record(
            "BR",
            "arroz",
            IngredientCategory::Grain,
            MacroNutrients::new(128.0, 2.5, 28.1, 0.2, 1.6),
            100.0,
            false,
            fixed(&[]),
            &[("pt-BR", "Arroz"), ("en-US", "Brazilian-style rice")],
            &[("US", "white_rice")],
        ),
        record(
            "BR",
            "pasta_de_amendoim",
            IngredientCategory::Condiment,
            MacroNutrients::new(588.0, 25.0, 20.0, 50.0, 6.0),
            32.0,
            false,
            fixed(&["peanuts"]),
            &[("pt-BR", "Pasta de amendoim"), ("en-US", "Peanut paste")],
            &[("US", "peanut_butter")],
        ),
        // ── United States ──────────────────────────────────────────────
        record(
            "US",
            "cream_cheese",
            IngredientCategory::Dairy,
            MacroNutrients::new(342.0, 6.0, 4.1, 34.0, 0.0),
            30.0,
            false,
            fixed(&["dairy", "lactose"]),
            &[("en-US", "Cream cheese"), ("pt-BR", "Cream cheese")],
            &[("BR", "requeijao")],
        ),
        record(
            "US",
            "breadcrumbs",
            IngredientCategory::Bakery,
            MacroNutrients::new(395.0, 13.0, 72.0, 5.0, 4.5),
            30.0,
            false,
            dynamic(&["gluten"]),
            &[("en-US", "Breadcrumbs"), ("pt-BR", "Farinha de rosca")],
            &[("BR", "farofa")],
        ),
        record(
            "US",
            "peanut_butter",
            IngredientCategory::Condiment,
            MacroNutrients::new(588.0, 25.0, 20.0, 50.0, 6.0),
            32.0,
            false,
            fixed(&["peanuts"]),
            &[("en-US", "Peanut butter"), ("pt-BR", "Manteiga de amendoim")],
            &[("BR", "pasta_de_amendoim")],
        ),
        record(
            "US",
            "maple_syrup",
            IngredientCategory::Condiment,
            MacroNutrients::new(260.0, 0.0, 67.0, 0.1, 0.0),
            20.0,
            true,
            fixed(&[]),
            &[("en-US", "Maple syrup"), ("pt-BR", "Xarope de bordo")],
            &[("BR", "honey")],
        ),
        // ── Japan ──────────────────────────────────────────────────────
        record(
            "JP",
            "miso_paste",
            IngredientCategory::Condiment,
            MacroNutrients::new(199.0, 12.0, 26.0, 6.0, 5.4),
            18.0,
            true,
            fixed(&["soy"]),
            &[("ja-JP", "味噌"), ("en-US", "Miso paste")],
            &[("US", "soy_sauce")],
        ),
        record(
            "JP",
            "natto",
            IngredientCategory::Legume,
            MacroNutrients::new(212.0, 18.0, 14.0, 11.0, 5.4),
            50.0,
            true,
            dynamic(&["soy"]),
            &[("ja-JP", "納豆"), ("en-US", "Nattō fermented soybeans")],
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_scoped_to_their_country() {
        for record in country_ingredients() {
            assert_eq!(record.ingredient.available_in, vec![record.country.clone()]);
        }
    }

    #[test]
    fn test_every_record_has_default_locale_name() {
        for record in country_ingredients() {
            assert!(
                record.ingredient.translations.contains_key("en-US"),
                "{} missing fallback translation",
                record.ingredient.id
            );
        }
    }
}
