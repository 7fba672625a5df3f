// ABOUTME: Fixed UI string table with per-locale text and key fallback
// ABOUTME: Key miss falls back to base language, then default locale, then the key itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

use crate::catalog::base_language;
use crate::constants::locale::DEFAULT_LOCALE;

/// UI string table: key → per-locale text
///
/// Presentation collaborators hold the full message catalogs; this table
/// carries only the strings the engine itself reports through.
const UI_STRINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "meal.breakfast",
        &[
            ("en-US", "Breakfast"),
            ("pt-BR", "Café da manhã"),
            ("es-ES", "Desayuno"),
        ],
    ),
    (
        "meal.lunch",
        &[("en-US", "Lunch"), ("pt-BR", "Almoço"), ("es-ES", "Almuerzo")],
    ),
    (
        "meal.dinner",
        &[("en-US", "Dinner"), ("pt-BR", "Jantar"), ("es-ES", "Cena")],
    ),
    (
        "meal.snack",
        &[("en-US", "Snack"), ("pt-BR", "Lanche"), ("es-ES", "Merienda")],
    ),
    (
        "meal.supper",
        &[("en-US", "Evening snack"), ("pt-BR", "Ceia"), ("es-ES", "Recena")],
    ),
    (
        "substitution.applied",
        &[
            ("en-US", "Ingredient adapted for your region"),
            ("pt-BR", "Ingrediente adaptado para sua região"),
            ("es-ES", "Ingrediente adaptado a tu región"),
        ],
    ),
    (
        "substitution.unavailable",
        &[
            ("en-US", "No local equivalent found"),
            ("pt-BR", "Nenhum equivalente local encontrado"),
            ("es-ES", "No se encontró equivalente local"),
        ],
    ),
    (
        "validation.forbidden_combination",
        &[
            ("en-US", "This combination is unusual in your region"),
            ("pt-BR", "Essa combinação não é comum na sua região"),
            ("es-ES", "Esta combinación no es habitual en tu región"),
        ],
    ),
    (
        "validation.missing_protein",
        &[
            ("en-US", "This meal is missing a protein source"),
            ("pt-BR", "Essa refeição está sem uma fonte de proteína"),
            ("es-ES", "A esta comida le falta una fuente de proteína"),
        ],
    ),
    (
        "allergen.blocked",
        &[
            ("en-US", "Contains an ingredient you cannot eat"),
            ("pt-BR", "Contém um ingrediente que você não pode comer"),
            ("es-ES", "Contiene un ingrediente que no puedes comer"),
        ],
    ),
];

/// Look up a UI string for a locale
///
/// Fallback order: exact locale, same base language, default locale, the key
/// itself. Never fails.
#[must_use]
pub fn lookup(key: &str, locale: &str) -> String {
    let Some((_, entries)) = UI_STRINGS.iter().find(|(k, _)| *k == key) else {
        return key.to_owned();
    };

    if let Some((_, text)) = entries.iter().find(|(code, _)| *code == locale) {
        return (*text).to_owned();
    }

    let base = base_language(locale);
    if let Some((_, text)) = entries.iter().find(|(code, _)| base_language(code) == base) {
        return (*text).to_owned();
    }

    entries
        .iter()
        .find(|(code, _)| *code == DEFAULT_LOCALE)
        .map_or_else(|| key.to_owned(), |(_, text)| (*text).to_owned())
}
