//! Shared case-conversion and inflection helpers.
//!
//! Word splitting and inflection go through `Inflector`. Digits stay attached
//! to the word before them (`Post2Item` -> `post2_item`), and a handful of
//! irregular nouns the inflector rules mangle are resolved from a fixed table.

use inflector::Inflector;

/// Irregular nouns as `(singular, plural)`, matched on the last word only.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("louse", "lice"),
    ("mouse", "mice"),
    ("person", "people"),
];

/// Convert a string to PascalCase (e.g., "user_profile" -> "UserProfile")
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s).split('_').map(capitalize).collect()
}

/// Convert a string to snake_case (e.g., "UserProfile" -> "user_profile")
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.to_snake_case().split('_') {
        let digit_led = word.starts_with(|c: char| c.is_ascii_digit());
        if !out.is_empty() && !digit_led {
            out.push('_');
        }
        out.push_str(word);
    }
    out
}

/// Convert a string to camelCase (e.g., "user_profile" -> "userProfile")
pub fn to_camel_case(s: &str) -> String {
    let snake = to_snake_case(s);
    let mut words = snake.split('_');
    let first = words.next().unwrap_or_default().to_string();
    words.fold(first, |mut out, word| {
        out.push_str(&capitalize(word));
        out
    })
}

/// Pluralize the last word of a snake_case string (e.g., "blog_post" -> "blog_posts")
pub fn pluralize(s: &str) -> String {
    inflect_last_word(s, |word| {
        IRREGULAR
            .iter()
            .find(|(singular, plural)| word == *singular || word == *plural)
            .map(|(_, plural)| plural.to_string())
            .unwrap_or_else(|| word.to_plural())
    })
}

/// Singularize the last word of a snake_case string (e.g., "categories" -> "category")
pub fn singularize(s: &str) -> String {
    inflect_last_word(s, |word| {
        IRREGULAR
            .iter()
            .find(|(singular, plural)| word == *singular || word == *plural)
            .map(|(singular, _)| singular.to_string())
            .unwrap_or_else(|| word.to_singular())
    })
}

fn inflect_last_word(s: &str, inflect: impl Fn(&str) -> String) -> String {
    match s.rsplit_once('_') {
        Some((head, last)) => format!("{}_{}", head, inflect(last)),
        None => inflect(s),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
