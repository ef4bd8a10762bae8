//! Naming engine: every name form a model needs across the generated artifacts.

use autocrud_core::{pluralize, to_camel_case, to_pascal_case, to_snake_case};
use serde::Serialize;

use crate::{Error, Result};

/// Words PHP reserves as class names (compared case-insensitively).
const PHP_RESERVED: &[&str] = &[
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "false", "final", "finally", "float", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "instanceof", "insteadof", "int",
    "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never", "new",
    "null", "object", "or", "parent", "print", "private", "protected", "public", "readonly",
    "require", "return", "self", "static", "string", "switch", "throw", "trait", "true", "try",
    "unset", "use", "var", "void", "while", "xor", "yield",
];

/// All name forms derived from a model name.
///
/// For `UserProfile`:
///
/// | field             | value            |
/// |-------------------|------------------|
/// | `model`           | `UserProfile`    |
/// | `model_plural`    | `UserProfiles`   |
/// | `snake`           | `user_profile`   |
/// | `snake_plural`    | `user_profiles`  |
/// | `variable`        | `userProfile`    |
/// | `variable_plural` | `userProfiles`   |
/// | `route`           | `user-profiles`  |
/// | `table`           | `user_profiles`  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSet {
    pub model: String,
    pub model_plural: String,
    pub snake: String,
    pub snake_plural: String,
    pub variable: String,
    pub variable_plural: String,
    pub route: String,
    pub table: String,
}

impl NameSet {
    /// `StorePostRequest`
    pub fn store_request(&self) -> String {
        format!("Store{}Request", self.model)
    }

    /// `UpdatePostRequest`
    pub fn update_request(&self) -> String {
        format!("Update{}Request", self.model)
    }

    /// `PostResource`
    pub fn resource(&self) -> String {
        format!("{}Resource", self.model)
    }

    /// `PostService`
    pub fn service(&self) -> String {
        format!("{}Service", self.model)
    }

    /// `postService`, the controller property holding the service
    pub fn service_property(&self) -> String {
        format!("{}Service", self.variable)
    }

    /// `PostController`
    pub fn controller(&self) -> String {
        format!("{}Controller", self.model)
    }
}

/// Derive the [`NameSet`] for a model name.
///
/// Accepts PascalCase (`BlogPost`) or snake_case (`blog_post`) input; both
/// yield the same names. Every form is built from one word split, and digits
/// stay with the word before them (`Post2` -> `post2s`, `V2Post` -> `v2-posts`).
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if the name is empty, contains characters
/// other than ASCII letters, digits and underscores, does not start with a
/// letter, or is a PHP reserved word.
pub fn derive_names(model: &str) -> Result<NameSet> {
    if let Some(reason) = invalid_reason(model) {
        return Err(Error::invalid_name(model, reason));
    }

    let snake = to_snake_case(model);
    let pascal = to_pascal_case(&snake);
    if snake.is_empty() || to_snake_case(&pascal) != snake {
        return Err(Error::invalid_name(
            model,
            "name does not survive case conversion",
        ));
    }

    if PHP_RESERVED.contains(&snake.as_str()) {
        return Err(Error::invalid_name(model, "name is a PHP reserved word"));
    }

    let snake_plural = pluralize(&snake);

    Ok(NameSet {
        model: pascal,
        model_plural: to_pascal_case(&snake_plural),
        variable: to_camel_case(&snake),
        variable_plural: to_camel_case(&snake_plural),
        route: snake_plural.replace('_', "-"),
        table: snake_plural.clone(),
        snake_plural,
        snake,
    })
}

/// Table name of a model, e.g. `user` -> `users`.
pub fn table_name(model: &str) -> String {
    pluralize(&to_snake_case(model))
}

fn invalid_reason(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !c.is_ascii_alphabetic() => return Some("name must start with a letter"),
        Some(_) => {}
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name may only contain letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_model() {
        let names = derive_names("Post").unwrap();
        assert_eq!(names.model, "Post");
        assert_eq!(names.model_plural, "Posts");
        assert_eq!(names.snake, "post");
        assert_eq!(names.snake_plural, "posts");
        assert_eq!(names.variable, "post");
        assert_eq!(names.variable_plural, "posts");
        assert_eq!(names.route, "posts");
        assert_eq!(names.table, "posts");
    }

    #[test]
    fn test_compound_model() {
        let names = derive_names("UserProfile").unwrap();
        assert_eq!(names.model, "UserProfile");
        assert_eq!(names.model_plural, "UserProfiles");
        assert_eq!(names.variable, "userProfile");
        assert_eq!(names.variable_plural, "userProfiles");
        assert_eq!(names.route, "user-profiles");
        assert_eq!(names.table, "user_profiles");
    }

    #[test]
    fn test_irregular_suffix() {
        let names = derive_names("Category").unwrap();
        assert_eq!(names.table, "categories");
        assert_eq!(names.model_plural, "Categories");
    }

    #[test]
    fn test_irregular_plural_model() {
        let names = derive_names("Person").unwrap();
        assert_eq!(names.table, "people");
        assert_eq!(names.model_plural, "People");
        assert_eq!(names.variable_plural, "people");
        assert_eq!(names.route, "people");

        let names = derive_names("SalesPerson").unwrap();
        assert_eq!(names.table, "sales_people");
        assert_eq!(names.variable_plural, "salesPeople");
        assert_eq!(names.route, "sales-people");

        assert_eq!(derive_names("Mouse").unwrap().table, "mice");
    }

    #[test]
    fn test_digits_share_one_word_split() {
        let names = derive_names("Post2").unwrap();
        assert_eq!(names.model, "Post2");
        assert_eq!(names.table, "post2s");
        assert_eq!(names.variable, "post2");
        assert_eq!(names.route, "post2s");
        assert_eq!(names.model_plural, "Post2s");

        let names = derive_names("V2Post").unwrap();
        assert_eq!(names.model, "V2Post");
        assert_eq!(names.table, "v2_posts");
        assert_eq!(names.variable, "v2Post");
        assert_eq!(names.route, "v2-posts");
    }

    #[test]
    fn test_route_follows_table_words() {
        for model in ["Post", "BlogPost", "Post2Item", "SalesPerson", "HTTPRequest"] {
            let names = derive_names(model).unwrap();
            assert_eq!(names.route, names.table.replace('_', "-"), "{model}");
        }
    }

    #[test]
    fn test_snake_input_matches_pascal_input() {
        assert_eq!(
            derive_names("blog_post").unwrap(),
            derive_names("BlogPost").unwrap()
        );
    }

    #[test]
    fn test_class_names() {
        let names = derive_names("Post").unwrap();
        assert_eq!(names.store_request(), "StorePostRequest");
        assert_eq!(names.update_request(), "UpdatePostRequest");
        assert_eq!(names.resource(), "PostResource");
        assert_eq!(names.service(), "PostService");
        assert_eq!(names.service_property(), "postService");
        assert_eq!(names.controller(), "PostController");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            derive_names("UserProfile").unwrap(),
            derive_names("UserProfile").unwrap()
        );
    }

    #[test]
    fn test_empty_name() {
        let err = derive_names("").unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_invalid_characters() {
        for name in ["Post-Item", "Post Item", "Póst", "9Lives", "_Post", "App\\Post"] {
            let err = derive_names(name).unwrap_err();
            assert!(
                matches!(err, Error::InvalidName { .. }),
                "expected invalid name for {name:?}"
            );
        }
    }

    #[test]
    fn test_reserved_word() {
        let err = derive_names("List").unwrap_err();
        match err {
            Error::InvalidName { reason, .. } => assert!(reason.contains("reserved")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_table_name() {
        assert_eq!(table_name("user"), "users");
        assert_eq!(table_name("BlogPost"), "blog_posts");
        assert_eq!(table_name("Person"), "people");
    }
}
