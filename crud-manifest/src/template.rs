//! Starter files written by `crud init`.

/// Default crud.toml, spelling out every setting with its default value.
pub const DEFAULT_CONFIG: &str = r#"[namespaces]
models = "App\\Models"
requests = "App\\Http\\Requests"
resources = "App\\Http\\Resources"
services = "App\\Services"
controllers = "App\\Http\\Controllers"

[paths]
requests = "app/Http/Requests"
resources = "app/Http/Resources"
services = "app/Services"
controllers = "app/Http/Controllers"
routes = "routes/api"

[controller]
base = "App\\Http\\Controllers\\Controller"

[resource]
hide_internal = false

[schema]
path = "schema.toml"

[output]
overwrite = "if-missing"
"#;

/// Example schema.toml describing a single `posts` table.
pub const EXAMPLE_SCHEMA: &str = r#"# Columns of each table, in declaration order.
# A column is either a bare name or { name = "...", type = "..." }.

[tables.posts]
columns = [
    "id",
    "title",
    "body",
    { name = "published", type = "boolean" },
    "user_id",
    "created_at",
    "updated_at",
]
"#;
