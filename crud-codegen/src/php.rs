//! Structured PHP file generation.
//!
//! Provides a small AST for the PHP files emitted by the generators: a file
//! with an optional namespace and imports, classes, and methods. Rendering
//! follows PSR-12 layout.

use crate::builder::CodeBuilder;

/// Quote a value as a single-quoted PHP string literal.
pub fn php_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Whether `name` is a valid PHP label (variable, property or class name).
pub fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b == b'_' || b.is_ascii_alphabetic() || b >= 0x80 => {}
        _ => return false,
    }
    bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric() || b >= 0x80)
}

/// Read a property of `$this`, braced when the name is not a plain label
/// (`$this->title`, `$this->{'first name'}`).
pub fn this_property(name: &str) -> String {
    if is_identifier(name) {
        format!("$this->{}", name)
    } else {
        format!("$this->{{{}}}", php_string(name))
    }
}

/// The unqualified name of a fully qualified class (`App\Models\Post` -> `Post`).
pub fn short_name(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

/// The namespace part of a fully qualified class (`App\Models\Post` -> `App\Models`).
fn namespace_of(class: &str) -> &str {
    class.rsplit_once('\\').map(|(ns, _)| ns).unwrap_or("")
}

/// Join a namespace and a class name.
pub fn qualify(namespace: &str, class: &str) -> String {
    if namespace.is_empty() {
        class.to_string()
    } else {
        format!("{}\\{}", namespace, class)
    }
}

/// Import table for one PHP file.
///
/// Hands out the name each class is referenced by. The first class to claim
/// a short name keeps it; later classes with the same short name (compared
/// case-insensitively, as PHP does) are imported under an alias built from
/// their parent namespace segment, or `Base` for classes in the file's own
/// namespace.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    namespace: String,
    taken: Vec<String>,
    entries: Vec<Import>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Import {
    class: String,
    alias: Option<String>,
}

impl Imports {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Reserve the name of a class declared in the file itself.
    pub fn declare(&mut self, name: &str) {
        self.taken.push(name.to_ascii_lowercase());
    }

    /// Import `class` and return the name to reference it by.
    pub fn add(&mut self, class: &str) -> String {
        if let Some(existing) = self.entries.iter().find(|e| e.class == class) {
            return existing
                .alias
                .clone()
                .unwrap_or_else(|| short_name(class).to_string());
        }

        let short = short_name(class);
        let local = namespace_of(class) == self.namespace;

        if !self.is_taken(short) {
            self.taken.push(short.to_ascii_lowercase());
            if !local {
                self.entries.push(Import {
                    class: class.to_string(),
                    alias: None,
                });
            }
            return short.to_string();
        }

        let parent = short_name(namespace_of(class));
        let prefix = if local || parent.is_empty() {
            "Base"
        } else {
            parent
        };
        let mut alias = format!("{}{}", prefix, short);
        while self.is_taken(&alias) {
            alias.insert_str(0, prefix);
        }

        self.taken.push(alias.to_ascii_lowercase());
        self.entries.push(Import {
            class: class.to_string(),
            alias: Some(alias.clone()),
        });
        alias
    }

    fn is_taken(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.taken.contains(&name)
    }
}

/// A method parameter such as `StorePostRequest $request`.
#[derive(Debug, Clone)]
pub struct Param {
    ty: Option<String>,
    name: String,
    modifier: Option<&'static str>,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            name: name.into(),
            modifier: None,
        }
    }

    /// Promote the parameter to a property (`protected Foo $foo`).
    pub fn promoted(mut self, visibility: &'static str) -> Self {
        self.modifier = Some(visibility);
        self
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(modifier) = self.modifier {
            out.push_str(modifier);
            out.push(' ');
        }
        if let Some(ty) = &self.ty {
            out.push_str(ty);
            out.push(' ');
        }
        out.push('$');
        out.push_str(&self.name);
        out
    }
}

/// A public class method.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
    params: Vec<Param>,
    returns: Option<String>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    /// Attach a one-line docblock.
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Append a body line; an empty string produces a blank line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Append several body lines.
    pub fn body_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(Param::render).collect();
        let mut sig = format!("public function {}({})", self.name, params.join(", "));
        if let Some(returns) = &self.returns {
            sig.push_str(": ");
            sig.push_str(returns);
        }
        sig
    }

    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder
            .when(self.doc.is_some(), |b| {
                let doc = self.doc.as_deref().unwrap_or_default();
                b.line("/**").line(&format!(" * {}", doc)).line(" */")
            })
            .brace_block(&self.signature(), |b| {
                b.each(&self.body, |b, line| b.line(line))
            })
    }
}

/// A PHP class declaration.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    extends: Option<String>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            methods: Vec::new(),
        }
    }

    /// Set the parent class by its unqualified name.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    fn header(&self) -> String {
        match &self.extends {
            Some(parent) => format!("class {} extends {}", self.name, parent),
            None => format!("class {}", self.name),
        }
    }

    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.brace_block(&self.header(), |b| {
            let mut b = b;
            for (i, method) in self.methods.iter().enumerate() {
                if i > 0 {
                    b = b.blank();
                }
                b = method.render(b);
            }
            b
        })
    }
}

/// A structured representation of a PHP file.
///
/// Imports are sorted and deduplicated on render; imports of classes living
/// in the file's own namespace are dropped.
///
/// # Example
///
/// ```
/// use autocrud_codegen::php::{Class, PhpFile};
///
/// let php = PhpFile::new()
///     .namespace("App\\Services")
///     .use_class("App\\Models\\Post")
///     .class(Class::new("PostService"))
///     .render();
///
/// assert!(php.starts_with("<?php\n\nnamespace App\\Services;\n\nuse App\\Models\\Post;\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhpFile {
    namespace: Option<String>,
    uses: Vec<Import>,
    statements: Vec<String>,
    classes: Vec<Class>,
}

impl PhpFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Import a fully qualified class.
    pub fn use_class(mut self, class: impl Into<String>) -> Self {
        self.uses.push(Import {
            class: class.into(),
            alias: None,
        });
        self
    }

    /// Take every import resolved by an [`Imports`] table.
    pub fn imports(mut self, imports: Imports) -> Self {
        self.uses.extend(imports.entries);
        self
    }

    /// Add a top-level statement line (e.g. a route registration).
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.statements.push(line.into());
        self
    }

    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    fn use_lines(&self) -> Vec<String> {
        let own = self.namespace.as_deref().unwrap_or("");
        let mut uses: Vec<&Import> = self
            .uses
            .iter()
            .filter(|import| import.alias.is_some() || namespace_of(&import.class) != own)
            .collect();
        uses.sort_unstable();
        uses.dedup();
        uses.into_iter()
            .map(|import| match &import.alias {
                Some(alias) => format!("use {} as {};", import.class, alias),
                None => format!("use {};", import.class),
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let imports = self.use_lines();

        let mut builder = CodeBuilder::php().line("<?php").blank();

        if let Some(namespace) = &self.namespace {
            builder = builder.line(&format!("namespace {};", namespace)).blank();
        }

        if !imports.is_empty() {
            builder = builder
                .each(&imports, |b, line| b.line(line))
                .blank();
        }

        if !self.statements.is_empty() {
            builder = builder.each(&self.statements, |b, line| b.line(line));
            if !self.classes.is_empty() {
                builder = builder.blank();
            }
        }

        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                builder = builder.blank();
            }
            builder = class.render(builder);
        }

        builder.build()
    }
}
