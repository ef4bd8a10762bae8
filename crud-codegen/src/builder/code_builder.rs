//! Code builder utility for generating properly indented code.

/// One PSR-12 indentation level.
const PSR12_INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use autocrud_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::php()
///     .line("function main()")
///     .line("{")
///     .indent()
///     .line("echo 'Hello';")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function main()\n{\n    echo 'Hello';\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder using `indent` for each level.
    pub fn new(indent: &'static str) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (PSR-12).
    pub fn php() -> Self {
        Self::new(PSR12_INDENT)
    }

    /// Add a line of code with current indentation.
    ///
    /// An empty line is emitted as a blank line without trailing whitespace.
    pub fn line(mut self, s: &str) -> Self {
        if s.is_empty() {
            return self.blank();
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use autocrud_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::php()
    ///     .block_with_close("return [", "];", |b| b.line("'id' => $this->id,"))
    ///     .build();
    ///
    /// assert_eq!(code, "return [\n    'id' => $this->id,\n];\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a PSR-12 brace block: header, `{` on its own line, body, `}`.
    pub fn brace_block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.line(header).block_with_close("{", "}", f)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::php()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::php().line("$x = 1;").build();
        assert_eq!(code, "$x = 1;\n");
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let code = CodeBuilder::php()
            .indent()
            .line("$a = 1;")
            .line("")
            .line("$b = 2;")
            .build();
        assert_eq!(code, "    $a = 1;\n\n    $b = 2;\n");
    }

    #[test]
    fn test_brace_block() {
        let code = CodeBuilder::php()
            .brace_block("class Foo", |b| b.line("use Bar;"))
            .build();

        assert_eq!(code, "class Foo\n{\n    use Bar;\n}\n");
    }

    #[test]
    fn test_conditional() {
        let with = CodeBuilder::php()
            .when(true, |b| b.line("declare(strict_types=1);"))
            .line("class Foo {}")
            .build();
        let without = CodeBuilder::php()
            .when(false, |b| b.line("declare(strict_types=1);"))
            .line("class Foo {}")
            .build();

        assert_eq!(with, "declare(strict_types=1);\nclass Foo {}\n");
        assert_eq!(without, "class Foo {}\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::php()
            .block_with_close("return [", "];", |b| {
                b.each(["id", "title"], |b, column| {
                    b.line(&format!("'{}' => $this->{},", column, column))
                })
            })
            .build();

        assert_eq!(
            code,
            "return [\n    'id' => $this->id,\n    'title' => $this->title,\n];\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let code = CodeBuilder::new("\t")
            .brace_block("if ($x)", |b| b.line("return;"))
            .build();
        assert_eq!(code, "if ($x)\n{\n\treturn;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::php().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }
}
