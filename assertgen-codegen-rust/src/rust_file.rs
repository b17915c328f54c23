//! A Rust source file: imports followed by body items.

use assertgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `use` statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}

/// Imports and body items, rendered with a blank line between items.
///
/// ```ignore
/// let file = RustFile::new()
///     .use_stmt(Use::new("crate::hr").symbol("Employee"))
///     .add(assert_struct)
///     .add(assert_impl)
///     .render_with_header(GENERATED_HEADER);
/// ```
#[derive(Debug, Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body.extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();

        let mut uses = self.uses.clone();
        uses.sort();
        uses.dedup();
        for use_stmt in &uses {
            builder.emit(use_stmt);
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || !uses.is_empty() {
                builder.push_blank();
            }
            fragments
                .iter()
                .cloned()
                .for_each(|f| builder.apply_fragment(f));
        }

        builder.build()
    }

    /// Render with `header` as the first line.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{header}\n")
        } else {
            format!("{header}\n\n{content}")
        }
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty() && self.body.is_empty()
    }
}

/// Verbatim lines.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.lines().map(CodeFragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = RustFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
        assert_eq!(file.render_with_header("// header"), "// header\n");
    }

    #[test]
    fn test_use_forms() {
        let render = |u: Use| {
            let mut builder = CodeBuilder::rust();
            builder.emit(&u);
            builder.build()
        };
        assert_eq!(render(Use::new("std::fmt")), "use std::fmt;\n");
        assert_eq!(
            render(Use::new("crate::hr").symbol("Employee")),
            "use crate::hr::Employee;\n"
        );
        assert_eq!(
            render(Use::new("crate::hr").symbol("Employee").symbol("Team")),
            "use crate::hr::{Employee, Team};\n"
        );
    }

    #[test]
    fn test_uses_are_sorted_and_deduplicated() {
        let code = RustFile::new()
            .use_stmt(Use::new("crate::p2").symbol("Address"))
            .use_stmt(Use::new("crate::p1").symbol("Employee"))
            .use_stmt(Use::new("crate::p2").symbol("Address"))
            .render();
        assert_eq!(code, "use crate::p1::Employee;\nuse crate::p2::Address;\n");
    }

    #[test]
    fn test_body_items_are_separated() {
        let code = RustFile::new()
            .use_stmt(Use::new("crate::p1").symbol("Employee"))
            .add(RawCode::new("struct Foo;"))
            .add(RawCode::lines(["struct Bar;", "struct Baz;"]))
            .render_with_header("// header");
        assert_eq!(
            code,
            "// header\n\nuse crate::p1::Employee;\n\nstruct Foo;\n\nstruct Bar;\nstruct Baz;\n"
        );
    }
}
