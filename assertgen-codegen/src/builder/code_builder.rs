//! Indentation-aware string builder.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines of code at the current indentation level.
///
/// ```
/// use assertgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder.push_line("fn main() {").push_indent().push_line("run();").push_dedent().push_line("}");
///
/// assert_eq!(builder.build(), "fn main() {\n    run();\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Add a line at the current indentation. Empty lines are not indented.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.indent.write_to(&mut self.buffer, self.indent_level);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write a `///` comment, one line per line of `text`.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {}", line.trim_end()));
            }
        }
        self
    }

    /// Render a node at the current indentation.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                body.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                fragments.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent();
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::rust();
        builder
            .push_line("impl Foo {")
            .push_indent()
            .push_line("fn bar(&self) {}")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "impl Foo {\n    fn bar(&self) {}\n}\n");
    }

    #[test]
    fn test_dedent_stops_at_zero() {
        let mut builder = CodeBuilder::rust();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_multi_line_doc() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().push_doc("First line.\n\nSecond line.  ");
        assert_eq!(
            builder.build(),
            "    /// First line.\n    ///\n    /// Second line.\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().push_line("a").push_line("").push_line("b");
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_emit_nested_fragments() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::doc("Entry."),
                    CodeFragment::braced(
                        "fn main() {",
                        vec![
                            CodeFragment::line("let x = 1;"),
                            CodeFragment::Indent(vec![CodeFragment::line("// deeper")]),
                        ],
                    ),
                    CodeFragment::blank(),
                ]
            }
        }

        let mut builder = CodeBuilder::rust();
        builder.emit(&Node);
        assert_eq!(
            builder.build(),
            "/// Entry.\nfn main() {\n    let x = 1;\n        // deeper\n}\n\n"
        );
    }
}
