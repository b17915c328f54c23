//! Rust function builder.

use assertgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter; an empty type renders the name alone (e.g. `&self`).
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn receiver(receiver: impl Into<String>) -> Self {
        Self::new(receiver, "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions and methods.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add body content; multi-line content keeps its relative indentation.
    pub fn body(mut self, content: impl Into<String>) -> Self {
        self.body.extend(content.into().lines().map(str::to_string));
        self
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("{vis}fn {}({params}) -> {ret} {{", self.name),
            None => format!("{vis}fn {}({params}) {{", self.name),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.extend(self.attrs.iter().map(|a| CodeFragment::line(format!("#[{a}]"))));
        fragments.push(CodeFragment::braced(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        assert_eq!(Fn::new("run").build(), "pub fn run() {\n}\n");
    }

    #[test]
    fn test_method_with_params() {
        let f = Fn::new("has_age")
            .doc("Checks the age.")
            .attr("track_caller")
            .param(Param::receiver("&self"))
            .param(Param::new("expected", "i64"))
            .returns("&Self")
            .body("assert_eq!(self.actual.age, expected);\nself")
            .build();

        assert_eq!(
            f,
            "/// Checks the age.\n\
             #[track_caller]\n\
             pub fn has_age(&self, expected: i64) -> &Self {\n    \
             assert_eq!(self.actual.age, expected);\n    \
             self\n\
             }\n"
        );
    }

    #[test]
    fn test_private_fn() {
        let f = Fn::new("helper").private().build();
        assert!(f.starts_with("fn helper() {"));
    }

    #[test]
    fn test_body_keeps_relative_indent() {
        let f = Fn::new("check").body("assert!(\n    ok,\n);").build();
        assert_eq!(f, "pub fn check() {\n    assert!(\n        ok,\n    );\n}\n");
    }
}
