//! Rust impl block builder.

use assertgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for inherent or trait impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Option<String>,
    trait_name: Option<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: None,
            trait_name: None,
            methods: Vec::new(),
        }
    }

    /// Generic parameters declared on the impl, e.g. `'a`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    fn header(&self) -> String {
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{g}>"))
            .unwrap_or_default();
        match &self.trait_name {
            Some(trait_name) => format!("impl{generics} {trait_name} for {} {{", self.type_name),
            None => format!("impl{generics} {} {{", self.type_name),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let separator = (i > 0).then(CodeFragment::blank);
                separator.into_iter().chain(method.to_fragments())
            })
            .collect();
        vec![CodeFragment::braced(self.header(), body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_generic_impl() {
        let i = Impl::new("EmployeeAssert<'a>")
            .generics("'a")
            .method(Fn::new("a").param(Param::receiver("&self")))
            .method(Fn::new("b"))
            .build();
        assert_eq!(
            i,
            "impl<'a> EmployeeAssert<'a> {\n    pub fn a(&self) {\n    }\n\n    pub fn b() {\n    }\n}\n"
        );
    }

    #[test]
    fn test_impl_for_trait() {
        let i = Impl::new("Employee").for_trait("Default").build();
        assert_eq!(i, "impl Default for Employee {\n}\n");
    }
}
