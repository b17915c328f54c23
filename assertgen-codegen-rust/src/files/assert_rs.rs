use std::path::{Path, PathBuf};

use assertgen_core::{GENERATED_HEADER, GeneratedFile};
use assertgen_ir::{Accessor, AccessorKind, FieldType, TypeDescription};

use crate::{
    Field, Fn, Impl, Param, RustFile, Struct, naming,
    types::{TypeRenderer, equals},
};

/// The assertions file for one type: `<package path>/<snake name>_assert.rs`.
pub struct AssertRs<'a> {
    description: &'a TypeDescription,
}

impl<'a> AssertRs<'a> {
    pub fn new(description: &'a TypeDescription) -> Self {
        Self { description }
    }

    fn subject(&self) -> &str {
        self.description.name.name()
    }

    fn assert_struct(&self) -> Struct {
        let mut doc = format!("Assertions on [`{}`].", self.subject());
        if let Some(type_doc) = &self.description.doc {
            doc.push_str("\n\n");
            doc.push_str(type_doc);
        }

        Struct::new(format!("{}<'a>", naming::assert_struct_name(&self.description.name)))
            .doc(doc)
            .field(Field::new("actual", format!("&'a {}", self.subject())).private())
    }

    fn assert_impl(&self, types: &TypeRenderer) -> Impl {
        let subject = self.subject();
        let constructors = [
            Fn::new("new")
                .param(Param::new("actual", format!("&'a {subject}")))
                .returns("Self")
                .body("Self { actual }"),
            Fn::new("actual")
                .doc("The value under test.")
                .param(Param::receiver("&self"))
                .returns(format!("&'a {subject}"))
                .body("self.actual"),
        ];

        let methods = self
            .description
            .accessors
            .iter()
            .flat_map(|accessor| self.accessor_methods(accessor, types));

        Impl::new(format!("{}<'a>", naming::assert_struct_name(&self.description.name)))
            .generics("'a")
            .methods(constructors)
            .methods(methods)
    }

    fn accessor_methods(&self, accessor: &Accessor, types: &TypeRenderer) -> Vec<Fn> {
        let label = format!("{}.{}", self.subject(), accessor.field);
        let actual = format!("self.actual.{}", naming::field_ident(&accessor.field));
        let names = accessor.assertion_methods();
        let method = |i: usize, doc: String| {
            Fn::new(&names[i])
                .doc(doc)
                .attr("track_caller")
                .param(Param::receiver("&self"))
                .returns("&Self")
        };
        let field = &accessor.field;

        match (&accessor.kind, &accessor.ty) {
            (AccessorKind::Flag, _) => vec![
                method(0, format!("Verifies that `{field}` is true."))
                    .body(check(&actual, &format!("\"expected {label} to be true\""))),
                method(1, format!("Verifies that `{field}` is false."))
                    .body(check(&format!("!{actual}"), &format!("\"expected {label} to be false\""))),
            ],
            (AccessorKind::Collection, FieldType::List(inner)) => vec![
                method(0, format!("Verifies that `{field}` equals `expected`, in order."))
                    .param(Param::new("expected", types.param(&accessor.ty)))
                    .body(check(
                        &format!("{actual} == expected"),
                        &was(&format!("expected {label} to be {{:?}}"), &["expected", actual.as_str()]),
                    )),
                method(1, format!("Verifies that `{field}` is empty."))
                    .body(check(
                        &format!("{actual}.is_empty()"),
                        &was(&format!("expected {label} to be empty"), &[actual.as_str()]),
                    )),
                method(2, format!("Verifies that `{field}` contains `expected`."))
                    .param(Param::new("expected", types.param(inner)))
                    .body(check(
                        &format!("{actual}.iter().any(|item| {})", equals(inner, "*item", "expected")),
                        &was(&format!("expected {label} to contain {{:?}}"), &["expected", actual.as_str()]),
                    )),
            ],
            (AccessorKind::Optional, FieldType::Optional(inner)) => vec![
                method(0, format!("Verifies that `{field}` is present and equals `expected`."))
                    .param(Param::new("expected", types.param(inner)))
                    .body(check(
                        &format!(
                            "{actual}.as_ref().is_some_and(|value| {})",
                            equals(inner, "*value", "expected")
                        ),
                        &was(&format!("expected {label} to be Some({{:?}})"), &["expected", actual.as_str()]),
                    )),
                method(1, format!("Verifies that `{field}` is absent."))
                    .body(check(
                        &format!("{actual}.is_none()"),
                        &was(&format!("expected {label} to be None"), &[actual.as_str()]),
                    )),
            ],
            _ => vec![
                method(0, format!("Verifies that `{field}` equals `expected`."))
                    .param(Param::new("expected", types.param(&accessor.ty)))
                    .body(check(
                        &equals(&accessor.ty, &actual, "expected"),
                        &was(&format!("expected {label} to be {{:?}}"), &["expected", actual.as_str()]),
                    )),
            ],
        }
    }
}

/// Body of an assertion method: assert, then return `self` for chaining.
fn check(condition: &str, message: &str) -> String {
    format!("assert!(\n    {condition},\n    {message}\n);\nself")
}

/// A failure message that ends with "but was {:?}" and its arguments.
fn was(expectation: &str, args: &[&str]) -> String {
    let mut message = format!("\"{expectation} but was {{:?}}\"");
    for arg in args {
        message.push_str(",\n    ");
        message.push_str(arg);
    }
    message
}

impl GeneratedFile for AssertRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(naming::assert_file_path(&self.description.name))
    }

    fn render(&self) -> String {
        let types = TypeRenderer::for_description(self.description);
        RustFile::new()
            .use_stmts(types.uses())
            .add(self.assert_struct())
            .add(self.assert_impl(&types))
            .render_with_header(GENERATED_HEADER)
    }
}
