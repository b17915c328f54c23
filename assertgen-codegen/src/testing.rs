//! Test doubles for the loader and generator seams.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use assertgen_core::{package_to_path, write_file};
use assertgen_ir::{TypeDef, TypeDescription, TypeName};
use eyre::{Result, bail};

use crate::{AssertionGenerator, EntryPointPackage, LoaderError, TypeLoader};

/// A loader over a fixed list of definitions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    types: Vec<TypeDef>,
    failure: Option<String>,
}

impl InMemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field-less type by qualified name.
    ///
    /// # Panics
    ///
    /// Panics if `qualified` is not a valid type name.
    pub fn with_type(self, qualified: &str) -> Self {
        let name = TypeName::parse(qualified)
            .unwrap_or_else(|e| panic!("invalid type name '{qualified}': {e}"));
        self.with_def(TypeDef::new(name))
    }

    pub fn with_def(mut self, def: TypeDef) -> Self {
        self.types.push(def);
        self
    }

    /// Make every lookup fail with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn check(&self) -> Result<(), LoaderError> {
        match &self.failure {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

impl TypeLoader for InMemoryLoader {
    fn load_type(&self, name: &TypeName) -> Result<Option<TypeDef>, LoaderError> {
        self.check()?;
        Ok(self.types.iter().find(|def| &def.name == name).cloned())
    }

    fn package_types(&self, package: &str) -> Result<Vec<TypeDef>, LoaderError> {
        self.check()?;
        Ok(self
            .types
            .iter()
            .filter(|def| def.name.is_in_package(package))
            .cloned()
            .collect())
    }
}

/// A generator that writes one small text file per call and records what
/// it was asked for.
///
/// - per type: `<out>/<qualified name>.txt` listing the accessor fields
/// - entry point: `<out>/<package path>/ENTRY.txt`, at the output root by default
///
/// Failures can be injected for one type or for the entry point.
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    output_dir: PathBuf,
    fail_on: Option<String>,
    fail_entry_point: bool,
    assertion_calls: RefCell<Vec<String>>,
    entry_point_calls: RefCell<Vec<Vec<String>>>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail when generating assertions for `qualified`.
    pub fn fail_on(mut self, qualified: impl Into<String>) -> Self {
        self.fail_on = Some(qualified.into());
        self
    }

    pub fn fail_entry_point(mut self) -> Self {
        self.fail_entry_point = true;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Qualified names passed to `generate_assertion`, in call order.
    pub fn assertion_calls(&self) -> Vec<String> {
        self.assertion_calls.borrow().clone()
    }

    /// For each `generate_entry_point` call, the qualified names it received.
    pub fn entry_point_calls(&self) -> Vec<Vec<String>> {
        self.entry_point_calls.borrow().clone()
    }
}

impl AssertionGenerator for RecordingGenerator {
    fn set_output_dir(&mut self, dir: &Path) {
        self.output_dir = dir.to_path_buf();
    }

    fn generate_assertion(&self, description: &TypeDescription) -> Result<PathBuf> {
        let qualified = description.name.qualified();
        self.assertion_calls.borrow_mut().push(qualified.clone());
        if self.fail_on.as_deref() == Some(qualified.as_str()) {
            bail!("injected failure for '{qualified}'");
        }

        let fields: Vec<&str> = description.accessors.iter().map(|a| a.field.as_str()).collect();
        let path = self.output_dir.join(format!("{qualified}.txt"));
        write_file(&path, &format!("{qualified}: {}\n", fields.join(", ")))?;
        Ok(path)
    }

    fn generate_entry_point(
        &self,
        descriptions: &BTreeSet<TypeDescription>,
        package: &EntryPointPackage,
    ) -> Result<PathBuf> {
        let names: Vec<String> = descriptions.iter().map(|d| d.name.qualified()).collect();
        self.entry_point_calls.borrow_mut().push(names.clone());
        if self.fail_entry_point {
            bail!("injected entry point failure");
        }

        let dir = match package.custom() {
            Some(package) => self.output_dir.join(package_to_path(package)),
            None => self.output_dir.clone(),
        };
        let path = dir.join("ENTRY.txt");
        write_file(&path, &(names.join("\n") + "\n"))?;
        Ok(path)
    }
}
