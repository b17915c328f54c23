//! Driving a full generation run.

use std::{collections::BTreeSet, path::PathBuf};

use tracing::{debug, info, info_span, warn};

use crate::{
    AssertionGenerator, DescriptionConverter, EntryPointPackage, GenerationError,
    GenerationReport, TypeConverter, TypeLoader, resolve,
};

/// The inputs of one run.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub packages: Vec<String>,
    pub types: Vec<String>,
    pub output_dir: PathBuf,
    pub entry_point_package: EntryPointPackage,
}

impl GenerationRequest {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.packages.push(package.into());
        self
    }

    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.types.push(name.into());
        self
    }

    pub fn with_entry_point_package(mut self, package: EntryPointPackage) -> Self {
        self.entry_point_package = package;
        self
    }
}

/// Resolves, describes and generates assertions for a set of types.
///
/// # Example
///
/// ```ignore
/// let mut orchestrator = Orchestrator::new(loader, RustAssertionGenerator::new());
/// let report = orchestrator.generate(&GenerationRequest::new("out").with_package("org.acme"));
/// if let Some(error) = report.error() {
///     eprintln!("{error}");
/// }
/// ```
#[derive(Debug)]
pub struct Orchestrator<L, G, C = DescriptionConverter> {
    loader: L,
    generator: G,
    converter: C,
}

impl<L: TypeLoader, G: AssertionGenerator> Orchestrator<L, G> {
    pub fn new(loader: L, generator: G) -> Self {
        Self {
            loader,
            generator,
            converter: DescriptionConverter,
        }
    }
}

impl<L: TypeLoader, G: AssertionGenerator, C: TypeConverter> Orchestrator<L, G, C> {
    /// Replace the converter.
    pub fn with_converter<C2: TypeConverter>(self, converter: C2) -> Orchestrator<L, G, C2> {
        Orchestrator {
            loader: self.loader,
            generator: self.generator,
            converter,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Run every step and report the outcome.
    ///
    /// This never fails: the first failing step halts the run and becomes
    /// the report's error. Files written before the failure stay on disk
    /// and stay listed in the report.
    pub fn generate(&mut self, request: &GenerationRequest) -> GenerationReport {
        let span = info_span!("generate", output = %request.output_dir.display());
        let _enter = span.enter();

        self.generator.set_output_dir(&request.output_dir);
        let mut report = GenerationReport::new();

        match self.run(request, &mut report) {
            Ok(()) => info!(
                files = report.generated_files().len(),
                entry_point = report.entry_point_file().is_some(),
                "generation finished"
            ),
            Err(error) => {
                warn!(
                    step = %error.step(),
                    files = report.generated_files().len(),
                    "generation halted: {error}"
                );
                report.set_error(error);
            }
        }

        report
    }

    fn run(
        &self,
        request: &GenerationRequest,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let types = resolve(&request.packages, &request.types, &self.loader)?;
        info!(types = types.len(), "resolved types");

        let mut descriptions = BTreeSet::new();
        for def in types.iter() {
            let type_name = def.name.qualified();
            let description =
                self.converter
                    .convert(def)
                    .map_err(|source| GenerationError::Conversion {
                        type_name: type_name.clone(),
                        source,
                    })?;

            let file = self
                .generator
                .generate_assertion(&description)
                .map_err(|source| GenerationError::Assertion {
                    type_name: type_name.clone(),
                    source: source.into(),
                })?;
            debug!(type_name = %type_name, file = %file.display(), "generated assertions");

            report.add_generated_file(file);
            descriptions.insert(description);
        }

        report.record_inputs(&request.packages, &request.types, &request.output_dir);

        if descriptions.is_empty() {
            debug!("no types resolved, skipping the entry point");
            return Ok(());
        }

        let entry_point = self
            .generator
            .generate_entry_point(&descriptions, &request.entry_point_package)
            .map_err(|source| GenerationError::EntryPoint {
                source: source.into(),
            })?;
        debug!(file = %entry_point.display(), "generated entry point");
        report.set_entry_point_file(entry_point);

        Ok(())
    }
}
