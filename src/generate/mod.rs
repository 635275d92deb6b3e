//! SObject declaration generation
//!
//! # Overview
//!
//! A run turns a list of [`SObjectConfig`]s into declarations:
//! 1. Resolve every class and contract name up front into a [`ClassIndex`]
//! 2. For each config, in order: fetch the describe, map it to properties,
//!    and hand the resulting [`ObjectDeclaration`] to the emitter
//!
//! The index is complete before the first describe is fetched, so an object
//! can reference the class of any other configured object, including one
//! generated later in the run.
//!
//! # Example
//!
//! ```rust
//! use sobgen::config::SObjectConfig;
//! use sobgen::emit::TypeScriptEmitter;
//! use sobgen::generate::SObjectGenerator;
//! use sobgen::create_standard_schema;
//!
//! # tokio_test_block(async {
//! let schema = create_standard_schema();
//! let generator = SObjectGenerator::new(vec![
//!     SObjectConfig::new("Account"),
//!     SObjectConfig::new("Contact"),
//! ]);
//!
//! let mut emitter = TypeScriptEmitter::new();
//! generator.generate(&schema, &mut emitter).await.unwrap();
//! assert!(emitter.output().contains("export class Contact extends RestObject"));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

mod error;
pub mod index;
pub mod mapper;
pub mod naming;

pub use error::{GenerateError, GenerateResult, MappingError, MappingResult};
pub use index::ClassIndex;
pub use mapper::map_object;
pub use naming::{clean_api_name, contract_name, resolve_class_name, resolve_field_name};

use tracing::info;

use crate::config::SObjectConfig;
use crate::declaration::ObjectDeclaration;
use crate::emit::{DeclarationEmitter, EmitOptions, TypeScriptEmitter};
use crate::fetch::DescribeFetcher;

/// Drives a generation run over a fixed set of SObject configs
#[derive(Debug, Clone)]
pub struct SObjectGenerator {
    configs: Vec<SObjectConfig>,
    index: ClassIndex,
}

impl SObjectGenerator {
    /// Create a generator; the class index is built here, before any fetch
    pub fn new(configs: Vec<SObjectConfig>) -> Self {
        let index = ClassIndex::build(&configs);
        Self { configs, index }
    }

    pub fn configs(&self) -> &[SObjectConfig] {
        &self.configs
    }

    pub fn index(&self) -> &ClassIndex {
        &self.index
    }

    /// Generate every configured object into `emitter`, one at a time
    ///
    /// The first failure aborts the run; objects after it are never fetched.
    #[tracing::instrument(skip_all, fields(object_count = self.configs.len()))]
    pub async fn generate<F, E>(&self, fetcher: &F, emitter: &mut E) -> GenerateResult<()>
    where
        F: DescribeFetcher + ?Sized,
        E: DeclarationEmitter + ?Sized,
    {
        emitter.begin().map_err(GenerateError::Output)?;

        for config in &self.configs {
            let declaration = self.generate_object(config, fetcher).await?;
            emitter
                .emit_object(&declaration, &self.index)
                .map_err(|source| GenerateError::Emit {
                    api_name: config.api_name.clone(),
                    source,
                })?;
        }

        emitter.finish().map_err(GenerateError::Output)
    }

    /// Fetch and map a single object
    pub async fn generate_object<F>(
        &self,
        config: &SObjectConfig,
        fetcher: &F,
    ) -> GenerateResult<ObjectDeclaration>
    where
        F: DescribeFetcher + ?Sized,
    {
        info!(object = %config.api_name, "Generating");

        let describe = fetcher
            .describe(&config.api_name)
            .await
            .map_err(|source| GenerateError::Describe {
                api_name: config.api_name.clone(),
                source,
            })?;

        let properties =
            map_object(config, &describe, &self.index).map_err(|source| GenerateError::Mapping {
                api_name: config.api_name.clone(),
                source,
            })?;

        let class_name = resolve_class_name(config);
        let contract_name = contract_name(&class_name);
        Ok(ObjectDeclaration::new(
            config.api_name.clone(),
            class_name,
            contract_name,
            properties,
        ))
    }
}

/// Generate a complete TypeScript module; nothing is returned unless every object succeeds
pub async fn generate_typescript<F>(
    configs: Vec<SObjectConfig>,
    fetcher: &F,
    options: EmitOptions,
) -> GenerateResult<String>
where
    F: DescribeFetcher + ?Sized,
{
    let generator = SObjectGenerator::new(configs);
    let mut emitter = TypeScriptEmitter::with_options(options);
    generator.generate(fetcher, &mut emitter).await?;
    Ok(emitter.into_output())
}
