pub mod config;
pub mod declaration;
pub mod emit;
pub mod fetch;
pub mod generate;
pub mod schema;
pub mod standard_objects;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{FieldMapping, GeneratorConfig, SObjectConfig};
pub use declaration::{DeclaredType, FieldMetadata, LazyReference, ObjectDeclaration, PropertyDescriptor};
pub use emit::{DeclarationEmitter, EmitOptions, TypeScriptEmitter};
pub use fetch::{DescribeFetcher, FetchError};
#[cfg(not(target_arch = "wasm32"))]
pub use fetch::DescribeDirectory;
pub use generate::{generate_typescript, ClassIndex, GenerateError, SObjectGenerator};
pub use schema::{ChildRelationship, FieldDescribe, SObjectDescribe, SalesforceFieldType, SalesforceSchema};
pub use standard_objects::create_standard_schema;
