//! Error types for declaration generation

use thiserror::Error;

use crate::emit::EmitError;
use crate::fetch::FetchError;

/// Malformed describe data found while mapping an SObject
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("Field without an API name on object '{object}'")]
    EmptyFieldName { object: String },

    #[error("Child relationship '{relationship}' on object '{object}' has no child object")]
    EmptyChildObject { object: String, relationship: String },
}

/// Errors that abort a generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Could not retrieve describe metadata for {api_name}. Check SObject spelling and authorization")]
    Describe {
        api_name: String,
        #[source]
        source: FetchError,
    },

    #[error("Could not map describe metadata for {api_name}: {source}")]
    Mapping {
        api_name: String,
        #[source]
        source: MappingError,
    },

    #[error("Could not emit declarations for {api_name}: {source}")]
    Emit {
        api_name: String,
        #[source]
        source: EmitError,
    },

    #[error("Could not write generated module: {0}")]
    Output(#[source] EmitError),
}

impl GenerateError {
    /// SObject whose generation failed, if the failure was object-specific
    pub fn api_name(&self) -> Option<&str> {
        match self {
            GenerateError::Describe { api_name, .. }
            | GenerateError::Mapping { api_name, .. }
            | GenerateError::Emit { api_name, .. } => Some(api_name),
            GenerateError::Output(_) => None,
        }
    }
}

pub type MappingResult<T> = Result<T, MappingError>;

pub type GenerateResult<T> = Result<T, GenerateError>;
