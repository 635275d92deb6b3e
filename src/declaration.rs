//! Declaration model shared by the mapper and the emitters
//!
//! A mapped SObject is a list of [`PropertyDescriptor`]s, each carrying the
//! runtime-visible [`FieldMetadata`] record for that property. How the record is
//! attached to the output (a decorator, a registration call, ...) is up to the
//! emitter.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::generate::ClassIndex;
use crate::schema::SalesforceFieldType;

/// Name of the runtime type used for polymorphic lookups
pub const POLYMORPHIC_TYPE: &str = "Name";

/// Declared type of a generated property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    String,
    Boolean,
    Number,
    Date,
    /// Geolocation compound value
    Location,
    /// Polymorphic lookup target, only known to carry a name
    Name,
    /// Single generated class (parent lookup)
    Class(String),
    /// Array of a generated class (child relationship)
    ClassArray(String),
}

impl DeclaredType {
    /// Map a describe field type to the declared type of its scalar property
    pub fn for_field_type(field_type: &SalesforceFieldType) -> Self {
        match field_type {
            SalesforceFieldType::Date | SalesforceFieldType::DateTime => DeclaredType::Date,
            SalesforceFieldType::Boolean => DeclaredType::Boolean,
            SalesforceFieldType::Double
            | SalesforceFieldType::Int
            | SalesforceFieldType::Integer
            | SalesforceFieldType::Currency
            | SalesforceFieldType::Percent => DeclaredType::Number,
            SalesforceFieldType::Location => DeclaredType::Location,
            _ => DeclaredType::String,
        }
    }

    /// Generated class this type refers to, if any
    pub fn class_name(&self) -> Option<&str> {
        match self {
            DeclaredType::Class(name) | DeclaredType::ClassArray(name) => Some(name),
            _ => None,
        }
    }
}

/// Deferred reference to another generated type
///
/// Generated types may refer to each other in any order, so the reference
/// holds only the class name and is resolved on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyReference {
    class_name: String,
}

impl LazyReference {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Contract name of the referenced class. `None` for types outside the index
    /// such as [`POLYMORPHIC_TYPE`].
    pub fn resolve<'a>(&self, index: &'a ClassIndex) -> Option<&'a str> {
        index.contract_for(&self.class_name)
    }
}

/// Per-field metadata record consumed by the runtime object mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMetadata {
    pub api_name: String,
    pub createable: bool,
    pub updateable: bool,
    pub required: bool,
    pub external_id: bool,
    pub child_relationship: bool,
    pub salesforce_type: SalesforceFieldType,
    pub salesforce_label: String,
    pub reference: Option<LazyReference>,
}

impl FieldMetadata {
    /// Metadata for a relationship property (parent lookup or child list).
    /// Relationship properties are never written directly.
    pub fn relationship(
        api_name: impl Into<String>,
        label: impl Into<String>,
        reference: impl Into<String>,
        child_relationship: bool,
    ) -> Self {
        Self {
            api_name: api_name.into(),
            createable: false,
            updateable: false,
            required: false,
            external_id: false,
            child_relationship,
            salesforce_type: SalesforceFieldType::Reference,
            salesforce_label: label.into(),
            reference: Some(LazyReference::new(reference)),
        }
    }
}

/// `required` is always derived: writable and not nillable
pub fn is_required(createable: bool, updateable: bool, nillable: bool) -> bool {
    (createable || updateable) && !nillable
}

/// One property of a generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub declared_type: DeclaredType,
    pub metadata: FieldMetadata,
    pub docs: Option<String>,
}

/// Everything an emitter needs to write one SObject's declarations
#[derive(Debug, Clone)]
pub struct ObjectDeclaration {
    pub api_name: String,
    pub class_name: String,
    pub contract_name: String,
    pub properties: Vec<PropertyDescriptor>,
    field_table: OnceLock<IndexMap<String, FieldMetadata>>,
}

impl ObjectDeclaration {
    pub fn new(
        api_name: impl Into<String>,
        class_name: impl Into<String>,
        contract_name: impl Into<String>,
        properties: Vec<PropertyDescriptor>,
    ) -> Self {
        Self {
            api_name: api_name.into(),
            class_name: class_name.into(),
            contract_name: contract_name.into(),
            properties,
            field_table: OnceLock::new(),
        }
    }

    /// Field metadata keyed by contract property name, built on first access
    pub fn field_metadata(&self) -> &IndexMap<String, FieldMetadata> {
        self.field_table.get_or_init(|| {
            self.properties
                .iter()
                .map(|p| (p.name.clone(), p.metadata.clone()))
                .collect()
        })
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}
