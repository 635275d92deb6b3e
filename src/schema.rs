//! Salesforce describe metadata modeling
//!
//! These types mirror the JSON returned by the REST `sobjects/<name>/describe`
//! endpoint, trimmed to the attributes the declaration generator reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A set of describe results keyed by SObject API name (case-insensitive)
#[derive(Debug, Clone, Default)]
pub struct SalesforceSchema {
    objects: HashMap<String, SObjectDescribe>,
}

impl SalesforceSchema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from a list of describes
    pub fn from_describes(describes: impl IntoIterator<Item = SObjectDescribe>) -> Self {
        let mut schema = Self::new();
        for describe in describes {
            schema.add_object(describe);
        }
        schema
    }

    /// Add an SObject to the schema, replacing any previous describe of the same name
    pub fn add_object(&mut self, object: SObjectDescribe) {
        self.objects.insert(object.name.to_lowercase(), object);
    }

    /// Get an SObject by API name (case-insensitive)
    pub fn get_object(&self, name: &str) -> Option<&SObjectDescribe> {
        self.objects.get(&name.to_lowercase())
    }

    /// Get all objects
    pub fn objects(&self) -> impl Iterator<Item = &SObjectDescribe> {
        self.objects.values()
    }

    /// Check if an object exists
    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Describe result for a single SObject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SObjectDescribe {
    /// API name (e.g., "Account", "Custom_Object__c")
    pub name: String,
    #[serde(default)]
    pub label: String,
    /// Fields in describe order
    #[serde(default)]
    pub fields: Vec<FieldDescribe>,
    /// Child relationships in describe order
    #[serde(default)]
    pub child_relationships: Vec<ChildRelationship>,
}

impl SObjectDescribe {
    /// Create a new SObject description
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            fields: Vec::new(),
            child_relationships: Vec::new(),
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Append a field, keeping describe order
    pub fn add_field(&mut self, field: FieldDescribe) {
        self.fields.push(field);
    }

    /// Get a field by API name (case-insensitive)
    pub fn get_field(&self, name: &str) -> Option<&FieldDescribe> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Append a child relationship
    pub fn add_child_relationship(&mut self, relationship: ChildRelationship) {
        self.child_relationships.push(relationship);
    }

    /// Find a named child relationship (case-insensitive)
    pub fn get_child_relationship(&self, name: &str) -> Option<&ChildRelationship> {
        self.child_relationships.iter().find(|r| {
            r.relationship_name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }
}

/// Description of a Salesforce field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescribe {
    /// API name (e.g., "AccountId", "Custom_Field__c")
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: SalesforceFieldType,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default = "default_nillable")]
    pub nillable: bool,
    #[serde(default)]
    pub external_id: bool,
    /// Objects a reference field may point to; more than one means polymorphic
    #[serde(default)]
    pub reference_to: Vec<String>,
    /// Relationship name for parent traversal (e.g., "Account" for AccountId)
    #[serde(default)]
    pub relationship_name: Option<String>,
    #[serde(default)]
    pub inline_help_text: Option<String>,
}

fn default_nillable() -> bool {
    true
}

impl FieldDescribe {
    /// Create a read-only, nillable field labelled with its API name
    pub fn new(name: impl Into<String>, field_type: SalesforceFieldType) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            field_type,
            createable: false,
            updateable: false,
            nillable: true,
            external_id: false,
            reference_to: Vec::new(),
            relationship_name: None,
            inline_help_text: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set createable and updateable
    pub fn with_access(mut self, createable: bool, updateable: bool) -> Self {
        self.createable = createable;
        self.updateable = updateable;
        self
    }

    /// Shorthand for a field that can be both created and updated
    pub fn editable(self) -> Self {
        self.with_access(true, true)
    }

    pub fn with_nillable(mut self, nillable: bool) -> Self {
        self.nillable = nillable;
        self
    }

    pub fn with_external_id(mut self, external_id: bool) -> Self {
        self.external_id = external_id;
        self
    }

    /// Set this as a lookup to a single object
    pub fn with_reference(mut self, reference_to: impl Into<String>) -> Self {
        self.reference_to = vec![reference_to.into()];
        self
    }

    /// Set this as a polymorphic lookup
    pub fn with_polymorphic_reference(mut self, reference_to: Vec<String>) -> Self {
        self.reference_to = reference_to;
        self
    }

    pub fn with_relationship_name(mut self, name: impl Into<String>) -> Self {
        self.relationship_name = Some(name.into());
        self
    }

    pub fn with_help_text(mut self, text: impl Into<String>) -> Self {
        self.inline_help_text = Some(text.into());
        self
    }

    /// Check if this is a relationship field
    pub fn is_relationship(&self) -> bool {
        self.field_type == SalesforceFieldType::Reference
    }

    /// A lookup that may point at more than one object type
    pub fn is_polymorphic(&self) -> bool {
        self.reference_to.len() > 1
    }
}

/// Child relationship (for subqueries like SELECT ... FROM Contacts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRelationship {
    /// Relationship name used in SOQL (e.g., "Contacts"); some system relationships have none
    #[serde(default)]
    pub relationship_name: Option<String>,
    /// Child object API name (e.g., "Contact")
    #[serde(rename = "childSObject")]
    pub child_object: String,
    /// Field on child object (e.g., "AccountId")
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub deprecated_and_hidden: bool,
}

impl ChildRelationship {
    pub fn new(
        relationship_name: impl Into<String>,
        child_object: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            relationship_name: Some(relationship_name.into()),
            child_object: child_object.into(),
            field: field.into(),
            deprecated_and_hidden: false,
        }
    }

    /// A relationship without a name, which cannot be traversed in SOQL
    pub fn unnamed(child_object: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            relationship_name: None,
            child_object: child_object.into(),
            field: field.into(),
            deprecated_and_hidden: false,
        }
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated_and_hidden = true;
        self
    }
}

/// Salesforce field types as reported by describe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SalesforceFieldType {
    Id,
    String,
    TextArea,
    Boolean,
    Int,
    Integer,
    Double,
    Currency,
    Percent,
    Date,
    DateTime,
    Time,
    Phone,
    Email,
    Url,
    Picklist,
    MultiPicklist,
    Combobox,
    Reference,
    Address,
    Location,
    Base64,
    EncryptedString,
    AnyType,
    /// A type this crate does not know yet, kept verbatim
    Other(String),
}

impl SalesforceFieldType {
    /// Describe wire name (e.g., "datetime", "anyType")
    pub fn as_str(&self) -> &str {
        match self {
            SalesforceFieldType::Id => "id",
            SalesforceFieldType::String => "string",
            SalesforceFieldType::TextArea => "textarea",
            SalesforceFieldType::Boolean => "boolean",
            SalesforceFieldType::Int => "int",
            SalesforceFieldType::Integer => "integer",
            SalesforceFieldType::Double => "double",
            SalesforceFieldType::Currency => "currency",
            SalesforceFieldType::Percent => "percent",
            SalesforceFieldType::Date => "date",
            SalesforceFieldType::DateTime => "datetime",
            SalesforceFieldType::Time => "time",
            SalesforceFieldType::Phone => "phone",
            SalesforceFieldType::Email => "email",
            SalesforceFieldType::Url => "url",
            SalesforceFieldType::Picklist => "picklist",
            SalesforceFieldType::MultiPicklist => "multipicklist",
            SalesforceFieldType::Combobox => "combobox",
            SalesforceFieldType::Reference => "reference",
            SalesforceFieldType::Address => "address",
            SalesforceFieldType::Location => "location",
            SalesforceFieldType::Base64 => "base64",
            SalesforceFieldType::EncryptedString => "encryptedstring",
            SalesforceFieldType::AnyType => "anyType",
            SalesforceFieldType::Other(name) => name,
        }
    }

    /// Member name of the runtime's `SalesforceFieldType` enum (e.g., "DATETIME")
    pub fn enum_member(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl From<&str> for SalesforceFieldType {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "id" => SalesforceFieldType::Id,
            "string" => SalesforceFieldType::String,
            "textarea" => SalesforceFieldType::TextArea,
            "boolean" => SalesforceFieldType::Boolean,
            "int" => SalesforceFieldType::Int,
            "integer" => SalesforceFieldType::Integer,
            "double" => SalesforceFieldType::Double,
            "currency" => SalesforceFieldType::Currency,
            "percent" => SalesforceFieldType::Percent,
            "date" => SalesforceFieldType::Date,
            "datetime" => SalesforceFieldType::DateTime,
            "time" => SalesforceFieldType::Time,
            "phone" => SalesforceFieldType::Phone,
            "email" => SalesforceFieldType::Email,
            "url" => SalesforceFieldType::Url,
            "picklist" => SalesforceFieldType::Picklist,
            "multipicklist" => SalesforceFieldType::MultiPicklist,
            "combobox" => SalesforceFieldType::Combobox,
            "reference" => SalesforceFieldType::Reference,
            "address" => SalesforceFieldType::Address,
            "location" => SalesforceFieldType::Location,
            "base64" => SalesforceFieldType::Base64,
            "encryptedstring" => SalesforceFieldType::EncryptedString,
            "anytype" => SalesforceFieldType::AnyType,
            _ => SalesforceFieldType::Other(value.to_string()),
        }
    }
}

impl From<String> for SalesforceFieldType {
    fn from(value: String) -> Self {
        SalesforceFieldType::from(value.as_str())
    }
}

impl From<SalesforceFieldType> for String {
    fn from(value: SalesforceFieldType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for SalesforceFieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
