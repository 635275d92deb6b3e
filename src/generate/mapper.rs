//! Field and relationship mapping
//!
//! Turns one SObject describe into the ordered property list of its generated
//! class: child relationships first, then fields in describe order.

use tracing::debug;

use super::error::{MappingError, MappingResult};
use super::index::ClassIndex;
use super::naming::resolve_field_name;
use crate::config::SObjectConfig;
use crate::declaration::{is_required, DeclaredType, FieldMetadata, PropertyDescriptor, POLYMORPHIC_TYPE};
use crate::schema::{ChildRelationship, FieldDescribe, SObjectDescribe};

/// Map a describe to the properties of its generated class
pub fn map_object(
    config: &SObjectConfig,
    describe: &SObjectDescribe,
    index: &ClassIndex,
) -> MappingResult<Vec<PropertyDescriptor>> {
    let mut props = map_children(config, &describe.child_relationships, index)?;
    props.extend(map_fields(config, &describe.fields, index)?);
    Ok(props)
}

/// One `ClassArray` property per child relationship whose child object is generated too
pub fn map_children(
    config: &SObjectConfig,
    children: &[ChildRelationship],
    index: &ClassIndex,
) -> MappingResult<Vec<PropertyDescriptor>> {
    let mut props = Vec::new();

    for child in children {
        let relationship_name = match child.relationship_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                debug!(object = %config.api_name, child = %child.child_object, "skipping unnamed child relationship");
                continue;
            }
        };

        if child.child_object.is_empty() {
            return Err(MappingError::EmptyChildObject {
                object: config.api_name.clone(),
                relationship: relationship_name.to_string(),
            });
        }

        if child.deprecated_and_hidden {
            debug!(object = %config.api_name, relationship = relationship_name, "skipping deprecated child relationship");
            continue;
        }

        // A class holding arrays of itself would recurse structurally
        if child.child_object.eq_ignore_ascii_case(&config.api_name) {
            debug!(object = %config.api_name, relationship = relationship_name, "skipping self relationship");
            continue;
        }

        let Some(child_class) = index.class_for(&child.child_object) else {
            debug!(object = %config.api_name, child = %child.child_object, "child object not generated");
            continue;
        };

        props.push(PropertyDescriptor {
            name: resolve_field_name(config, relationship_name, false),
            declared_type: DeclaredType::ClassArray(child_class.to_string()),
            metadata: FieldMetadata::relationship(relationship_name, relationship_name, child_class, true),
            docs: None,
        });
    }

    Ok(props)
}

/// Scalar properties for every field, preceded by a relationship property for
/// lookups whose target is generated too
pub fn map_fields(
    config: &SObjectConfig,
    fields: &[FieldDescribe],
    index: &ClassIndex,
) -> MappingResult<Vec<PropertyDescriptor>> {
    let mut props = Vec::new();

    for field in fields {
        if field.name.is_empty() {
            return Err(MappingError::EmptyFieldName {
                object: config.api_name.clone(),
            });
        }

        let docs = field.inline_help_text.clone();

        if let Some(relationship) = map_relationship(config, field, index, docs.clone()) {
            props.push(relationship);
        }

        props.push(PropertyDescriptor {
            name: resolve_field_name(config, &field.name, field.is_relationship()),
            declared_type: DeclaredType::for_field_type(&field.field_type),
            metadata: field_metadata(field),
            docs,
        });
    }

    Ok(props)
}

fn map_relationship(
    config: &SObjectConfig,
    field: &FieldDescribe,
    index: &ClassIndex,
    docs: Option<String>,
) -> Option<PropertyDescriptor> {
    if !field.is_relationship() {
        return None;
    }

    let relationship_name = field.relationship_name.as_deref().filter(|n| !n.is_empty())?;

    let configured_target = field.reference_to.iter().find_map(|target| index.target_for(target));
    let Some((target_class, target_config)) = configured_target else {
        debug!(object = %config.api_name, field = %field.name, "lookup target not generated");
        return None;
    };

    let (declared_type, reference) = if field.is_polymorphic() {
        (DeclaredType::Name, POLYMORPHIC_TYPE)
    } else {
        (DeclaredType::Class(target_class.to_string()), target_class)
    };

    Some(PropertyDescriptor {
        // Named with the referenced object's config
        name: resolve_field_name(target_config, relationship_name, false),
        declared_type,
        metadata: FieldMetadata::relationship(relationship_name, field.label.as_str(), reference, false),
        docs,
    })
}

/// Metadata record of a field's scalar property
pub fn field_metadata(field: &FieldDescribe) -> FieldMetadata {
    FieldMetadata {
        api_name: field.name.clone(),
        createable: field.createable,
        updateable: field.updateable,
        required: is_required(field.createable, field.updateable, field.nillable),
        external_id: field.external_id,
        child_relationship: false,
        salesforce_type: field.field_type.clone(),
        salesforce_label: field.label.clone(),
        reference: None,
    }
}
