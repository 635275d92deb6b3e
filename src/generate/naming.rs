//! Identifier derivation from Salesforce API names
//!
//! Every function here is pure. The class index resolves class names before any
//! describe call and the mapper resolves them again later, so both passes must
//! agree.

use crate::config::SObjectConfig;

/// Suffix appended to scalar foreign-key properties
pub const FOREIGN_KEY_SUFFIX: &str = "Id";

/// Suffix of a generated class's property contract
pub const CONTRACT_SUFFIX: &str = "Fields";

/// Custom object, relationship and compound-component suffixes
const API_SUFFIXES: [&str; 3] = ["__c", "__r", "__s"];

/// Convert an API name to a capitalized compound identifier
///
/// `My_Test_Object__c` -> `MyTestObject`, `My__Test_Object__r` -> `MyTestObject`
pub fn clean_api_name(api_name: &str) -> String {
    let base = API_SUFFIXES
        .iter()
        .find_map(|suffix| api_name.strip_suffix(suffix))
        .unwrap_or(api_name);

    base.split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Class name generated for an SObject
pub fn resolve_class_name(config: &SObjectConfig) -> String {
    if config.auto_convert_names {
        clean_api_name(&config.api_name)
    } else {
        config.api_name.clone()
    }
}

/// Property name generated for a field or relationship of `config`'s object
///
/// An explicit mapping always wins. Under the naming convention, scalar
/// reference fields get [`FOREIGN_KEY_SUFFIX`] so they never collide with the
/// relationship property derived from the same lookup.
pub fn resolve_field_name(config: &SObjectConfig, api_name: &str, is_reference: bool) -> String {
    if let Some(mapping) = config.mapping_for(api_name) {
        return mapping.prop_name.clone();
    }

    if !config.auto_convert_names {
        return api_name.to_string();
    }

    let mut name = lower_first(&clean_api_name(api_name));
    if is_reference && !api_name.ends_with(FOREIGN_KEY_SUFFIX) {
        name.push_str(FOREIGN_KEY_SUFFIX);
    }
    name
}

/// Name of the read-only property contract paired with a class
pub fn contract_name(class_name: &str) -> String {
    format!("{}{}", class_name, CONTRACT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_api_name() {
        assert_eq!(clean_api_name("My_Test_Object__c"), "MyTestObject");
        assert_eq!(clean_api_name("My_Test_Relation__r"), "MyTestRelation");
        assert_eq!(clean_api_name("My__Test_Object__r"), "MyTestObject");
        assert_eq!(clean_api_name("Location__Latitude__s"), "LocationLatitude");
        assert_eq!(clean_api_name("AccountId"), "AccountId");
        assert_eq!(clean_api_name("name"), "Name");
    }

    #[test]
    fn test_class_name_follows_convention_flag() {
        assert_eq!(resolve_class_name(&SObjectConfig::new("Property__c")), "Property");
        assert_eq!(resolve_class_name(&SObjectConfig::verbatim("Property__c")), "Property__c");
    }

    #[test]
    fn test_field_name_convention() {
        let config = SObjectConfig::new("Parent");
        assert_eq!(resolve_field_name(&config, "Some_Field__c", false), "someField");
        assert_eq!(resolve_field_name(&config, "Name", false), "name");
        assert_eq!(resolve_field_name(&config, "AccountId", true), "accountId");
        assert_eq!(resolve_field_name(&config, "Parent__c", true), "parentId");
        assert_eq!(resolve_field_name(&config, "Parent__r", false), "parent");
    }

    #[test]
    fn test_field_name_verbatim() {
        let config = SObjectConfig::verbatim("Parent");
        assert_eq!(resolve_field_name(&config, "Some_Field__c", false), "Some_Field__c");
        assert_eq!(resolve_field_name(&config, "Parent__c", true), "Parent__c");
    }

    #[test]
    fn test_mapping_precedence() {
        for auto in [true, false] {
            let config = SObjectConfig::new("Contact")
                .with_auto_convert(auto)
                .with_mapping("Name", "fullName");
            assert_eq!(resolve_field_name(&config, "NAME", false), "fullName");
            assert_eq!(resolve_field_name(&config, "name", true), "fullName");
        }
    }

    #[test]
    fn test_contract_name() {
        assert_eq!(contract_name("Account"), "AccountFields");
    }
}
