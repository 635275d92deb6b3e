//! Cross-reference index of the classes generated in one run

use indexmap::IndexMap;

use super::naming::{contract_name, resolve_class_name};
use crate::config::SObjectConfig;

/// Class and contract names of every configured SObject
///
/// Built from the configuration alone, before any describe is fetched, so
/// a class may reference another one generated later in the run.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    /// class name -> contract name, in configuration order
    contracts: IndexMap<String, String>,
    /// lower-cased API name -> class name and config
    objects: IndexMap<String, IndexedObject>,
}

#[derive(Debug, Clone)]
struct IndexedObject {
    class_name: String,
    config: SObjectConfig,
}

impl ClassIndex {
    pub fn build(configs: &[SObjectConfig]) -> Self {
        let mut index = Self::default();
        for config in configs {
            let class_name = resolve_class_name(config);
            index
                .contracts
                .insert(class_name.clone(), contract_name(&class_name));
            index.objects.insert(
                config.api_name.to_lowercase(),
                IndexedObject {
                    class_name,
                    config: config.clone(),
                },
            );
        }
        index
    }

    /// Contract paired with a generated class
    pub fn contract_for(&self, class_name: &str) -> Option<&str> {
        self.contracts.get(class_name).map(String::as_str)
    }

    /// Class generated for an SObject API name (case-insensitive)
    pub fn class_for(&self, api_name: &str) -> Option<&str> {
        self.target_for(api_name).map(|(class_name, _)| class_name)
    }

    /// Class and config of a configured SObject (case-insensitive)
    pub fn target_for(&self, api_name: &str) -> Option<(&str, &SObjectConfig)> {
        self.objects
            .get(&api_name.to_lowercase())
            .map(|o| (o.class_name.as_str(), &o.config))
    }

    /// Whether an SObject is part of this run
    pub fn is_configured(&self, api_name: &str) -> bool {
        self.objects.contains_key(&api_name.to_lowercase())
    }

    /// (class, contract) pairs in configuration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.contracts.iter().map(|(c, i)| (c.as_str(), i.as_str()))
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
