//! List metadata results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::log;

/// A metadata component from list metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manageable_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<UserRef>,
}

/// A `Name/Id` pair naming a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRef {
    pub name: String,
    pub id: String,
}

/// Result of an Ant `listMetadata` run for one metadata type.
#[derive(Debug, Clone, Default)]
pub struct ListMetadataResult {
    pub metadata_type: String,
    pub components: Vec<MetadataComponent>,
}

impl ListMetadataResult {
    /// Components keyed by the listed metadata type.
    pub fn grouped(&self) -> BTreeMap<&str, &[MetadataComponent]> {
        BTreeMap::from([(self.metadata_type.as_str(), self.components.as_slice())])
    }
}

/// Parse the list result log written by the Ant task.
///
/// Records without any recognised field are skipped.
pub fn parse_list_log(text: &str, metadata_type: &str) -> ListMetadataResult {
    let components = log::records(text)
        .into_iter()
        .filter_map(|fields| {
            let mut component = MetadataComponent::default();
            let mut recognised = false;
            for (key, value) in fields {
                recognised |= apply_field(&mut component, key, value);
            }
            recognised.then_some(component)
        })
        .collect();

    ListMetadataResult {
        metadata_type: metadata_type.to_string(),
        components,
    }
}

fn apply_field(component: &mut MetadataComponent, key: &str, value: &str) -> bool {
    match key {
        "FileName" => component.file_name = Some(value.to_string()),
        "FullName/Id" => {
            let (name, id) = split_name_id(value);
            component.full_name = Some(name);
            component.id = Some(id);
        }
        "Manageable State" => component.manageable_state = Some(value.to_string()),
        "Namespace Prefix" => component.namespace_prefix = Some(value.to_string()),
        "Created By (Name/Id)" => component.created_by = Some(user_ref(value)),
        "Last Modified By (Name/Id)" => component.last_modified_by = Some(user_ref(value)),
        _ => return false,
    }
    true
}

/// Split `name/id` on the last slash; full names of foldered components
/// contain slashes themselves, ids never do.
fn split_name_id(value: &str) -> (String, String) {
    match value.rsplit_once('/') {
        Some((name, id)) => (name.to_string(), id.to_string()),
        None => (value.to_string(), String::new()),
    }
}

fn user_ref(value: &str) -> UserRef {
    let (name, id) = split_name_id(value);
    UserRef { name, id }
}
