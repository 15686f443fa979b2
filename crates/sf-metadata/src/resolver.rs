//! Resolve user-supplied keys to metadata types.
//!
//! A key may be a registry key (`apexclass`), a canonical XML type name
//! (`EmailTemplate`), a deploy-root folder name (`classes`) or one of the
//! pluralized aliases of the foldered types (`reports`). Matching is
//! case-insensitive and the passes run in that fixed order, so the first
//! pass that matches wins regardless of registry order.

use crate::error::{Error, ErrorKind, Result};
use crate::registry::{self, MetadataTypeEntry};

/// Plural aliases for foldered types whose folder name is not the plural.
const ALIASES: &[(&str, &str)] = &[
    ("documents", "document"),
    ("emails", "email"),
    ("reports", "report"),
    ("dashboards", "dashboard"),
];

/// Resolve a key to its registry entry.
///
/// Returns [`ErrorKind::UnknownType`] carrying the key as given when nothing
/// matches.
pub fn lookup(key: &str) -> Result<&'static MetadataTypeEntry> {
    find(key).ok_or_else(|| Error::new(ErrorKind::UnknownType(key.to_string())))
}

/// Resolve a key to its canonical XML type name.
pub fn resolve(key: &str) -> Option<&'static str> {
    find(key).map(|e| e.xml_type)
}

fn find(key: &str) -> Option<&'static MetadataTypeEntry> {
    let key = key.to_lowercase();
    let entries = registry::entries();

    if let Some(e) = registry::get(&key) {
        return Some(e);
    }
    if let Some(e) = entries.iter().find(|e| e.xml_type.to_lowercase() == key) {
        return Some(e);
    }
    if let Some(e) = entries
        .iter()
        .find(|e| e.folder.is_some_and(|f| f.to_lowercase() == key))
    {
        return Some(e);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .and_then(|(_, target)| registry::get(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registry_key_resolves_to_its_type() {
        for e in registry::entries() {
            assert_eq!(resolve(e.key), Some(e.xml_type), "key {}", e.key);
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("ApexClass"), Some("ApexClass"));
        assert_eq!(resolve("APEXCLASS"), Some("ApexClass"));
        assert_eq!(resolve("CustomObject"), Some("CustomObject"));
    }

    #[test]
    fn test_resolve_by_xml_type_name() {
        assert_eq!(resolve("EmailTemplate"), Some("EmailTemplate"));
    }

    #[test]
    fn test_resolve_by_folder() {
        assert_eq!(resolve("classes"), Some("ApexClass"));
        assert_eq!(resolve("Objects"), Some("CustomObject"));
        assert_eq!(resolve("staticresources"), Some("StaticResource"));
        assert_eq!(resolve("labels"), Some("CustomLabels"));
        assert_eq!(resolve("weblinks"), Some("CustomPageWebLink"));
    }

    #[test]
    fn test_plural_aliases_match_singular_entries() {
        for (plural, singular) in [
            ("documents", "document"),
            ("emails", "email"),
            ("reports", "report"),
            ("dashboards", "dashboard"),
        ] {
            assert_eq!(resolve(plural), resolve(singular), "alias {}", plural);
            assert!(resolve(plural).is_some());
        }
        assert_eq!(resolve("emails"), Some("EmailTemplate"));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(resolve("UnknownType"), None);
        assert_eq!(resolve(""), None);

        let err = lookup("UnknownType").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownType(ref k) if k == "UnknownType"));
    }

    #[test]
    fn test_lookup_returns_entry() {
        let e = lookup("triggers").unwrap();
        assert_eq!(e.key, "apextrigger");
        assert_eq!(e.suffix, Some("trigger"));
    }
}
