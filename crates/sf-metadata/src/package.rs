//! Package manifests (package.xml).

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::resolver;

/// Metadata API namespace of the `Package` root element.
pub const PACKAGE_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

/// File name of a package manifest inside a deploy root.
pub const PACKAGE_XML: &str = "package.xml";

/// File name of a destructive changes manifest inside a deploy root.
pub const DESTRUCTIVE_CHANGES_XML: &str = "destructiveChanges.xml";

/// User-supplied package contents: type or folder key mapped to members.
///
/// Entries keep the order they were added or deserialized in, so the same
/// configuration always produces the same manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSpec {
    entries: Vec<(String, Vec<String>)>,
}

impl PackageSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key with its members.
    pub fn add(mut self, key: impl Into<String>, members: Vec<String>) -> Self {
        self.insert(key, members);
        self
    }

    /// Insert a key with its members. An existing key keeps its position
    /// and has its members replaced.
    pub fn insert(&mut self, key: impl Into<String>, members: Vec<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = members,
            None => self.entries.push((key, members)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, m)| (k.as_str(), m.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for PackageSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = PackageSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of metadata type to member names")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<PackageSpec, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut spec = PackageSpec::new();
                while let Some((key, members)) = map.next_entry::<String, Vec<String>>()? {
                    spec.insert(key, members);
                }
                Ok(spec)
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

/// Package manifest (package.xml).
///
/// Type names are resolved through the registry when the manifest is built
/// from a [`PackageSpec`]. Member names are written as given; names holding
/// XML-reserved characters produce an invalid document.
#[derive(Debug, Clone, Default)]
pub struct PackageManifest {
    pub full_name: Option<String>,
    pub types: Vec<PackageTypeMembers>,
    pub version: String,
}

impl PackageManifest {
    /// Create a new package manifest with the given API version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            full_name: None,
            types: Vec::new(),
            version: version.into(),
        }
    }

    /// Set the package full name.
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    /// Add a metadata type with its members.
    pub fn add_type(mut self, name: impl Into<String>, members: Vec<String>) -> Self {
        self.types.push(PackageTypeMembers {
            name: name.into(),
            members,
        });
        self
    }

    /// Build a manifest from a package spec, resolving every key.
    ///
    /// Fails on the first key that does not resolve; no partial manifest is
    /// produced.
    pub fn from_spec(spec: &PackageSpec, full_name: Option<&str>, version: &str) -> Result<Self> {
        let mut manifest = Self::new(version);
        manifest.full_name = full_name.map(str::to_string);
        for (key, members) in spec.iter() {
            let entry = resolver::lookup(key)?;
            manifest = manifest.add_type(entry.xml_type, members.to_vec());
        }
        Ok(manifest)
    }

    /// Render the manifest document.
    pub fn to_xml(&self) -> String {
        let mut lines = vec![
            r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
            format!(r#"<Package xmlns="{}">"#, PACKAGE_NAMESPACE),
        ];

        if let Some(name) = &self.full_name {
            lines.push(format!("    <fullName>{}</fullName>", name));
        }

        for type_members in &self.types {
            lines.push("    <types>".to_string());
            for member in &type_members.members {
                lines.push(format!("        <members>{}</members>", member));
            }
            lines.push(format!("        <name>{}</name>", type_members.name));
            lines.push("    </types>".to_string());
        }

        lines.push(format!("    <version>{}</version>", self.version));
        lines.push("</Package>".to_string());
        lines.join("\n")
    }
}

/// Type members in a package manifest.
#[derive(Debug, Clone)]
pub struct PackageTypeMembers {
    pub name: String,
    pub members: Vec<String>,
}

/// Build the package.xml text for a spec.
pub fn build_package_xml(
    spec: &PackageSpec,
    package_name: Option<&str>,
    api_version: &str,
) -> Result<String> {
    Ok(PackageManifest::from_spec(spec, package_name, api_version)?.to_xml())
}

/// The two manifests of a destructive deployment.
///
/// `package` is an empty manifest (nothing to deploy) and
/// `destructive_changes` lists the components to delete.
#[derive(Debug, Clone)]
pub struct DestructiveManifests {
    pub package: String,
    pub destructive_changes: String,
}

impl DestructiveManifests {
    pub fn build(spec: &PackageSpec, api_version: &str) -> Result<Self> {
        Ok(Self {
            package: build_package_xml(&PackageSpec::new(), None, api_version)?,
            destructive_changes: build_package_xml(spec, None, api_version)?,
        })
    }
}
