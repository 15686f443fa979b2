//! Static registry of known metadata types.
//!
//! Keys are lowercase and unique. Most keys are the lowercased XML type name;
//! a few (`email`) follow the directory the Ant Migration Tool uses instead.
//! Child types (custom fields, list views, workflow rules, ...) have no
//! folder of their own.

use serde::Serialize;

/// A metadata type known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetadataTypeEntry {
    /// Lowercase registry key.
    pub key: &'static str,
    /// Canonical XML type name used in `package.xml`.
    pub xml_type: &'static str,
    /// Directory name inside a deploy root.
    pub folder: Option<&'static str>,
    /// File suffix of the component files.
    pub suffix: Option<&'static str>,
    /// Components live inside user-defined folders.
    pub in_folder: bool,
    /// Components carry a `-meta.xml` companion file.
    pub meta_file: bool,
}

const fn entry(
    key: &'static str,
    xml_type: &'static str,
    folder: &'static str,
    suffix: &'static str,
) -> MetadataTypeEntry {
    MetadataTypeEntry {
        key,
        xml_type,
        folder: Some(folder),
        suffix: Some(suffix),
        in_folder: false,
        meta_file: false,
    }
}

const fn with_meta(mut e: MetadataTypeEntry) -> MetadataTypeEntry {
    e.meta_file = true;
    e
}

const fn foldered(mut e: MetadataTypeEntry) -> MetadataTypeEntry {
    e.in_folder = true;
    e
}

const fn no_suffix(mut e: MetadataTypeEntry) -> MetadataTypeEntry {
    e.suffix = None;
    e
}

const fn child(key: &'static str, xml_type: &'static str) -> MetadataTypeEntry {
    MetadataTypeEntry {
        key,
        xml_type,
        folder: None,
        suffix: None,
        in_folder: false,
        meta_file: false,
    }
}

static REGISTRY: &[MetadataTypeEntry] = &[
    entry("analyticsnapshot", "AnalyticSnapshot", "analyticSnapshots", "snapshot"),
    with_meta(entry("apexclass", "ApexClass", "classes", "cls")),
    with_meta(entry("apexcomponent", "ApexComponent", "components", "component")),
    with_meta(entry("apexpage", "ApexPage", "pages", "page")),
    with_meta(entry("apextrigger", "ApexTrigger", "triggers", "trigger")),
    entry("approvalprocess", "ApprovalProcess", "approvalProcesses", "approvalProcess"),
    entry("assignmentrules", "AssignmentRules", "assignmentRules", "assignmentRules"),
    entry("authprovider", "AuthProvider", "authproviders", "authprovider"),
    entry("autoresponserules", "AutoResponseRules", "autoResponseRules", "autoResponseRules"),
    entry("callcenter", "CallCenter", "callCenters", "callCenter"),
    entry("community", "Community", "communities", "community"),
    entry("connectedapp", "ConnectedApp", "connectedApps", "connectedApp"),
    entry("customapplication", "CustomApplication", "applications", "app"),
    entry(
        "customapplicationcomponent",
        "CustomApplicationComponent",
        "customApplicationComponents",
        "customApplicationComponent",
    ),
    entry("customlabels", "CustomLabels", "labels", "labels"),
    entry("customobject", "CustomObject", "objects", "object"),
    entry(
        "customobjecttranslation",
        "CustomObjectTranslation",
        "objectTranslations",
        "objectTranslation",
    ),
    entry("custompageweblink", "CustomPageWebLink", "weblinks", "weblink"),
    entry("customsite", "CustomSite", "sites", "site"),
    entry("customtab", "CustomTab", "tabs", "tab"),
    foldered(entry("dashboard", "Dashboard", "dashboards", "dashboard")),
    entry("datacategorygroup", "DataCategoryGroup", "datacategorygroups", "datacategorygroup"),
    with_meta(foldered(no_suffix(entry("document", "Document", "documents", "")))),
    with_meta(foldered(entry("email", "EmailTemplate", "email", "email"))),
    entry(
        "entitlementprocess",
        "EntitlementProcess",
        "entitlementProcesses",
        "entitlementProcess",
    ),
    entry(
        "entitlementtemplate",
        "EntitlementTemplate",
        "entitlementTemplates",
        "entitlementTemplate",
    ),
    entry("escalationrules", "EscalationRules", "escalationRules", "escalationRules"),
    entry("flexipage", "FlexiPage", "flexipages", "flexipage"),
    entry("flow", "Flow", "flows", "flow"),
    entry("group", "Group", "groups", "group"),
    entry("homepagecomponent", "HomePageComponent", "homePageComponents", "homePageComponent"),
    entry("homepagelayout", "HomePageLayout", "homePageLayouts", "homePageLayout"),
    entry("installedpackage", "InstalledPackage", "installedPackages", "installedPackage"),
    entry("layout", "Layout", "layouts", "layout"),
    entry("letterhead", "Letterhead", "letterhead", "letter"),
    entry("permissionset", "PermissionSet", "permissionsets", "permissionset"),
    entry("portal", "Portal", "portals", "portal"),
    entry("profile", "Profile", "profiles", "profile"),
    entry("queue", "Queue", "queues", "queue"),
    entry("quickaction", "QuickAction", "quickActions", "quickAction"),
    entry("remotesitesetting", "RemoteSiteSetting", "remoteSiteSettings", "remoteSite"),
    foldered(entry("report", "Report", "reports", "report")),
    entry("reporttype", "ReportType", "reportTypes", "reportType"),
    entry("role", "Role", "roles", "role"),
    entry("samlssoconfig", "SamlSsoConfig", "samlssoconfigs", "samlssoconfig"),
    with_meta(entry("scontrol", "Scontrol", "scontrols", "scf")),
    entry("settings", "Settings", "settings", "settings"),
    entry("sharingrules", "SharingRules", "sharingRules", "sharingRules"),
    entry("sitedotcom", "SiteDotCom", "siteDotComSites", "site"),
    with_meta(entry("staticresource", "StaticResource", "staticresources", "resource")),
    entry(
        "synonymdictionary",
        "SynonymDictionary",
        "synonymDictionaries",
        "synonymDictionary",
    ),
    entry("territory", "Territory", "territories", "territory"),
    entry("translations", "Translations", "translations", "translation"),
    entry("workflow", "Workflow", "workflows", "workflow"),
    child("businessprocess", "BusinessProcess"),
    child("compactlayout", "CompactLayout"),
    child("customfield", "CustomField"),
    child("customlabel", "CustomLabel"),
    child("fieldset", "FieldSet"),
    child("listview", "ListView"),
    child("recordtype", "RecordType"),
    child("sharingreason", "SharingReason"),
    child("validationrule", "ValidationRule"),
    child("weblink", "WebLink"),
    child("workflowalert", "WorkflowAlert"),
    child("workflowfieldupdate", "WorkflowFieldUpdate"),
    child("workflowoutboundmessage", "WorkflowOutboundMessage"),
    child("workflowrule", "WorkflowRule"),
    child("workflowtask", "WorkflowTask"),
];

/// All registry entries, in registry order.
pub fn entries() -> &'static [MetadataTypeEntry] {
    REGISTRY
}

/// Look up an entry by its exact (lowercase) registry key.
pub fn get(key: &str) -> Option<&'static MetadataTypeEntry> {
    REGISTRY.iter().find(|e| e.key == key)
}
