//! Common metadata types.

use serde::{Deserialize, Serialize};

/// Default Metadata API version written to generated manifests.
pub const DEFAULT_API_VERSION: &str = "29.0";

/// Test level for deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestLevel {
    /// No tests run.
    NoTestRun,
    /// Run local tests only.
    RunLocalTests,
    /// Run all tests in org.
    RunAllTestsInOrg,
    /// Run specified tests.
    RunSpecifiedTests,
}

impl std::fmt::Display for TestLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestLevel::NoTestRun => write!(f, "NoTestRun"),
            TestLevel::RunLocalTests => write!(f, "RunLocalTests"),
            TestLevel::RunAllTestsInOrg => write!(f, "RunAllTestsInOrg"),
            TestLevel::RunSpecifiedTests => write!(f, "RunSpecifiedTests"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_level_display() {
        assert_eq!(TestLevel::NoTestRun.to_string(), "NoTestRun");
        assert_eq!(TestLevel::RunLocalTests.to_string(), "RunLocalTests");
        assert_eq!(TestLevel::RunAllTestsInOrg.to_string(), "RunAllTestsInOrg");
        assert_eq!(
            TestLevel::RunSpecifiedTests.to_string(),
            "RunSpecifiedTests"
        );
    }

    #[test]
    fn test_test_level_serde_uses_variant_names() {
        let level: TestLevel = serde_json::from_str("\"RunSpecifiedTests\"").unwrap();
        assert_eq!(level, TestLevel::RunSpecifiedTests);
        assert_eq!(serde_json::to_string(&TestLevel::NoTestRun).unwrap(), "\"NoTestRun\"");
    }
}
