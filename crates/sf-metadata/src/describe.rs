//! Describe metadata results.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::log;

/// Result of an Ant `describeMetadata` run, grouped under `types`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeMetadataResult {
    pub types: Vec<Map<String, Value>>,
}

/// Parse the describe result log written by the Ant task.
///
/// Each record keeps the log's own field names (`XMLName`, `DirName`,
/// `Suffix`, `HasMetaFile`, `InFolder`, `ChildObjects`, ...). `true` and
/// `false` become booleans. `ChildObjects` is always a list with the
/// `*`-prefixed placeholder entries removed.
pub fn parse_describe_log(text: &str) -> DescribeMetadataResult {
    let types = log::records(text)
        .into_iter()
        .map(|fields| {
            fields
                .into_iter()
                .map(|(key, value)| {
                    let value = if key == "ChildObjects" {
                        child_objects(value)
                    } else {
                        scalar(value)
                    };
                    (key.to_string(), value)
                })
                .collect()
        })
        .collect();
    DescribeMetadataResult { types }
}

fn child_objects(value: &str) -> Value {
    Value::Array(
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty() && !part.starts_with('*'))
            .map(|part| Value::String(part.to_string()))
            .collect(),
    )
}

fn scalar(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
************************************************************
XMLName: ApexClass
DirName: classes
Suffix: cls
HasMetaFile: true
InFolder: false
ChildObjects: *
************************************************************
XMLName: CustomObject
DirName: objects
Suffix: object
HasMetaFile: false
InFolder: false
ChildObjects: CustomField,ListView,*,WebLink
************************************************************
XMLName: Workflow
ChildObjects: WorkflowAlert
************************************************************
";

    #[test]
    fn test_parse_describe_log() {
        let result = parse_describe_log(LOG);
        assert_eq!(result.types.len(), 3);

        let apex = &result.types[0];
        assert_eq!(apex["XMLName"], "ApexClass");
        assert_eq!(apex["DirName"], "classes");
        assert_eq!(apex["HasMetaFile"], true);
        assert_eq!(apex["InFolder"], false);
        assert_eq!(apex["ChildObjects"], serde_json::json!([]));

        let object = &result.types[1];
        assert_eq!(
            object["ChildObjects"],
            serde_json::json!(["CustomField", "ListView", "WebLink"])
        );

        assert_eq!(result.types[2]["ChildObjects"], serde_json::json!(["WorkflowAlert"]));
    }

    #[test]
    fn test_describe_json_shape() {
        let result = parse_describe_log("XMLName: Flow\nInFolder: false\n");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"types": [{"XMLName": "Flow", "InFolder": false}]})
        );
    }

    #[test]
    fn test_empty_log() {
        let result = parse_describe_log("");
        assert!(result.types.is_empty());
        assert_eq!(serde_json::to_value(&result).unwrap(), serde_json::json!({"types": []}));
    }
}
