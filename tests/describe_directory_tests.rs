//! Reading saved describe results from disk

use std::fs;

use sobgen::{DescribeDirectory, DescribeFetcher, FetchError, SalesforceFieldType};
use tempfile::TempDir;

const WIDGET_DESCRIBE: &str = r#"{
    "name": "Widget__c",
    "label": "Widget",
    "fields": [
        { "name": "Id", "label": "Record ID", "type": "id", "nillable": false },
        {
            "name": "Owner__c",
            "label": "Owner",
            "type": "reference",
            "createable": true,
            "updateable": true,
            "referenceTo": ["User"],
            "relationshipName": "Owner__r",
            "inlineHelpText": "Who owns the widget"
        },
        { "name": "Weight__c", "label": "Weight", "type": "double" }
    ],
    "childRelationships": [
        { "relationshipName": "Parts__r", "childSObject": "Part__c", "field": "Widget__c" },
        { "relationshipName": null, "childSObject": "WidgetHistory__c", "field": "ParentId" }
    ]
}"#;

fn directory_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

#[tokio::test]
async fn test_reads_exact_file_name() {
    let dir = directory_with(&[("Widget__c.json", WIDGET_DESCRIBE)]);
    let source = DescribeDirectory::new(dir.path());

    let describe = source.describe("Widget__c").await.unwrap();
    assert_eq!(describe.name, "Widget__c");
    assert_eq!(describe.fields.len(), 3);

    let owner = describe.get_field("owner__c").unwrap();
    assert_eq!(owner.field_type, SalesforceFieldType::Reference);
    assert_eq!(owner.reference_to, vec!["User".to_string()]);
    assert_eq!(owner.relationship_name.as_deref(), Some("Owner__r"));
    assert_eq!(owner.inline_help_text.as_deref(), Some("Who owns the widget"));
    assert!(owner.nillable);

    assert!(!describe.get_field("Id").unwrap().nillable);
    assert_eq!(describe.child_relationships.len(), 2);
    assert_eq!(describe.child_relationships[1].relationship_name, None);
}

#[tokio::test]
async fn test_file_name_matches_case_insensitively() {
    let dir = directory_with(&[("widget__c.JSON", WIDGET_DESCRIBE)]);
    let source = DescribeDirectory::new(dir.path());

    let describe = source.describe("Widget__c").await.unwrap();
    assert_eq!(describe.label, "Widget");
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = directory_with(&[("Widget__c.json", WIDGET_DESCRIBE), ("notes.txt", "Gadget__c")]);
    let source = DescribeDirectory::new(dir.path());

    let err = source.describe("Gadget__c").await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(ref name) if name == "Gadget__c"));
}

#[tokio::test]
async fn test_malformed_json_reports_path() {
    let dir = directory_with(&[("Broken__c.json", "{ \"name\": ")]);
    let source = DescribeDirectory::new(dir.path());

    let err = source.describe("Broken__c").await.unwrap_err();
    match err {
        FetchError::Parse { path, .. } => assert!(path.ends_with("Broken__c.json")),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = DescribeDirectory::new(dir.path().join("absent"));

    let err = source.describe("Widget__c").await.unwrap_err();
    assert!(matches!(err, FetchError::Io { .. }));
}

#[tokio::test]
async fn test_generates_from_directory() {
    let dir = directory_with(&[("Widget__c.json", WIDGET_DESCRIBE)]);
    let source = DescribeDirectory::new(dir.path());

    let output = sobgen::generate_typescript(
        vec![sobgen::SObjectConfig::new("Widget__c")],
        &source,
        sobgen::EmitOptions::default().without_imports(),
    )
    .await
    .unwrap();

    assert!(output.contains("export class Widget extends RestObject implements WidgetFields {"));
    assert!(output.contains("    public ownerId: string;\n"));
    assert!(output.contains("    public weight: number;\n"));
    assert!(output.contains("     * Who owns the widget\n"));
    // User is not generated, so the lookup has no relationship property
    assert!(!output.contains("public owner:"));
}
