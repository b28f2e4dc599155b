use crate::{AzureResourceId, PathSegment, ResourceIdError};

const SERVER_ID: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.AnalysisServices/servers/srv1";

fn segment(key: &str, value: &str) -> PathSegment {
    PathSegment {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

#[test]
fn parse_extracts_privileged_segments() {
    let id = AzureResourceId::parse(SERVER_ID).unwrap();
    assert_eq!(id.subscription_id, "00000000-0000-0000-0000-000000000000");
    assert_eq!(id.resource_group, "resGroup1");
    assert_eq!(id.provider, "Microsoft.AnalysisServices");
    assert_eq!(id.path, vec![segment("servers", "srv1")]);
}

#[test]
fn parse_ignores_trailing_slash() {
    let id = AzureResourceId::parse(&format!("{SERVER_ID}/")).unwrap();
    assert_eq!(id.path, vec![segment("servers", "srv1")]);
}

#[test]
fn parse_accepts_lower_case_resource_group_key() {
    let id = AzureResourceId::parse("/subscriptions/sub/resourcegroups/group1").unwrap();
    assert_eq!(id.resource_group, "group1");
    assert!(id.path.is_empty());
}

#[test]
fn parse_without_resource_group() {
    let id = AzureResourceId::parse("/subscriptions/sub/providers/Microsoft.Foo/widgets/w1")
        .unwrap();
    assert_eq!(id.resource_group, "");
    assert_eq!(id.path, vec![segment("widgets", "w1")]);
}

#[test]
fn parse_keeps_second_subscriptions_pair_in_path() {
    let id = AzureResourceId::parse("/subscriptions/a/resourceGroups/g/subscriptions/b").unwrap();
    assert_eq!(id.subscription_id, "a");
    assert_eq!(id.path, vec![segment("subscriptions", "b")]);
}

#[test]
fn parse_rejects_malformed_ids() {
    assert_eq!(
        AzureResourceId::parse(""),
        Err(ResourceIdError::NotAbsolute(String::new()))
    );
    assert!(matches!(
        AzureResourceId::parse("subscriptions/sub"),
        Err(ResourceIdError::NotAbsolute(_))
    ));
    assert!(matches!(
        AzureResourceId::parse("/"),
        Err(ResourceIdError::OddSegmentCount(_))
    ));
    assert!(matches!(
        AzureResourceId::parse("/subscriptions"),
        Err(ResourceIdError::OddSegmentCount(_))
    ));
    assert!(matches!(
        AzureResourceId::parse("/subscriptions//resourceGroups/g"),
        Err(ResourceIdError::EmptySegment { .. })
    ));
    assert!(matches!(
        AzureResourceId::parse("/resourceGroups/g"),
        Err(ResourceIdError::MissingSubscription(_))
    ));
}

#[test]
fn parse_is_case_sensitive() {
    assert!(matches!(
        AzureResourceId::parse(&SERVER_ID.to_uppercase()),
        Err(ResourceIdError::MissingSubscription(_))
    ));
}

#[test]
fn pop_segment_consumes_first_occurrence() {
    let mut id =
        AzureResourceId::parse("/subscriptions/sub/resourceGroups/g/things/a/things/b").unwrap();
    assert_eq!(id.pop_segment("things").unwrap(), "a");
    assert_eq!(id.pop_segment("things").unwrap(), "b");
    assert_eq!(
        id.pop_segment("things"),
        Err(ResourceIdError::MissingSegment("things".to_owned()))
    );
}

#[test]
fn pop_segment_is_case_sensitive() {
    let mut id = AzureResourceId::parse(SERVER_ID).unwrap();
    assert!(id.pop_segment("Servers").is_err());
    assert_eq!(id.pop_segment("servers").unwrap(), "srv1");
}

#[test]
fn validate_rejects_unconsumed_segments() {
    let mut id = AzureResourceId::parse(&format!("{SERVER_ID}/databases/db1")).unwrap();
    id.pop_segment("servers").unwrap();

    let err = id.validate_no_empty_segments("original").unwrap_err();
    assert_eq!(
        err,
        ResourceIdError::UnexpectedSegments {
            source_id: "original".to_owned(),
            remaining: "databases/db1".to_owned(),
        }
    );

    id.pop_segment("databases").unwrap();
    id.validate_no_empty_segments("original").unwrap();
}

#[test]
fn display_lists_components() {
    let id = AzureResourceId::parse(SERVER_ID).unwrap();
    assert_eq!(
        id.to_string(),
        "subscription=00000000-0000-0000-0000-000000000000 resourceGroup=resGroup1 provider=Microsoft.AnalysisServices servers=srv1"
    );
}
