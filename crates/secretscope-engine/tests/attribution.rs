use secretscope_core::{
    secret_events, AuditEvent, ConsumerCategory, EventResource, EventsByName, IdentityKind,
    SessionContext, UserIdentity,
};
use secretscope_engine::{actual_consumers, attribute, sort_consumers};

const SECRET_ARN: &str = "arn:aws:secretsmanager:us-east-1:111122223333:secret:mydb-AbCdEf";

fn event(id: &str, time: &str, identity: UserIdentity, resource_name: &str) -> AuditEvent {
    AuditEvent {
        external_id: id.to_string(),
        event_name: secret_events::GET_SECRET_VALUE.to_string(),
        event_source: "secretsmanager.amazonaws.com".to_string(),
        event_time: time.parse().unwrap(),
        username: String::new(),
        resources: vec![EventResource {
            resource_type: "AWS::SecretsManager::Secret".to_string(),
            resource_name: resource_name.to_string(),
        }],
        user_identity: identity,
        source_ip_address: "198.51.100.7".to_string(),
        user_agent: "aws-cli/2.15".to_string(),
        request_parameters: "null".to_string(),
        response_elements: "null".to_string(),
        event_category: "Management".to_string(),
    }
}

fn iam_user(principal_id: &str, user_name: &str) -> UserIdentity {
    UserIdentity {
        kind: IdentityKind::IamUser,
        principal_id: principal_id.to_string(),
        arn: format!("arn:aws:iam::111122223333:user/{user_name}"),
        user_name: user_name.to_string(),
        access_key_id: "AKIAEXAMPLE".to_string(),
        ..Default::default()
    }
}

fn assumed_role(principal_id: &str) -> UserIdentity {
    UserIdentity {
        kind: IdentityKind::AssumedRole,
        principal_id: principal_id.to_string(),
        arn: "arn:aws:sts::111122223333:assumed-role/app-role/session".to_string(),
        session_context: Some(SessionContext::default()),
        ..Default::default()
    }
}

#[test]
fn direct_identity_uses_principal_id_and_user_name() {
    let events = vec![event(
        "e1",
        "2026-07-01T08:00:00Z",
        iam_user("AIDAEXAMPLE", "alice"),
        SECRET_ARN,
    )];

    let consumers = attribute(&events, "mydb");
    assert_eq!(consumers.len(), 1);
    let c = &consumers[0];
    assert_eq!(c.external_id, "AIDAEXAMPLE");
    assert_eq!(c.name, "alice");
    assert_eq!(c.category, ConsumerCategory::Human);
    assert_eq!(c.kind, "AWS IAM User");
    assert_eq!(c.external_resource_name, "arn:aws:iam::111122223333:user/alice");
    assert_eq!(c.access_key_id, "AKIAEXAMPLE");
}

#[test]
fn role_identity_uses_resolved_entity_for_id_and_name() {
    let events = vec![event(
        "e1",
        "2026-07-01T08:00:00Z",
        assumed_role("AROAEXAMPLE:app-session"),
        SECRET_ARN,
    )];

    let consumers = attribute(&events, "mydb");
    assert_eq!(consumers.len(), 1);
    assert_eq!(consumers[0].external_id, "app-session");
    assert_eq!(consumers[0].name, "app-session");
}

#[test]
fn role_without_session_context_is_skipped_batch_continues() {
    let mut broken = assumed_role("AROAEXAMPLE:ghost");
    broken.session_context = None;

    let events = vec![
        event("e1", "2026-07-01T08:00:00Z", broken, SECRET_ARN),
        event(
            "e2",
            "2026-07-01T09:00:00Z",
            iam_user("AIDAEXAMPLE", "alice"),
            SECRET_ARN,
        ),
    ];

    let consumers = attribute(&events, "mydb");
    assert_eq!(consumers.len(), 1);
    assert_eq!(consumers[0].external_id, "AIDAEXAMPLE");
}

#[test]
fn later_event_wins_regardless_of_input_order() {
    let older = event(
        "e1",
        "2026-07-01T08:00:00Z",
        iam_user("AIDAEXAMPLE", "alice"),
        SECRET_ARN,
    );
    let mut newer = event(
        "e2",
        "2026-07-02T10:00:00Z",
        iam_user("AIDAEXAMPLE", "alice"),
        SECRET_ARN,
    );
    newer.source_ip_address = "203.0.113.9".to_string();

    for events in [
        vec![older.clone(), newer.clone()],
        vec![newer.clone(), older.clone()],
    ] {
        let consumers = attribute(&events, "mydb");
        assert_eq!(consumers.len(), 1);
        assert_eq!(
            consumers[0].accessed_resource_at,
            newer.event_time,
            "the most recent access must win"
        );
    }
}

#[test]
fn equal_timestamp_does_not_replace_stored_consumer() {
    let first = event(
        "e1",
        "2026-07-01T08:00:00Z",
        iam_user("AIDAEXAMPLE", "alice"),
        SECRET_ARN,
    );
    let mut second = first.clone();
    second.external_id = "e2".to_string();
    second.user_identity.access_key_id = "AKIAOTHER".to_string();

    let consumers = attribute(&[first, second], "mydb");
    assert_eq!(consumers.len(), 1);
    // Replacement requires a strictly later timestamp.
    assert_eq!(consumers[0].access_key_id, "AKIAEXAMPLE");
}

#[test]
fn events_for_other_secrets_are_filtered_out() {
    let events = vec![
        event(
            "e1",
            "2026-07-01T08:00:00Z",
            iam_user("AIDAEXAMPLE", "alice"),
            "arn:aws:secretsmanager:us-east-1:111122223333:secret:otherdb-XyZabc",
        ),
        event(
            "e2",
            "2026-07-01T09:00:00Z",
            iam_user("AIDAOTHER", "bob"),
            SECRET_ARN,
        ),
    ];

    let consumers = attribute(&events, "mydb");
    assert_eq!(consumers.len(), 1);
    assert_eq!(consumers[0].external_id, "AIDAOTHER");
}

#[test]
fn attribute_is_idempotent() {
    let events = vec![
        event(
            "e1",
            "2026-07-01T08:00:00Z",
            iam_user("AIDAEXAMPLE", "alice"),
            SECRET_ARN,
        ),
        event(
            "e2",
            "2026-07-02T10:00:00Z",
            assumed_role("AROAEXAMPLE:app-session"),
            SECRET_ARN,
        ),
    ];

    let mut first = attribute(&events, "mydb");
    let mut second = attribute(&events, "mydb");
    sort_consumers(&mut first);
    sort_consumers(&mut second);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.external_id, b.external_id);
        assert_eq!(a.accessed_resource_at, b.accessed_resource_at);
    }
}

#[test]
fn empty_events_yield_empty_result() {
    assert!(attribute(&[], "mydb").is_empty());
}

#[test]
fn actual_consumers_reads_the_get_secret_value_bucket() {
    let mut events_by_name = EventsByName::new();
    events_by_name.insert(
        secret_events::GET_SECRET_VALUE.to_string(),
        vec![event(
            "e1",
            "2026-07-01T08:00:00Z",
            iam_user("AIDAEXAMPLE", "alice"),
            SECRET_ARN,
        )],
    );

    assert_eq!(actual_consumers(&events_by_name, "mydb").len(), 1);
    assert!(actual_consumers(&EventsByName::new(), "mydb").is_empty());
}

#[test]
fn sort_consumers_orders_by_external_id() {
    let events = vec![
        event(
            "e1",
            "2026-07-01T08:00:00Z",
            iam_user("AIDA-B", "bob"),
            SECRET_ARN,
        ),
        event(
            "e2",
            "2026-07-01T09:00:00Z",
            iam_user("AIDA-A", "alice"),
            SECRET_ARN,
        ),
    ];

    let mut consumers = attribute(&events, "mydb");
    sort_consumers(&mut consumers);
    let ids: Vec<&str> = consumers.iter().map(|c| c.external_id.as_str()).collect();
    assert_eq!(ids, ["AIDA-A", "AIDA-B"]);
}
