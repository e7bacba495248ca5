//! End-to-end behaviour of the table handle.

use std::cell::Cell;
use std::rc::Rc;
use sylph_database::{
    AccessPath, Condition, DataType, DefaultKind, Entity, Error, ErrorCategory, FieldDef,
    Predicate, ProviderRegistry, SchemaRule, Table, TableConfig, Value,
};

fn users_config() -> TableConfig {
    TableConfig::new("users")
        .field(
            FieldDef::new("id", DataType::Number)
                .primary_key(true)
                .auto_increment(true),
        )
        .field(FieldDef::new("name", DataType::String).unique(true))
        .field(FieldDef::new("age", DataType::Number).default_value(18))
}

#[test]
fn test_users_scenario() {
    let mut users = Table::create(&users_config()).unwrap();

    let ann = users.insert(&Entity::new().with("name", "Ann")).unwrap();
    assert_eq!(ann, Entity::new().with("id", 1).with("name", "Ann").with("age", 18));

    let bo = users
        .insert(&Entity::new().with("name", "Bo").with("age", 30))
        .unwrap();
    assert_eq!(bo, Entity::new().with("id", 2).with("name", "Bo").with("age", 30));

    assert_eq!(users.find(&Condition::new().eq("name", "Ann")).unwrap(), vec![ann]);
    assert_eq!(
        users
            .find(&Condition::new().with("age", Predicate::between(20, 40).unwrap()))
            .unwrap(),
        vec![bo.clone()]
    );
    assert_eq!(users.get_by_pk(&Value::from(2)), Some(bo));
    assert_eq!(users.len(), 2);
}

#[test]
fn test_schema_rejection() {
    let no_pk = TableConfig::new("t").field(FieldDef::new("a", DataType::Number));
    let two_pk = TableConfig::new("t")
        .field(FieldDef::new("a", DataType::Number).primary_key(true))
        .field(FieldDef::new("b", DataType::Number).primary_key(true));
    let ai_not_pk = TableConfig::new("t")
        .field(FieldDef::new("a", DataType::Number).primary_key(true))
        .field(FieldDef::new("b", DataType::Number).auto_increment(true));
    let ai_string = TableConfig::new("t").field(
        FieldDef::new("a", DataType::String)
            .primary_key(true)
            .auto_increment(true),
    );

    for (config, rule) in [
        (no_pk, SchemaRule::MissingPrimaryKey),
        (two_pk, SchemaRule::DuplicatePrimaryKey),
        (ai_not_pk, SchemaRule::AutoIncrementWithoutPrimaryKey),
        (ai_string, SchemaRule::AutoIncrementNotNumber),
    ] {
        match Table::create(&config) {
            Err(e @ Error::Schema { .. }) => {
                assert_eq!(e.category(), ErrorCategory::Schema);
                assert!(matches!(e, Error::Schema { rule: r, .. } if r == rule));
            }
            other => panic!("Expected schema error, got {:?}", other.map(|t| t.len())),
        }
    }
}

#[test]
fn test_provider_invoked_per_insert() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let providers = ProviderRegistry::new().with("answer", move || {
        seen.set(seen.get() + 1);
        Ok(Value::from(42))
    });
    let config = TableConfig::new("t")
        .field(
            FieldDef::new("id", DataType::Number)
                .primary_key(true)
                .auto_increment(true),
        )
        .field(
            FieldDef::new("age", DataType::Number)
                .default_kind(DefaultKind::Provider("answer".into())),
        );
    let mut table = Table::create_with_providers(&config, providers).unwrap();
    let after_create = calls.get();

    let first = table.insert(&Entity::new()).unwrap();
    let second = table.insert(&Entity::new()).unwrap();
    assert_eq!(first.get("age"), Some(&Value::from(42)));
    assert_eq!(second.get("age"), Some(&Value::from(42)));
    assert_eq!(calls.get(), after_create + 2);
}

#[test]
fn test_unregistered_provider_rejected_at_create() {
    let config = TableConfig::new("t")
        .field(FieldDef::new("id", DataType::Number).primary_key(true))
        .field(
            FieldDef::new("sku", DataType::String)
                .default_kind(DefaultKind::Provider("next_sku".into())),
        );
    assert!(matches!(
        Table::create(&config),
        Err(Error::Schema { rule: SchemaRule::UnknownProvider, .. })
    ));
}

#[test]
fn test_generated_defaults() {
    let config = TableConfig::new("events")
        .field(
            FieldDef::new("key", DataType::String)
                .primary_key(true)
                .default_kind(DefaultKind::RandomUuid),
        )
        .field(FieldDef::new("at", DataType::Date).default_kind(DefaultKind::CurrentTimestamp));
    let mut events = Table::create(&config).unwrap();
    let a = events.insert(&Entity::new()).unwrap();
    let b = events.insert(&Entity::new()).unwrap();
    assert_ne!(a.get("key"), b.get("key"));
    assert!(a.get("at").and_then(Value::as_date).is_some());
    assert!(b.get("at").unwrap().as_date() >= a.get("at").unwrap().as_date());
}

#[test]
fn test_uniqueness() {
    let config = TableConfig::new("accounts")
        .field(
            FieldDef::new("id", DataType::Number)
                .primary_key(true)
                .auto_increment(true),
        )
        .field(FieldDef::new("email", DataType::String).unique(true));
    let mut accounts = Table::create(&config).unwrap();
    accounts.insert(&Entity::new().with("email", "b@x.com")).unwrap();
    accounts.insert(&Entity::new().with("email", "a@x.com")).unwrap();
    match accounts.insert(&Entity::new().with("email", "a@x.com")) {
        Err(e @ Error::DuplicateUniqueValue { row: Some(1), .. }) => {
            assert_eq!(e.category(), ErrorCategory::Integrity);
            assert!(e.to_string().contains("(row 1)"));
        }
        other => panic!("Expected duplicate unique value, got {:?}", other),
    }
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts.auto_increment_counter(), 2);
}

#[test]
fn test_validation_errors_leave_table_unchanged() {
    let mut users = Table::create(&users_config()).unwrap();
    users.insert(&Entity::new().with("name", "Ann")).unwrap();

    let bad = [
        Entity::new().with("name", 5),
        Entity::new(),
        Entity::new().with("name", "Cy").with("email", "c@x.com"),
        Entity::new().with("name", Value::Null),
    ];
    for entity in &bad {
        let err = users.insert(entity).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation, "{}", err);
    }
    assert_eq!(users.len(), 1);
    assert_eq!(users.auto_increment_counter(), 1);
}

#[test]
fn test_query_validation() {
    let users = Table::create(&users_config()).unwrap();
    assert!(matches!(users.find(&Condition::new()), Err(Error::EmptyCondition)));
    assert!(matches!(
        users.find(&Condition::new().eq("email", "x")),
        Err(Error::UnknownField { .. })
    ));
    assert!(matches!(
        users.find(&Condition::new().eq("age", "old")),
        Err(Error::ConditionTypeMismatch { .. })
    ));
    assert!(matches!(Predicate::between(40, 20), Err(Error::InvalidInterval { .. })));
    assert!(matches!(Predicate::in_list(Vec::<Value>::new()), Err(Error::EmptyArray)));
    assert!(matches!(Predicate::greater_than("x"), Err(Error::NotComparable { .. })));
}

#[test]
fn test_operators_through_table() {
    let config = TableConfig::new("people")
        .field(
            FieldDef::new("id", DataType::Number)
                .primary_key(true)
                .auto_increment(true),
        )
        .field(FieldDef::new("email", DataType::String).unique(true))
        .field(FieldDef::new("city", DataType::String).index(true))
        .field(FieldDef::new("age", DataType::Number).nullable(true));
    let mut people = Table::create(&config).unwrap();
    for (email, city, age) in [
        ("ann@x.com", "Oslo", Value::from(31)),
        ("bo@y.com", "Rome", Value::from(17)),
        ("cy@x.com", "Oslo", Value::Null),
        ("di@z.com", "Lima", Value::from(45)),
    ] {
        people
            .insert(&Entity::new().with("email", email).with("city", city).with("age", age))
            .unwrap();
    }

    let ids = |cond: Condition| -> Vec<Value> {
        people
            .find(&cond)
            .unwrap()
            .iter()
            .filter_map(|e| e.get("id").cloned())
            .collect()
    };

    assert_eq!(
        ids(Condition::new().with("email", Predicate::like("%@x.com").unwrap())),
        vec![Value::from(1), Value::from(3)]
    );
    assert_eq!(
        ids(Condition::new().with("city", Predicate::in_list(["Rome", "Lima"]).unwrap())),
        vec![Value::from(2), Value::from(4)]
    );
    assert_eq!(
        ids(Condition::new().with("age", Predicate::not_between(18, 40).unwrap())),
        vec![Value::from(2), Value::from(4)]
    );
    assert_eq!(
        ids(Condition::new().eq("city", "Oslo").with("age", Predicate::greater_than_or_equal(30).unwrap())),
        vec![Value::from(1)]
    );
    assert_eq!(
        ids(Condition::new().eq("age", Value::Null)),
        vec![Value::from(3)]
    );

    assert!(matches!(
        people.explain(&Condition::new().eq("city", "Oslo")).unwrap(),
        AccessPath::IndexProbe { candidates: 2, .. }
    ));
    assert_eq!(people.count(&Condition::new().eq("city", "Oslo")).unwrap(), 2);
    assert_eq!(
        people
            .find_one(&Condition::new().with("city", Predicate::not_equal("Oslo")))
            .unwrap()
            .and_then(|e| e.get("id").cloned()),
        Some(Value::from(2))
    );
}
