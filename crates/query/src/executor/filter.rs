//! Condition evaluation over candidate rows.

use super::scan::Candidates;
use crate::ast::Condition;
use crate::planner::{plan, AccessPath};
use alloc::vec::Vec;
use sylph_core::{Entity, Result, Row};
use sylph_storage::RowStore;

/// Returns the access path that `find` would use for a condition.
pub fn explain(store: &RowStore, condition: &Condition) -> Result<AccessPath> {
    let bound = condition.bind(store.schema())?;
    Ok(plan(store, &bound))
}

/// Returns every matching row, in insertion order.
pub fn find_rows<'a>(store: &'a RowStore, condition: &Condition) -> Result<Vec<&'a Row>> {
    let bound = condition.bind(store.schema())?;
    let path = plan(store, &bound);
    Ok(Candidates::open(store, &path)
        .filter(|row| bound.matches(row))
        .collect())
}

/// Returns every matching row as an entity, in insertion order.
pub fn find(store: &RowStore, condition: &Condition) -> Result<Vec<Entity>> {
    Ok(find_rows(store, condition)?
        .into_iter()
        .map(|row| store.to_entity(row))
        .collect())
}

/// Returns the first matching row as an entity.
pub fn find_one(store: &RowStore, condition: &Condition) -> Result<Option<Entity>> {
    let bound = condition.bind(store.schema())?;
    let path = plan(store, &bound);
    Ok(Candidates::open(store, &path)
        .find(|row| bound.matches(row))
        .map(|row| store.to_entity(row)))
}

/// Counts matching rows.
pub fn count(store: &RowStore, condition: &Condition) -> Result<usize> {
    let bound = condition.bind(store.schema())?;
    let path = plan(store, &bound);
    Ok(Candidates::open(store, &path)
        .filter(|row| bound.matches(row))
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Predicate;
    use alloc::vec;
    use sylph_core::schema::{FieldDef, LiteralResolver, TableConfig, TableSchema};
    use sylph_core::{DataType, Error, Value};

    fn users() -> RowStore {
        let config = TableConfig::new("users")
            .field(
                FieldDef::new("id", DataType::Number)
                    .primary_key(true)
                    .auto_increment(true),
            )
            .field(FieldDef::new("email", DataType::String).unique(true))
            .field(FieldDef::new("name", DataType::String))
            .field(FieldDef::new("age", DataType::Number).index(true));
        let schema = TableSchema::normalize(&config, &LiteralResolver).unwrap();
        let mut store = RowStore::new(schema);
        for (email, name, age) in [
            ("ann@x.com", "Ann", 30),
            ("bo@y.com", "Bo", 25),
            ("cy@x.com", "Cy", 30),
        ] {
            let entity = Entity::new()
                .with("email", email)
                .with("name", name)
                .with("age", age);
            store.insert(&entity, &LiteralResolver).unwrap();
        }
        store
    }

    fn names(found: &[Entity]) -> Vec<&Value> {
        found.iter().filter_map(|e| e.get("name")).collect()
    }

    #[test]
    fn test_find_by_unique() {
        let store = users();
        let found = find(&store, &Condition::new().eq("email", "bo@y.com")).unwrap();
        assert_eq!(names(&found), vec![&Value::from("Bo")]);

        let found = find(&store, &Condition::new().eq("email", "no@x.com")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_unique_probe_rechecks_other_terms() {
        let store = users();
        let cond = Condition::new().eq("email", "bo@y.com").eq("age", 30);
        assert!(find(&store, &cond).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_index() {
        let store = users();
        let cond = Condition::new().eq("age", 30);
        assert!(matches!(
            explain(&store, &cond).unwrap(),
            AccessPath::IndexProbe { candidates: 2, .. }
        ));
        let found = find(&store, &cond).unwrap();
        assert_eq!(names(&found), vec![&Value::from("Ann"), &Value::from("Cy")]);
    }

    #[test]
    fn test_find_by_scan() {
        let store = users();
        let cond = Condition::new().with("email", Predicate::like("%@x.com").unwrap());
        assert_eq!(explain(&store, &cond).unwrap(), AccessPath::FullScan);
        let found = find(&store, &cond).unwrap();
        assert_eq!(names(&found), vec![&Value::from("Ann"), &Value::from("Cy")]);
    }

    #[test]
    fn test_find_one_and_count() {
        let store = users();
        let cond = Condition::new().with("age", Predicate::between(20, 40).unwrap());
        assert_eq!(count(&store, &cond).unwrap(), 3);
        let first = find_one(&store, &cond).unwrap().unwrap();
        assert_eq!(first.get("id"), Some(&Value::from(1)));

        let cond = Condition::new().with("age", Predicate::greater_than(99).unwrap());
        assert_eq!(find_one(&store, &cond).unwrap(), None);
        assert_eq!(count(&store, &cond).unwrap(), 0);
    }

    #[test]
    fn test_invalid_condition() {
        let store = users();
        assert!(matches!(
            find(&store, &Condition::new()),
            Err(Error::EmptyCondition)
        ));
        assert!(matches!(
            count(&store, &Condition::new().eq("age", "old")),
            Err(Error::ConditionTypeMismatch { .. })
        ));
    }
}
