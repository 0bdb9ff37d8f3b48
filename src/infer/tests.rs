//! Type inference tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn infer_one(value: &Value) -> TypeLabel {
    let mut registry = TypeRegistry::new();
    TypeInferrer::new().infer(value, &mut registry)
}

#[test_case(json!("hello"), "string")]
#[test_case(json!(42), "number")]
#[test_case(json!(2.5), "number")]
#[test_case(json!(true), "boolean")]
#[test_case(json!(false), "boolean")]
fn test_infer_primitives(value: Value, expected: &str) {
    assert_eq!(infer_one(&value), expected);
}

#[test]
fn test_primitives_ignore_options() {
    let mut registry = TypeRegistry::new();
    let inferrer = TypeInferrer::new()
        .with_nullable(true)
        .with_strict(true)
        .with_sample_size(1)
        .with_max_depth(1);

    assert_eq!(inferrer.infer(&json!("x"), &mut registry), "string");
    assert_eq!(inferrer.infer(&json!(7), &mut registry), "number");
    assert_eq!(inferrer.infer(&json!(true), &mut registry), "boolean");
}

#[test]
fn test_infer_null() {
    let mut registry = TypeRegistry::new();

    let default = TypeInferrer::new();
    assert_eq!(default.infer(&Value::Null, &mut registry), "any");

    let nullable = TypeInferrer::new().with_nullable(true);
    assert_eq!(nullable.infer(&Value::Null, &mut registry), "null");
}

#[test]
fn test_infer_empty_array() {
    assert_eq!(infer_one(&json!([])), "any[]");

    // Options don't change the empty-array result
    let mut registry = TypeRegistry::new();
    let inferrer = TypeInferrer::new().with_strict(true).with_nullable(true);
    assert_eq!(inferrer.infer(&json!([]), &mut registry), "any[]");
}

#[test]
fn test_infer_homogeneous_arrays() {
    assert_eq!(infer_one(&json!([1, 2, 3])), "number[]");
    assert_eq!(infer_one(&json!(["a", "b", "c"])), "string[]");
    assert_eq!(infer_one(&json!([true, false])), "boolean[]");
}

#[test]
fn test_infer_mixed_array_strict() {
    let mut registry = TypeRegistry::new();
    let inferrer = TypeInferrer::new().with_strict(true);

    // Union order is first-seen, duplicates collapsed
    let result = inferrer.infer(&json!([1, "a", true, "b", 2]), &mut registry);
    assert_eq!(result, "(number | string | boolean)[]");
}

#[test]
fn test_infer_mixed_array_default_collapses_to_any() {
    let mut registry = TypeRegistry::new();
    let inferrer = TypeInferrer::new().with_strict(false);
    assert_eq!(inferrer.infer(&json!([1, "a", true]), &mut registry), "any[]");

    // strict is off by default
    assert_eq!(infer_one(&json!([1, "a", true])), "any[]");
}

#[test]
fn test_array_sampling_bounds_the_scan() {
    let mut registry = TypeRegistry::new();
    let inferrer = TypeInferrer::new().with_sample_size(5);

    let numbers: Vec<Value> = (0..100).map(|i| json!(i)).collect();
    assert_eq!(
        inferrer.infer(&Value::Array(numbers), &mut registry),
        "number[]"
    );

    // Elements past the sample prefix are never inspected: a string at
    // index 5 does not disturb the label.
    let mut tail_mixed: Vec<Value> = (0..5).map(|i| json!(i)).collect();
    tail_mixed.push(json!("surprise"));
    assert_eq!(
        inferrer.infer(&Value::Array(tail_mixed), &mut registry),
        "number[]"
    );
}

#[test]
fn test_extract_fields_simple_object() {
    let value = json!({
        "name": "John",
        "age": 30,
        "active": true
    });

    let mut registry = TypeRegistry::new();
    let obj = value.as_object().unwrap();
    let shape = TypeInferrer::new().extract_fields(obj, "User", &mut registry);

    assert_eq!(shape.name, "User");
    assert_eq!(shape.get("name"), Some("string"));
    assert_eq!(shape.get("age"), Some("number"));
    assert_eq!(shape.get("active"), Some("boolean"));
}

#[test]
fn test_extract_fields_preserves_key_order() {
    let value = json!({
        "zeta": 1,
        "alpha": "x",
        "mid": true
    });

    let mut registry = TypeRegistry::new();
    let obj = value.as_object().unwrap();
    let shape = TypeInferrer::new().extract_fields(obj, "Ordered", &mut registry);

    let keys: Vec<&str> = shape.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_nested_object_registers_shape() {
    let value = json!({
        "user": {
            "name": "John",
            "profile": {
                "avatar": "url"
            }
        }
    });

    let mut registry = TypeRegistry::new();
    let obj = value.as_object().unwrap();
    let shape = TypeInferrer::new().extract_fields(obj, "Root", &mut registry);

    // The field references a named record derived from the key
    assert_eq!(shape.get("user"), Some("User"));

    // The registry holds a shape with the nested object's fields
    let registered = registry.get("User").unwrap();
    assert_eq!(registered.get("name"), Some("string"));
    assert_eq!(registered.get("profile"), Some("Profile"));

    let profile = registry.get("Profile").unwrap();
    assert_eq!(profile.get("avatar"), Some("string"));
}

#[test]
fn test_arrays_of_primitives_in_object() {
    let value = json!({
        "tags": ["tag1", "tag2"],
        "scores": [1, 2, 3]
    });

    let mut registry = TypeRegistry::new();
    let obj = value.as_object().unwrap();
    let shape = TypeInferrer::new().extract_fields(obj, "Data", &mut registry);

    assert_eq!(shape.get("tags"), Some("string[]"));
    assert_eq!(shape.get("scores"), Some("number[]"));
}

#[test]
fn test_empty_object_label() {
    assert_eq!(infer_one(&json!({})), "object");
}

#[test]
fn test_depth_guard_truncates_deep_nesting() {
    let value = json!({
        "a": { "b": { "c": { "d": { "e": 1 } } } }
    });

    let mut registry = TypeRegistry::new();
    let inferrer = TypeInferrer::new().with_max_depth(2);
    let obj = value.as_object().unwrap();
    inferrer.extract_fields(obj, "Root", &mut registry);

    // `a` sits at depth 1, `b` at depth 2; the guard fires inside `b`
    let b = registry.get("B").unwrap();
    assert_eq!(b.get("c"), Some("any"));
}

#[test]
fn test_depth_exceeded_field_does_not_abort_siblings() {
    let value = json!({
        "deep": { "x": { "y": { "z": 1 } } },
        "flat": "ok",
        "count": 3
    });

    let mut registry = TypeRegistry::new();
    let inferrer = TypeInferrer::new().with_max_depth(1);
    let obj = value.as_object().unwrap();
    let shape = inferrer.extract_fields(obj, "Root", &mut registry);

    // The collapsed field resolves to a label and the siblings still infer
    assert_eq!(shape.get("flat"), Some("string"));
    assert_eq!(shape.get("count"), Some("number"));
    let deep = registry.get("Deep").unwrap();
    assert_eq!(deep.get("x"), Some("any"));
}

#[test]
fn test_fresh_pass_retains_nothing() {
    let inferrer = TypeInferrer::new();

    let first = inferrer.infer_document(&json!({"settings": {"theme": "dark"}}), "Root");
    assert!(first.registry.get("Settings").is_some());

    let second = inferrer.infer_document(&json!({"flag": true}), "Root");
    assert!(second.registry.is_empty());
    assert!(second.registry.get("Settings").is_none());
}

#[test]
fn test_registry_clear() {
    let mut registry = TypeRegistry::new();
    registry.register(RecordShape::new("Widget").with_field("id", "number"));
    assert_eq!(registry.len(), 1);

    registry.clear();
    assert!(registry.is_empty());
    assert_eq!(registry.collisions(), 0);
}

#[test]
fn test_registry_keeps_registration_order() {
    let mut registry = TypeRegistry::new();
    registry.register(RecordShape::new("Beta"));
    registry.register(RecordShape::new("Alpha"));
    registry.register(RecordShape::new("Gamma"));

    let names: Vec<&str> = registry.shapes().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha", "Gamma"]);
}

#[test]
fn test_name_collision_last_writer_wins() {
    let value = json!({
        "first": { "data": { "alpha": 1 } },
        "second": { "data": { "beta": "x" } }
    });

    let mut registry = TypeRegistry::new();
    let obj = value.as_object().unwrap();
    TypeInferrer::new().extract_fields(obj, "Root", &mut registry);

    // Both nested objects derive the name `Data`; the later shape wins
    let data = registry.get("Data").unwrap();
    assert_eq!(data.get("beta"), Some("string"));
    assert!(data.get("alpha").is_none());
    assert_eq!(registry.collisions(), 1);
}

#[test]
fn test_reregistering_identical_shape_is_not_a_collision() {
    let mut registry = TypeRegistry::new();
    let shape = RecordShape::new("Point")
        .with_field("x", "number")
        .with_field("y", "number");

    registry.register(shape.clone());
    registry.register(shape);
    assert_eq!(registry.collisions(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_root_document_wrapping() {
    let inferrer = TypeInferrer::new();

    let result = inferrer.infer_document(&json!([1, 2, 3]), "Root");
    assert_eq!(result.root.name, "Root");
    assert_eq!(result.root.get("root"), Some("number[]"));
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn test_user_heuristic_requires_all_three_keys() {
    let namer = HeuristicNamer;

    assert_eq!(
        namer.derive_name(&["id", "name", "email"], "account"),
        "User"
    );
    assert_eq!(
        namer.derive_name(&["email", "id", "extra", "name"], ""),
        "User"
    );
    assert_eq!(namer.derive_name(&["id", "name"], "account"), "Entity");
}

#[test]
fn test_entity_heuristic() {
    let namer = HeuristicNamer;
    assert_eq!(namer.derive_name(&["id", "total"], "order"), "Entity");
}

#[test]
fn test_parent_key_naming() {
    let namer = HeuristicNamer;
    assert_eq!(namer.derive_name(&["avatar"], "profile"), "Profile");
    assert_eq!(namer.derive_name(&["avatar"], ""), "Object");
}

#[test_case("profile", "Profile")]
#[test_case("user_name", "User_name")]
#[test_case("x", "X")]
#[test_case("", "")]
fn test_capitalize(input: &str, expected: &str) {
    assert_eq!(capitalize(input), expected);
}

#[test_case("Profile", "Profile")]
#[test_case("Content-Type", "ContentType")]
#[test_case("2fa", "_2fa")]
#[test_case("!!!", "Object")]
fn test_sanitize_identifier(input: &str, expected: &str) {
    assert_eq!(sanitize_identifier(input), expected);
}

// ============================================================================
// Memoization
// ============================================================================

#[test]
fn test_memo_cache_hit_skips_recomputation() {
    let inferrer = TypeInferrer::new();
    let mut registry = TypeRegistry::new();
    let mut cache = MemoCache::new();

    let value = json!({"settings": {"theme": "dark"}});

    let first = inferrer.infer_cached(&value, &mut registry, &mut cache);
    let registered = registry.len();

    let second = inferrer.infer_cached(&value, &mut registry, &mut cache);
    assert_eq!(first, second);
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);

    // A hit returns the label verbatim without re-registering shapes
    assert_eq!(registry.len(), registered);
}

#[test]
fn test_structural_hash_sensitive_to_options() {
    let value = json!([1, "a"]);

    let default = TypeInferrer::new();
    let strict = TypeInferrer::new().with_strict(true);

    assert_eq!(structural_hash(&value, &default), structural_hash(&value, &default));
    assert_ne!(structural_hash(&value, &default), structural_hash(&value, &strict));
}

#[test]
fn test_structural_hash_sensitive_to_value() {
    let inferrer = TypeInferrer::new();
    assert_ne!(
        structural_hash(&json!({"a": 1}), &inferrer),
        structural_hash(&json!({"a": 2}), &inferrer)
    );
    assert_ne!(
        structural_hash(&json!(1), &inferrer),
        structural_hash(&json!(1.5), &inferrer)
    );
}

#[test]
fn test_memo_cache_eviction_is_bounded() {
    let mut cache = MemoCache::with_capacity(2);
    cache.put(1, "string".to_string());
    cache.put(2, "number".to_string());
    cache.put(3, "boolean".to_string());

    assert_eq!(cache.len(), 2);
    assert!(cache.get(1).is_none());
    assert_eq!(cache.get(3), Some(&"boolean".to_string()));
}
