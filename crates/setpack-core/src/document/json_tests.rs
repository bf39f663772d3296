use super::*;

const SETTINGS: &str = r#"{
    "structs": {
        "Child": {
            "fields": [
                { "name": "version", "type": "u32" },
                { "name": "flag", "type": "u8" }
            ]
        },
        "Settings": {
            "top_level": true,
            "fields": [
                { "name": "version", "type": "u32" },
                { "name": "count", "type": "u32" },
                { "name": "child", "type": { "ref": "Child" } }
            ]
        }
    },
    "roots": [
        {
            "struct": "Settings",
            "fields": {
                "version": "2.3",
                "count": 5,
                "child": { "struct": "Child", "fields": { "version": "2.3", "flag": 1 } }
            }
        }
    ]
}"#;

#[test]
fn parse_structs_in_order() {
    let doc = Document::from_json(SETTINGS).unwrap();

    assert_eq!(doc.structs.len(), 2);
    assert_eq!(doc.structs[0].name, "Child");
    assert!(!doc.structs[0].top_level);
    assert_eq!(doc.structs[1].name, "Settings");
    assert!(doc.structs[1].top_level);
    assert_eq!(
        doc.structs[1].fields[2].ty,
        FieldType::Ref("Child".to_string())
    );
}

#[test]
fn parse_root_values() {
    let doc = Document::from_json(SETTINGS).unwrap();
    let root = &doc.roots[0];

    assert_eq!(root.struct_name, "Settings");
    assert_eq!(root.get("version"), Some(&DocValue::Version("2.3".to_string())));
    assert_eq!(root.get("count"), Some(&DocValue::Int(5)));

    let Some(DocValue::Record(child)) = root.get("child") else {
        panic!("expected nested record");
    };
    assert_eq!(child.struct_name, "Child");
    assert_eq!(child.get("flag"), Some(&DocValue::Int(1)));
}

#[test]
fn field_value_order_preserved() {
    let doc = Document::from_json(SETTINGS).unwrap();
    let names: Vec<_> = doc.roots[0].fields.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["version", "count", "child"]);
}

#[test]
fn null_bool_and_negative_values() {
    let json = r#"{
        "structs": {},
        "roots": [{ "struct": "S", "fields": { "a": null, "b": true, "c": -1 } }]
    }"#;
    let doc = Document::from_json(json).unwrap();
    let root = &doc.roots[0];

    assert_eq!(root.get("a"), Some(&DocValue::Null));
    assert_eq!(root.get("b"), Some(&DocValue::Bool(true)));
    assert_eq!(root.get("c"), Some(&DocValue::Int(-1)));
}

#[test]
fn roots_default_to_empty() {
    let doc = Document::from_json(r#"{ "structs": {} }"#).unwrap();
    assert!(doc.roots.is_empty());
}

#[test]
fn reject_fractional_number() {
    let json = r#"{
        "structs": {},
        "roots": [{ "struct": "S", "fields": { "ratio": 0.5 } }]
    }"#;
    let err = Document::from_json(json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "field `ratio` of `S`: `0.5` is not an integer"
    );
}

#[test]
fn reject_array_value() {
    let json = r#"{
        "structs": {},
        "roots": [{ "struct": "S", "fields": { "list": [1, 2] } }]
    }"#;
    let err = Document::from_json(json).unwrap_err();
    assert!(matches!(err, DocumentError::InvalidValue { .. }));
}

#[test]
fn reject_unknown_field_type() {
    let json = r#"{
        "structs": { "S": { "fields": [{ "name": "x", "type": "f32" }] } }
    }"#;
    let err = Document::from_json(json).unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
}

#[test]
fn reject_duplicate_struct_name() {
    let json = r#"{
        "structs": {
            "S": { "fields": [{ "name": "a", "type": "u8" }] },
            "S": { "fields": [{ "name": "b", "type": "u16" }] }
        }
    }"#;
    let err = Document::from_json(json).unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
    assert!(err.to_string().contains("duplicate key `S`"));
}

#[test]
fn reject_duplicate_field_value() {
    let json = r#"{
        "structs": {},
        "roots": [{ "struct": "S", "fields": { "a": 1, "a": 2 } }]
    }"#;
    let err = Document::from_json(json).unwrap_err();
    assert!(err.to_string().contains("duplicate key `a`"));
}

#[test]
fn reject_duplicate_field_value_in_nested_record() {
    let json = r#"{
        "structs": {},
        "roots": [{
            "struct": "S",
            "fields": { "child": { "struct": "C", "fields": { "flag": 0, "flag": 1 } } }
        }]
    }"#;
    let err = Document::from_json(json).unwrap_err();
    assert!(err.to_string().contains("duplicate key `flag`"));
}

#[test]
fn root_name_is_optional() {
    let json = r#"{
        "structs": {},
        "roots": [
            { "struct": "S", "name": "factory", "fields": {} },
            { "struct": "S", "fields": {} }
        ]
    }"#;
    let doc = Document::from_json(json).unwrap();
    assert_eq!(doc.roots[0].name.as_deref(), Some("factory"));
    assert_eq!(doc.roots[1].name, None);
}
