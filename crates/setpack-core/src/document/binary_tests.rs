use indoc::indoc;

use super::*;

#[test]
fn roundtrip() {
    let json = indoc! {r#"
        {
            "structs": {
                "Child": { "fields": [{ "name": "flag", "type": "bool" }] },
                "Settings": {
                    "top_level": true,
                    "fields": [
                        { "name": "version", "type": "u32" },
                        { "name": "size", "type": "u64" },
                        { "name": "child", "type": { "ref": "Child" } }
                    ]
                }
            },
            "roots": [
                {
                    "struct": "Settings",
                    "fields": {
                        "version": "3.1.2",
                        "size": 18446744073709551615,
                        "child": { "struct": "Child", "fields": { "flag": false } }
                    }
                }
            ]
        }
    "#};

    let doc = Document::from_json(json).unwrap();
    let binary = doc.to_binary().unwrap();
    let decoded = Document::from_binary(&binary).unwrap();

    assert_eq!(doc, decoded);
    assert_eq!(
        decoded.roots[0].get("size"),
        Some(&DocValue::Int(u64::MAX as i128))
    );
}

#[test]
fn truncated_binary_is_rejected() {
    let doc = Document {
        structs: vec![DocStruct {
            name: "S".to_string(),
            top_level: true,
            fields: vec![DocField {
                name: "version".to_string(),
                ty: FieldType::U32,
            }],
        }],
        roots: Vec::new(),
    };
    let binary = doc.to_binary().unwrap();

    let err = Document::from_binary(&binary[..binary.len() - 1]).unwrap_err();
    assert!(matches!(err, DocumentError::Binary(_)));
}
