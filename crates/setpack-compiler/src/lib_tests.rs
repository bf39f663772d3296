use indoc::indoc;
use setpack_core::Document;
use setpack_format::{Field, RecordReader, Schema};

use crate::typegen::c::Config;
use crate::{Error, LayoutError, LoadError, ValueTree, compile, compile_document};

const DOCUMENT: &str = indoc! {r#"
    {
      "structs": {
        "S": {
          "top_level": true,
          "fields": [
            { "name": "version", "type": "u32" },
            { "name": "count", "type": "u32" },
            { "name": "child", "type": { "ref": "C" } }
          ]
        },
        "C": {
          "top_level": true,
          "fields": [
            { "name": "version", "type": "u32" },
            { "name": "flag", "type": "u8" }
          ]
        }
      },
      "roots": [
        {
          "struct": "S",
          "fields": {
            "version": "2.3",
            "count": 5,
            "child": { "struct": "C", "fields": { "version": "2.3", "flag": 1 } }
          }
        },
        { "struct": "C", "fields": { "version": "1.0", "flag": 0 } }
      ]
    }
"#};

#[test]
fn compile_reports_reachable_structs() {
    let mut schema = Schema::new();
    let c = schema
        .define_top_level("C", vec![Field::u32("version"), Field::u8("flag")])
        .unwrap();
    let s = schema
        .define_top_level(
            "S",
            vec![
                Field::u32("version"),
                Field::u32("count"),
                Field::struct_ref("child", c),
            ],
        )
        .unwrap();
    let mut tree = ValueTree::new(&schema);
    let child = tree.bind(c, vec![1u32.into(), 1u8.into()]).unwrap();
    let root = tree
        .bind(s, vec![1u32.into(), 5u32.into(), child.into()])
        .unwrap();

    let output = compile(&tree, root).unwrap();
    assert_eq!(output.structs, [c, s]);
    assert_eq!(output.blob.len(), 21);

    let reader = RecordReader::new(&schema, &output.blob.bytes);
    let count = reader.field(s, 0, "count").unwrap().unwrap();
    assert_eq!(count.raw, 5);
    let flag = reader.field(c, 16, "flag").unwrap().unwrap();
    assert!(flag.as_bool());
}

#[test]
fn compile_accepts_version_first_root() {
    let mut schema = Schema::new();
    let c = schema
        .define("C", vec![Field::u32("version"), Field::u8("flag")])
        .unwrap();
    let mut tree = ValueTree::new(&schema);
    let node = tree.bind(c, vec![2u32.into(), 1u8.into()]).unwrap();

    let output = compile(&tree, node).unwrap();
    assert_eq!(output.blob.bytes, [0x02, 0x00, 0x00, 0x00, 0x01]);
    assert_eq!(output.structs, [c]);
}

#[test]
fn compile_rejects_unversioned_root() {
    let mut schema = Schema::new();
    let inner = schema.define("Inner", vec![Field::u8("x")]).unwrap();
    let mut tree = ValueTree::new(&schema);
    let node = tree.bind(inner, vec![1u8.into()]).unwrap();

    let err = compile(&tree, node).unwrap_err();
    assert_eq!(
        err,
        Error::Layout(LayoutError::InvalidFirstField {
            struct_name: "Inner".to_string(),
        })
    );
}

#[test]
fn document_blobs() {
    let doc = Document::from_json(DOCUMENT).unwrap();
    let generated = compile_document(&doc, &Config::default()).unwrap();

    assert_eq!(generated.blobs.len(), 2);
    assert_eq!(generated.blobs[0].name, "S");
    assert_eq!(
        generated.blobs[0].bytes,
        [
            0x00, 0x00, 0x03, 0x02, 0x05, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x03, 0x02, 0x01,
        ]
    );
    assert_eq!(generated.blobs[1].name, "C");
    assert_eq!(generated.blobs[1].bytes, [0x00, 0x00, 0x00, 0x01, 0x00]);
}

#[test]
fn document_header() {
    let doc = Document::from_json(DOCUMENT).unwrap();
    let generated = compile_document(&doc, &Config::default()).unwrap();

    insta::assert_snapshot!(generated.header, @r"
    #pragma pack(push, 1)

    // C: 5 bytes
    struct C {
        uint32_t version;
        uint8_t flag;
    };

    // S: 16 bytes
    struct S {
        uint32_t version;
        uint32_t count;
        union { C *child; uint64_t childPad; };
    };

    #pragma pack(pop)

    // Field type tags: 0 u8, 1 u16, 2 u32, 3 u64, 4 bool, 5 ptr, 6 struct
    typedef struct StructMetadata StructMetadata;

    typedef struct {
        uint32_t offset;
        uint8_t type;
        const StructMetadata *def;
    } FieldMetadata;

    struct StructMetadata {
        uint32_t size;
        uint16_t nFields;
        const FieldMetadata *fields;
    };
    ");
}

#[test]
fn document_source() {
    let doc = Document::from_json(DOCUMENT).unwrap();
    let generated = compile_document(&doc, &Config::new().comments(false)).unwrap();

    insta::assert_snapshot!(generated.source, @r"
    const FieldMetadata gCFieldsMetadata[] = {
        { 0, 2, NULL },
        { 4, 0, NULL },
    };
    const StructMetadata gCMetadata = { 5, 2, gCFieldsMetadata };

    const FieldMetadata gSFieldsMetadata[] = {
        { 0, 2, NULL },
        { 4, 2, NULL },
        { 8, 6, &gCMetadata },
    };
    const StructMetadata gSMetadata = { 16, 3, gSFieldsMetadata };

    static uint8_t gSDefault[] = {
      0x00, 0x00, 0x03, 0x02,
      0x05, 0x00, 0x00, 0x00,
      0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
      0x00, 0x00, 0x03, 0x02,
      0x01,
    };

    static uint8_t gCDefault[] = {
      0x00, 0x00, 0x00, 0x01,
      0x00,
    };
    ");
}

#[test]
fn document_errors_convert() {
    let doc = Document::from_json(indoc! {r#"
        {
          "structs": {
            "S": { "top_level": true, "fields": [{ "name": "version", "type": "u32" }] }
          },
          "roots": [{ "struct": "S", "fields": { "version": "256.0" } }]
        }
    "#})
    .unwrap();

    let err = compile_document(&doc, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Load(_)));
    assert_eq!(
        err.to_string(),
        "version component major = 256 is out of range (0..=255)"
    );
}

const TWO_PROFILES: &str = indoc! {r#"
    {
      "structs": {
        "S": { "top_level": true, "fields": [{ "name": "version", "type": "u32" }] }
      },
      "roots": [
        { "struct": "S", "name": "factory", "fields": { "version": "1.0" } },
        { "struct": "S", "name": "kiosk", "fields": { "version": "1.1" } }
      ]
    }
"#};

#[test]
fn named_roots_get_their_own_arrays() {
    let doc = Document::from_json(TWO_PROFILES).unwrap();
    let generated = compile_document(&doc, &Config::new().comments(false)).unwrap();

    assert_eq!(generated.blobs[0].name, "factory");
    assert_eq!(generated.blobs[1].name, "kiosk");
    insta::assert_snapshot!(generated.source, @r"
    const FieldMetadata gSFieldsMetadata[] = {
        { 0, 2, NULL },
    };
    const StructMetadata gSMetadata = { 4, 1, gSFieldsMetadata };

    static uint8_t gFactoryDefault[] = {
      0x00, 0x00, 0x00, 0x01,
    };

    static uint8_t gKioskDefault[] = {
      0x00, 0x00, 0x01, 0x01,
    };
    ");
}

#[test]
fn roots_sharing_a_symbol_rejected() {
    let doc = Document::from_json(indoc! {r#"
        {
          "structs": {
            "S": { "top_level": true, "fields": [{ "name": "version", "type": "u32" }] }
          },
          "roots": [
            { "struct": "S", "fields": { "version": "1.0" } },
            { "struct": "S", "fields": { "version": "1.1" } }
          ]
        }
    "#})
    .unwrap();

    let err = compile_document(&doc, &Config::default()).unwrap_err();
    assert_eq!(
        err,
        Error::Load(LoadError::DuplicateRoot {
            first: "S".to_string(),
            second: "S".to_string(),
            symbol: "gSDefault".to_string(),
        })
    );
    assert_eq!(
        err.to_string(),
        "roots `S` and `S` would both define `gSDefault`"
    );
}
