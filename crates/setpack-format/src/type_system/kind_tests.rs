use super::*;
use crate::schema::StructId;

const ALL: [FieldKind; 7] = [
    FieldKind::U8,
    FieldKind::U16,
    FieldKind::U32,
    FieldKind::U64,
    FieldKind::Bool,
    FieldKind::Ptr,
    FieldKind::StructRef(StructId(0)),
];

#[test]
fn widths() {
    let widths: Vec<_> = ALL.iter().map(|k| k.width()).collect();
    assert_eq!(widths, [1, 2, 4, 8, 4, 8, 8]);
}

#[test]
fn tags_are_distinct() {
    let mut tags: Vec<_> = ALL.iter().map(|k| k.tag()).collect();
    tags.dedup();
    assert_eq!(tags, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn fits_boundaries() {
    assert!(FieldKind::U8.fits(255));
    assert!(!FieldKind::U8.fits(256));
    assert!(FieldKind::U16.fits(0xffff));
    assert!(!FieldKind::U16.fits(0x1_0000));
    assert!(FieldKind::U32.fits(u32::MAX as i128));
    assert!(!FieldKind::U32.fits(1 << 32));
    assert!(FieldKind::U64.fits(u64::MAX as i128));
    assert!(!FieldKind::U64.fits(u64::MAX as i128 + 1));
    assert!(FieldKind::Bool.fits(1));
    assert!(!FieldKind::Bool.fits(2));
}

#[test]
fn negative_never_fits() {
    for kind in ALL {
        assert!(!kind.fits(-1), "{kind:?}");
    }
}

#[test]
fn pack_is_little_endian() {
    let mut out = Vec::new();
    FieldKind::U16.pack(0x0102, &mut out);
    FieldKind::U32.pack(0x0a0b_0c0d, &mut out);
    FieldKind::U8.pack(0xff, &mut out);
    assert_eq!(out, [0x02, 0x01, 0x0d, 0x0c, 0x0b, 0x0a, 0xff]);
}

#[test]
fn pointers_pack_to_eight_bytes() {
    let mut out = Vec::new();
    FieldKind::StructRef(StructId(3)).pack(0x10, &mut out);
    assert_eq!(out, [0x10, 0, 0, 0, 0, 0, 0, 0]);

    out.clear();
    FieldKind::Ptr.pack(0, &mut out);
    assert_eq!(out, [0; 8]);
}

#[test]
fn unpack_reverses_pack() {
    for kind in ALL {
        let value = kind.max_value();
        let mut out = Vec::new();
        kind.pack(value, &mut out);
        assert_eq!(out.len(), kind.width());
        assert_eq!(kind.unpack(&out), value, "{kind:?}");
    }
}

#[test]
fn layout_eq_ignores_ref_target() {
    let a = FieldKind::StructRef(StructId(1));
    let b = FieldKind::StructRef(StructId(7));
    assert!(a.layout_eq(b));
    assert!(!a.layout_eq(FieldKind::Ptr));
    assert!(!FieldKind::U32.layout_eq(FieldKind::Bool));
    assert!(FieldKind::U64.layout_eq(FieldKind::U64));
}

#[test]
fn c_types() {
    assert_eq!(FieldKind::U8.c_type(), "uint8_t");
    assert_eq!(FieldKind::Bool.c_type(), "int32_t");
    assert_eq!(FieldKind::StructRef(StructId(0)).c_type(), "uint64_t");
}
