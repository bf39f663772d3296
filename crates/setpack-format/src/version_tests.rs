use proptest::prelude::*;

use crate::{FormatError, PackedVersion};

#[test]
fn packs_most_significant_first() {
    assert_eq!(PackedVersion::new(2, 1, 3, 0).get(), 0x0201_0300);
    assert_eq!(PackedVersion::new(255, 255, 255, 255).get(), u32::MAX);
    assert_eq!(PackedVersion::new(0, 0, 0, 0).get(), 0);
}

#[test]
fn ordering_matches_components() {
    let enc = |a, b, c, d| PackedVersion::encode(a, b, c, d).unwrap();
    assert!(enc(2, 2, 1, 0) > enc(2, 1, 9, 9));
    assert!(enc(2, 0, 0, 0) < enc(2, 0, 0, 1));
    assert!(enc(3, 0, 0, 0) > enc(2, 255, 255, 255));
    assert!(enc(2, 2, 1, 0).get() > enc(2, 1, 9, 9).get());
}

#[test]
fn encode_rejects_out_of_range() {
    assert_eq!(
        PackedVersion::encode(256, 0, 0, 0),
        Err(FormatError::VersionComponentOutOfRange {
            component: "major",
            value: 256,
        })
    );
    assert_eq!(
        PackedVersion::encode(1, 2, -1, 0),
        Err(FormatError::VersionComponentOutOfRange {
            component: "patch",
            value: -1,
        })
    );
    assert!(PackedVersion::encode(0, 0, 0, 1000).is_err());
}

#[test]
fn parse_dotted() {
    assert_eq!("2.3".parse(), Ok(PackedVersion::new(2, 3, 0, 0)));
    assert_eq!("2.1.3".parse(), Ok(PackedVersion::new(2, 1, 3, 0)));
    assert_eq!("1.2.3.4".parse(), Ok(PackedVersion::new(1, 2, 3, 4)));
    assert_eq!("7".parse(), Ok(PackedVersion::new(7, 0, 0, 0)));
    assert_eq!(" 3.0 ".parse(), Ok(PackedVersion::new(3, 0, 0, 0)));
}

#[test]
fn parse_rejects_malformed() {
    for text in ["", "1.", "1..2", "a.b", "1.2.3.4.5", "v2.3"] {
        assert_eq!(
            text.parse::<PackedVersion>(),
            Err(FormatError::InvalidVersion(text.to_string())),
            "{text:?}"
        );
    }
}

#[test]
fn parse_rejects_large_component() {
    assert!(matches!(
        "2.300".parse::<PackedVersion>(),
        Err(FormatError::VersionComponentOutOfRange {
            component: "minor",
            value: 300,
        })
    ));
}

#[test]
fn display_trims_trailing_zeros() {
    assert_eq!(PackedVersion::new(2, 3, 0, 0).to_string(), "2.3");
    assert_eq!(PackedVersion::new(2, 3, 1, 0).to_string(), "2.3.1");
    assert_eq!(PackedVersion::new(2, 3, 0, 4).to_string(), "2.3.0.4");
    assert_eq!(PackedVersion::new(0, 0, 0, 0).to_string(), "0.0");
}

proptest! {
    #[test]
    fn decode_inverts_encode(a: u8, b: u8, c: u8, d: u8) {
        let v = PackedVersion::encode(a.into(), b.into(), c.into(), d.into()).unwrap();
        prop_assert_eq!(v.decode(), (a, b, c, d));
        prop_assert_eq!(PackedVersion::from_raw(v.get()), v);
    }

    #[test]
    fn integer_order_is_component_order(x: (u8, u8, u8, u8), y: (u8, u8, u8, u8)) {
        let vx = PackedVersion::new(x.0, x.1, x.2, x.3);
        let vy = PackedVersion::new(y.0, y.1, y.2, y.3);
        prop_assert_eq!(vx.get().cmp(&vy.get()), x.cmp(&y));
    }

    #[test]
    fn display_parses_back(a: u8, b: u8, c: u8, d: u8) {
        let v = PackedVersion::new(a, b, c, d);
        prop_assert_eq!(v.to_string().parse::<PackedVersion>(), Ok(v));
    }
}
