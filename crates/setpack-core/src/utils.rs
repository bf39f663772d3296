/// Convert a struct or root name to PascalCase.
///
/// Words are separated by `_`, `-`, or `.`. Each word gets an uppercase
/// first letter. A word with lowercase letters keeps the rest as written, so
/// camelCase humps survive; an all-caps word is lowercased after its first
/// letter.
///
/// # Examples
/// ```
/// use setpack_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("advanced_settings"), "AdvancedSettings");
/// assert_eq!(to_pascal_case("advancedSettings"), "AdvancedSettings");
/// assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
/// assert_eq!(to_pascal_case("FooBar"), "FooBar");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split(['_', '-', '.']) {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        result.push(first.to_ascii_uppercase());
        if word.chars().any(|c| c.is_ascii_lowercase()) {
            result.extend(chars);
        } else {
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    result
}

/// Number of hex digits needed to print every offset below `size`.
///
/// Never less than 4, so small blobs still line up.
///
/// # Examples
/// ```
/// use setpack_core::utils::hex_width;
/// assert_eq!(hex_width(0), 4);
/// assert_eq!(hex_width(0x10000), 4);
/// assert_eq!(hex_width(0x10001), 5);
/// ```
pub fn hex_width(size: u64) -> usize {
    let max = size.saturating_sub(1);
    let digits = if max == 0 {
        1
    } else {
        (64 - max.leading_zeros() as usize).div_ceil(4)
    };
    digits.max(4)
}

/// Render bytes as a comma-separated C initializer list (`0x01, 0x02`).
pub fn bytes_to_c_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 6);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("0x{b:02x}"));
    }
    out
}
