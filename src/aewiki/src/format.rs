//! Number formatting for catalog display

const SUFFIXES: &[(u64, &str)] = &[
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Compact form used on avatar cards: `1234567` → `"1.23M"`.
///
/// Two decimals above a thousand, plain integer below.
pub fn compact_number(n: u64) -> String {
    for &(scale, suffix) in SUFFIXES {
        if n >= scale {
            return format!("{:.2}{}", n as f64 / scale as f64, suffix);
        }
    }
    n.to_string()
}

/// Thousands separators: `1234567` → `"1,234,567"`
pub fn thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
