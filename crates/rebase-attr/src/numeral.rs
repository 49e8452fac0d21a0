//! Numeral rendering and parsing across bases 2..=36.

/// Digit glyphs for bases up to 36, lowercase.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders an integer as a numeral string in the given base.
///
/// Digits ten and above use lowercase letters; negative values get a leading
/// `-`. The base must be in 2..=36 (enforced at configuration time).
///
/// # Example
///
/// ```
/// use rebase_attr::numeral::to_base;
///
/// assert_eq!(to_base(31756185168571, 16), "1ce1d022eabb");
/// assert_eq!(to_base(0, 2), "0");
/// assert_eq!(to_base(-255, 16), "-ff");
/// ```
pub fn to_base(value: i128, base: u32) -> String {
    debug_assert!((2..=36).contains(&base));
    if value == 0 {
        return "0".to_string();
    }
    let radix = base as u128;
    let mut magnitude = value.unsigned_abs();
    let mut out = String::new();
    while magnitude > 0 {
        out.push(DIGITS[(magnitude % radix) as usize] as char);
        magnitude /= radix;
    }
    if value < 0 {
        out.push('-');
    }
    out.chars().rev().collect()
}

/// Parses a numeral string in the given base back to an integer.
///
/// This is the explicit integer-coercion check: a string coerces iff it is an
/// optional `-` followed by one or more digits valid for `base`, letters
/// case-insensitive. Anything else, including the empty string and values
/// that overflow `i128`, returns `None`.
///
/// # Example
///
/// ```
/// use rebase_attr::numeral::from_base;
///
/// assert_eq!(from_base("1ce1d022eabb", 16), Some(31756185168571));
/// assert_eq!(from_base("1CE1D022EABB", 16), Some(31756185168571));
/// assert_eq!(from_base("-ff", 16), Some(-255));
/// assert_eq!(from_base("zz", 16), None);
/// assert_eq!(from_base("", 10), None);
/// ```
pub fn from_base(text: &str, base: u32) -> Option<i128> {
    debug_assert!((2..=36).contains(&base));
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() {
        return None;
    }
    let mut acc: i128 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(base)? as i128;
        acc = acc.checked_mul(base as i128)?.checked_add(digit)?;
    }
    Some(if negative { -acc } else { acc })
}
