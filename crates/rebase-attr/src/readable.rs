//! Readable glyph substitution for numeral strings.
//!
//! Bases up to 32 use the digit glyphs `0-9a-v`, which leaves `w`, `x`, `y`
//! and `z` free. Swapping the visually ambiguous glyphs for those letters
//! keeps codes unambiguous when read aloud or retyped. The mapping is
//! reversible because source and target glyph sets are disjoint, so a single
//! character-map pass suffices in either direction.

/// The fixed substitution table: digit glyph to readable glyph.
pub const READABLE_MAPPING: [(char, char); 4] = [('0', 'x'), ('1', 'y'), ('l', 'w'), ('o', 'z')];

/// Replaces ambiguous digit glyphs with readable letters.
///
/// Case-insensitive on input, lowercase output. Always returns a new string.
///
/// # Example
///
/// ```
/// use rebase_attr::readable::to_readable;
///
/// assert_eq!(to_readable("1ce1d022eabb"), "yceydx22eabb");
/// assert_eq!(to_readable("ss7825qlr"), "ss7825qwr");
/// ```
pub fn to_readable(numeral: &str) -> String {
    numeral
        .chars()
        .map(|c| match c {
            '0' => 'x',
            '1' => 'y',
            'l' | 'L' => 'w',
            'o' | 'O' => 'z',
            other => other,
        })
        .collect()
}

/// Restores digit glyphs from readable letters.
///
/// Case-insensitive on input; untouched characters keep their case, which the
/// case-insensitive numeral parser accepts downstream. Always returns a new
/// string.
///
/// # Example
///
/// ```
/// use rebase_attr::readable::from_readable;
///
/// assert_eq!(from_readable("yceydx22eabb"), "1ce1d022eabb");
/// assert_eq!(from_readable("YCEYDX22EABB"), "1CE1D022EABB");
/// ```
pub fn from_readable(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'x' | 'X' => '0',
            'y' | 'Y' => '1',
            'w' | 'W' => 'l',
            'z' | 'Z' => 'o',
            other => other,
        })
        .collect()
}
