//! Bengali digit transliteration
//!
//! Maps ASCII decimal digits to Bengali numeral glyphs (০–৯). All other
//! characters pass through unchanged, so zero-padded fields keep their
//! padding.

/// Transliterate every ASCII digit in `input` to its Bengali numeral glyph
///
/// Non-digit characters are preserved as-is. The mapping is total; there are
/// no error conditions.
#[must_use]
pub fn to_bengali_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '0' => '০',
            '1' => '১',
            '2' => '২',
            '3' => '৩',
            '4' => '৪',
            '5' => '৫',
            '6' => '৬',
            '7' => '৭',
            '8' => '৮',
            '9' => '৯',
            other => other,
        })
        .collect()
}
