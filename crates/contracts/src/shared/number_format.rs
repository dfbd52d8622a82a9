//! Price formatting for the Arabic (Saudi) locale.

/// Groups digits by three with `separator`.
///
/// # Example
///
/// ```
/// use contracts::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234567, ','), "1,234,567");
/// ```
pub fn format_grouped(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();

    // Separator every three digits, counted from the right.
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    if value < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Map ASCII digits to Arabic-Indic digits (`0` → `٠`).
pub fn to_arabic_indic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Format like `Number.toLocaleString('ar-SA')`: Arabic-Indic digits with
/// the Arabic thousands separator.
pub fn format_price_ar(value: u64) -> String {
    let value = i64::try_from(value).unwrap_or(i64::MAX);
    to_arabic_indic_digits(&format_grouped(value, '\u{066C}'))
}
