/// Country code shown on every non-empty draft.
const COUNTRY_CODE: &str = "38";

/// Longest significant digit sequence a draft can hold, prefix included.
const MAX_DIGITS: usize = 12;

/// Re-derive the masked phone draft from whatever the user's input field
/// currently holds.
///
/// The function is total: any string goes in, a canonical draft comes out.
/// Every non-digit is stripped first, so it behaves the same whether the
/// input is raw keystrokes, a previously formatted draft with one character
/// deleted in the middle, or a pasted number. Digits that do not already
/// start with the country code get it prepended; anything past 12
/// significant digits is dropped.
///
/// Shapes, by significant digit count:
/// `+38` -> `+38 (067)` -> `+38 (067) 123` -> `+38 (067) 123-45` ->
/// `+38 (067) 123-45-67`.
pub fn format_phone(raw: &str) -> String {
    let typed: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if typed.is_empty() {
        return String::new();
    }

    let mut digits = if typed.starts_with(COUNTRY_CODE) {
        typed
    } else {
        format!("{COUNTRY_CODE}{typed}")
    };
    digits.truncate(MAX_DIGITS);

    match digits.len() {
        0..=2 => format!("+{digits}"),
        3..=5 => format!("+38 ({})", &digits[2..]),
        6..=8 => format!("+38 ({}) {}", &digits[2..5], &digits[5..]),
        9..=10 => format!("+38 ({}) {}-{}", &digits[2..5], &digits[5..8], &digits[8..]),
        _ => format!(
            "+38 ({}) {}-{}-{}",
            &digits[2..5],
            &digits[5..8],
            &digits[8..10],
            &digits[10..12]
        ),
    }
}
