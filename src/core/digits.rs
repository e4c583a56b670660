/// True when `s` is non-empty and made only of ASCII decimal digits.
///
/// Signs, whitespace and non-ASCII digits are rejected; leading zeros are
/// fine, so `"00007"` passes.
pub fn is_non_negative_integer(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
