//! Textual normalization rules applied before layout matching.
//!
//! The rules run in a fixed order and each one is a pure string rewrite,
//! so they can be tested independently of the layout matchers.

/// Applies the full normalization pipeline to a raw time text.
///
/// The rules, in order:
/// 1. Trim, uppercase, and strip all period characters
///    ("8.30am" → "830AM").
/// 2. Insert a space before a trailing "AM"/"PM" when it is missing
///    ("8:30AM" → "8:30 AM").
/// 3. Expand a compact digit run with a meridiem into "H:MM AP"
///    ("0830 AM" → "8:30 AM").
///
/// # Example
///
/// ```
/// use timesheet_engine::parsing::normalize;
///
/// assert_eq!(normalize("8.30am"), "8:30 AM");
/// assert_eq!(normalize("  21:15 "), "21:15");
/// ```
pub fn normalize(input: &str) -> String {
    let text = strip_periods_and_case(input);
    let text = space_before_meridiem(text);
    expand_compact_meridiem(text)
}

/// Rule 1: trim whitespace, uppercase, drop every '.' character.
fn strip_periods_and_case(input: &str) -> String {
    input.trim().to_uppercase().replace('.', "")
}

/// Rule 2: "8:30AM" → "8:30 AM".
///
/// Applies only when the text ends with AM/PM and the character three
/// positions from the end is not already a space.
fn space_before_meridiem(text: String) -> String {
    if !(text.ends_with("AM") || text.ends_with("PM")) || text.len() <= 2 {
        return text;
    }
    // ends_with guarantees the last two bytes are ASCII, so byte
    // slicing at len-2 is safe; a multi-byte char at len-3 simply
    // compares unequal to b' '.
    if text.as_bytes()[text.len() - 3] == b' ' {
        return text;
    }
    let split = text.len() - 2;
    format!("{} {}", &text[..split], &text[split..])
}

/// Rule 3: "0830 AM" → "8:30 AM", "830 PM" → "8:30 PM".
///
/// Applies only when a meridiem is present with no colon. The portion
/// before the space is reduced to its digits; 3 or 4 digits split as
/// hour + two-digit minutes. Any other digit count leaves the text
/// unchanged (it will fail layout matching later).
fn expand_compact_meridiem(text: String) -> String {
    if !(text.contains(" AM") || text.contains(" PM")) || text.contains(':') {
        return text;
    }
    let mut parts = text.split_whitespace();
    let (Some(first), Some(meridiem)) = (parts.next(), parts.next()) else {
        return text;
    };
    let digits: String = first.chars().filter(char::is_ascii_digit).collect();
    if !(3..=4).contains(&digits.len()) {
        return text;
    }
    let (hour_digits, minute_digits) = digits.split_at(digits.len() - 2);
    let hour: u32 = hour_digits.parse().unwrap_or(0);
    format!("{hour}:{minute_digits} {meridiem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_uppercase_strip_periods() {
        assert_eq!(strip_periods_and_case("  8.30am "), "830AM");
        assert_eq!(strip_periods_and_case("9 p.m."), "9 PM");
    }

    #[test]
    fn test_space_inserted_before_meridiem() {
        assert_eq!(space_before_meridiem("8:30AM".to_string()), "8:30 AM");
        assert_eq!(space_before_meridiem("830PM".to_string()), "830 PM");
    }

    #[test]
    fn test_space_not_duplicated() {
        assert_eq!(space_before_meridiem("8:30 AM".to_string()), "8:30 AM");
    }

    #[test]
    fn test_short_text_left_alone() {
        assert_eq!(space_before_meridiem("AM".to_string()), "AM");
    }

    #[test]
    fn test_compact_digits_expanded() {
        assert_eq!(expand_compact_meridiem("0830 AM".to_string()), "8:30 AM");
        assert_eq!(expand_compact_meridiem("830 AM".to_string()), "8:30 AM");
        assert_eq!(expand_compact_meridiem("1145 PM".to_string()), "11:45 PM");
    }

    #[test]
    fn test_compact_expansion_skipped_with_colon() {
        assert_eq!(expand_compact_meridiem("8:30 AM".to_string()), "8:30 AM");
    }

    #[test]
    fn test_compact_expansion_skipped_outside_3_to_4_digits() {
        assert_eq!(expand_compact_meridiem("8 AM".to_string()), "8 AM");
        assert_eq!(expand_compact_meridiem("12345 AM".to_string()), "12345 AM");
    }

    #[test]
    fn test_full_pipeline_converges() {
        for input in ["8:30AM", "8.30am", "0830 AM", "830am", "8:30 AM"] {
            assert_eq!(normalize(input), "8:30 AM", "input: {input}");
        }
    }

    #[test]
    fn test_pipeline_leaves_24_hour_texts_untouched() {
        assert_eq!(normalize("21:15"), "21:15");
        assert_eq!(normalize("8"), "8");
    }
}
