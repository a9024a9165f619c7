//! Persian code points and small character predicates shared by the stages
//! and the tokenizer.

/// Zero-width non-joiner (نیم‌فاصله).
pub const ZWNJ: char = '\u{200C}';

/// Arabic tatweel / kashida.
pub const KASHIDA: char = '\u{0640}';

#[inline(always)]
pub const fn is_persian_digit(c: char) -> bool {
    matches!(c, '۰'..='۹')
}

/// Value of an ASCII or Persian decimal digit.
#[inline]
pub const fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '۰'..='۹' => Some(c as u32 - '۰' as u32),
        _ => None,
    }
}

/// `۰`–`۹` back to `0`–`9`; every other character is returned as is.
#[inline]
pub const fn persian_digit_to_ascii(c: char) -> char {
    if is_persian_digit(c) {
        // Offset is always < 10, so the cast cannot leave the ASCII range.
        (b'0' + (c as u32 - '۰' as u32) as u8) as char
    } else {
        c
    }
}

/// The ASCII quote characters rewritten into guillemets.
#[inline(always)]
pub const fn is_english_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

/// Punctuation the word tokenizer isolates, as a regex character-class body.
pub const TOKEN_PUNCTUATION: &str = r#"!"'(),،.:؛;«»?؟\[\]`{}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_digits_line_up_with_ascii() {
        for (i, p) in ('۰'..='۹').enumerate() {
            assert!(is_persian_digit(p));
            assert_eq!(digit_value(p), Some(i as u32));
            assert_eq!(persian_digit_to_ascii(p), char::from(b'0' + i as u8));
        }
    }

    #[test]
    fn non_digits_pass_through() {
        assert_eq!(persian_digit_to_ascii('ب'), 'ب');
        assert_eq!(digit_value('x'), None);
        assert_eq!(digit_value('٣'), None);
    }
}
