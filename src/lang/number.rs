use super::token::Token;

/// Marker letter for a pseudo-random literal.
pub const RANDOM_MARKER: char = 'r';

/// Digits and the random marker; a literal never starts right after one.
fn is_digit_like(ch: Option<&char>) -> bool {
    match ch {
        Some(c) => c.is_ascii_digit() || *c == RANDOM_MARKER,
        None => false,
    }
}

fn before(line: &[char], pos: usize) -> Option<&char> {
    pos.checked_sub(1).and_then(|p| line.get(p))
}

/// Recognizes a numeric literal starting at `pos`. Returns the token and
/// the position just past the literal, or `None` with nothing consumed.
pub fn scan(line: &[char], pos: usize) -> Option<(Token, usize)> {
    if is_digit_like(before(line, pos)) {
        return None;
    }
    let mut end = pos;
    let negate = line.get(pos) == Some(&'-') && is_digit_like(line.get(pos + 1));
    if negate {
        end += 1;
    }
    match line.get(end) {
        Some(&RANDOM_MARKER) => return Some((Token::RandomDraw { negate }, end + 1)),
        Some(c) if c.is_ascii_digit() => {}
        _ => return None,
    }
    let digits_start = end;
    while line.get(end).map_or(false, |c| c.is_ascii_digit()) {
        end += 1;
    }
    let text: String = line[pos..end].iter().collect();
    if line[digits_start] == '0' && end - digits_start > 1 {
        return Some((Token::LegacyOctal(text), end));
    }
    let value = text.parse::<f64>().ok()?;
    Some((Token::Number(value), end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_str(s: &str, pos: usize) -> Option<(Token, usize)> {
        let line: Vec<char> = s.chars().collect();
        scan(&line, pos)
    }

    #[test]
    fn test_decimal() {
        assert_eq!(scan_str("123 4", 0), Some((Token::Number(123.0), 3)));
        assert_eq!(scan_str("12 45", 3), Some((Token::Number(45.0), 5)));
        assert_eq!(scan_str("0", 0), Some((Token::Number(0.0), 1)));
    }

    #[test]
    fn test_negative() {
        assert_eq!(scan_str("5 -3", 2), Some((Token::Number(-3.0), 4)));
        assert_eq!(scan_str("-3", 0), Some((Token::Number(-3.0), 2)));
        assert_eq!(scan_str("5-3", 1), None);
        assert_eq!(scan_str("- 3", 0), None);
        assert_eq!(scan_str("-", 0), None);
    }

    #[test]
    fn test_not_after_digit_like() {
        assert_eq!(scan_str("3r", 1), None);
        assert_eq!(scan_str("r5", 1), None);
        assert_eq!(scan_str("r-5", 1), None);
    }

    #[test]
    fn test_random() {
        assert_eq!(
            scan_str("r", 0),
            Some((Token::RandomDraw { negate: false }, 1))
        );
        assert_eq!(
            scan_str("1 -r", 2),
            Some((Token::RandomDraw { negate: true }, 4))
        );
    }

    #[test]
    fn test_legacy_octal() {
        assert_eq!(
            scan_str("011", 0),
            Some((Token::LegacyOctal("011".to_string()), 3))
        );
        assert_eq!(
            scan_str("-019+", 0),
            Some((Token::LegacyOctal("-019".to_string()), 4))
        );
        assert_eq!(scan_str("-0", 0), Some((Token::Number(-0.0), 2)));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(scan_str("+", 0), None);
        assert_eq!(scan_str("d", 0), None);
        assert_eq!(scan_str("", 0), None);
    }
}
