use super::outcome::{HaltReason, RegionKind, Step};

/// Resume after the newline ending a `--` comment
pub fn skip_line_comment(source: &str, from: usize) -> Step {
    match source[from..].find('\n') {
        Some(i) => Step::Resume(from + i + 1),
        None => Step::Halt(HaltReason::Unterminated(RegionKind::Comment)),
    }
}

/// Resume after the `]=*]` closing a long bracket opened with `level` equals signs
pub fn skip_long_bracket(source: &str, from: usize, level: &str, region: RegionKind) -> Step {
    let close = format!("]{level}]");
    match source[from..].find(&close) {
        Some(i) => Step::Resume(from + i + close.len()),
        None => Step::Halt(HaltReason::Unterminated(region)),
    }
}

/// Resume after the first `quote` not escaped by an odd run of backslashes
pub fn skip_quoted(source: &str, from: usize, quote: char) -> Step {
    let bytes = source.as_bytes();
    let mut search = from;

    while let Some(i) = source[search..].find(quote) {
        let at = search + i;
        let backslashes = bytes[from..at]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count();
        if backslashes % 2 == 0 {
            return Step::Resume(at + quote.len_utf8());
        }
        search = at + quote.len_utf8();
    }

    Step::Halt(HaltReason::Unterminated(RegionKind::String))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment() {
        let source = "-- note\nlocal a";
        assert_eq!(skip_line_comment(source, 2), Step::Resume(8));
        assert_eq!(
            skip_line_comment("-- trailing", 2),
            Step::Halt(HaltReason::Unterminated(RegionKind::Comment))
        );
    }

    #[test]
    fn test_long_bracket_levels() {
        let source = "[==[ ]] ]=] ]==] x";
        assert_eq!(
            skip_long_bracket(source, 4, "==", RegionKind::LongString),
            Step::Resume(16)
        );
        assert_eq!(
            skip_long_bracket(source, 4, "===", RegionKind::LongComment),
            Step::Halt(HaltReason::Unterminated(RegionKind::LongComment))
        );
    }

    #[test]
    fn test_escaped_quotes() {
        let source = r#""a\"b" x"#;
        assert_eq!(skip_quoted(source, 1, '"'), Step::Resume(6));

        let source = r#""a\\" x"#;
        assert_eq!(skip_quoted(source, 1, '"'), Step::Resume(5));
    }

    #[test]
    fn test_other_quote_does_not_close() {
        let source = r#"'say "hi"' x"#;
        assert_eq!(skip_quoted(source, 1, '\''), Step::Resume(10));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            skip_quoted(r#""oops"#, 1, '"'),
            Step::Halt(HaltReason::Unterminated(RegionKind::String))
        );
        assert_eq!(
            skip_quoted("\"", 1, '"'),
            Step::Halt(HaltReason::Unterminated(RegionKind::String))
        );
    }
}
