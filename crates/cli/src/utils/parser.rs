use luascope_core::Position;

/// Split `path[:LINE[:COL]]` into the path and a 0-based position
///
/// LINE and COL are 1-based on the command line; COL defaults to the start
/// of the line.
pub fn parse_filepath_with_location(filepath_arg: &str) -> (String, Option<Position>) {
    let Some((rest, last)) = split_number_suffix(filepath_arg) else {
        return (filepath_arg.to_string(), None);
    };

    match split_number_suffix(rest) {
        Some((path, line)) => (
            path.to_string(),
            Some(Position::new(line.saturating_sub(1), last.saturating_sub(1))),
        ),
        None => (rest.to_string(), Some(Position::new(last.saturating_sub(1), 0))),
    }
}

fn split_number_suffix(arg: &str) -> Option<(&str, u32)> {
    let colon_pos = arg.rfind(':')?;
    let number = arg[colon_pos + 1..].parse::<u32>().ok()?;
    let path = &arg[..colon_pos];
    if path.is_empty() {
        return None;
    }
    Some((path, number))
}
