pub(super) fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("delimiter cannot be empty".to_string()),
        _ => Err("delimiter must be a single character".to_string()),
    }
}
