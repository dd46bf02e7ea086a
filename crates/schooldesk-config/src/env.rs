use std::env;
use std::str::FromStr;

/// Reads `key` and parses it, falling back to `default` when the variable is
/// unset or does not parse.
pub(crate) fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    parse_value(env::var(key).ok().as_deref(), default)
}

pub(crate) fn parse_value<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.map(str::trim)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Reads `key`, treating an empty value as unset.
pub(crate) fn non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_falls_back() {
        assert_eq!(parse_value::<u16>(None, 3000), 3000);
        assert_eq!(parse_value::<u16>(Some("not-a-port"), 3000), 3000);
        assert_eq!(parse_value::<u16>(Some(" 8080 "), 3000), 8080);
        assert_eq!(parse_value::<i32>(Some("-3"), 0), -3);
    }
}
