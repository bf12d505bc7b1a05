//! Field-level parsers for the catalog's display-formatted values.
//!
//! The service reports numbers the way its web UI shows them: counts as
//! `"55K+"` / `"1.2M+"` / `"<100"`, popularity as `"120~4"` (play count
//! before the tilde, a rating after), durations as decimal-string seconds.
//! Every parser here degrades to `None`/0 instead of failing, so one
//! malformed field never discards a whole record.

/// Parses a human-readable count such as `"55K+"`, `"1.2M+"`, `"<100"`, or
/// `"320"` into a non-negative integer.
///
/// `None`, empty, and unparseable input all yield 0.
pub fn parse_count(raw: Option<&str>) -> u64 {
    let Some(value) = raw else { return 0 };
    let mut value = value.trim();
    if value.is_empty() {
        return 0;
    }

    value = value.strip_prefix('<').unwrap_or(value);
    value = value.strip_suffix('+').unwrap_or(value);

    if let Some(prefix) = value.strip_suffix('K') {
        return prefix
            .parse::<f64>()
            .map(|v| (v * 1_000.0) as u64)
            .unwrap_or(0);
    }
    if let Some(prefix) = value.strip_suffix('M') {
        return prefix
            .parse::<f64>()
            .map(|v| (v * 1_000_000.0) as u64)
            .unwrap_or(0);
    }

    value.parse::<u64>().unwrap_or(0)
}

/// Splits a `"YYYY-MM-DD"` release date into its components.
///
/// Returns `None` unless the value splits into exactly three integer parts;
/// partial dates are treated as absent.
pub fn parse_release_date(raw: Option<&str>) -> Option<(i32, u32, u32)> {
    let parts: Vec<&str> = raw?.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year = parts[0].parse().ok()?;
    let month = parts[1].parse().ok()?;
    let day = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parses a duration reported as a decimal string of seconds.
pub fn parse_duration(raw: Option<&str>) -> Option<u64> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

/// Derives a track's popularity from the two fields the service may carry.
///
/// A non-empty `popularity` field wins: the integer before its first `~`.
/// Otherwise a non-empty `play_count` is run through [`parse_count`].
pub fn parse_popularity(popularity: Option<&str>, play_count: Option<&str>) -> Option<u64> {
    match popularity {
        Some(value) if !value.is_empty() => value
            .split('~')
            .next()
            .and_then(|n| n.trim().parse().ok()),
        _ => match play_count {
            Some(value) if !value.is_empty() => Some(parse_count(Some(value))),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_suffixes() {
        assert_eq!(parse_count(Some("55K+")), 55_000);
        assert_eq!(parse_count(Some("1.2M+")), 1_200_000);
        assert_eq!(parse_count(Some("320")), 320);
        assert_eq!(parse_count(Some("<100")), 100);
    }

    #[test]
    fn test_parse_count_absent_or_empty() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("   ")), 0);
    }

    #[test]
    fn test_parse_count_malformed_yields_zero() {
        assert_eq!(parse_count(Some("abcK")), 0);
        assert_eq!(parse_count(Some("abc")), 0);
        assert_eq!(parse_count(Some("-5")), 0);
    }

    #[test]
    fn test_parse_release_date_full() {
        assert_eq!(
            parse_release_date(Some("2001-09-11")),
            Some((2001, 9, 11))
        );
    }

    #[test]
    fn test_parse_release_date_partial_or_absent() {
        assert_eq!(parse_release_date(None), None);
        assert_eq!(parse_release_date(Some("2001-09")), None);
        assert_eq!(parse_release_date(Some("2001")), None);
        assert_eq!(parse_release_date(Some("2001-xx-11")), None);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration(Some("245")), Some(245));
        assert_eq!(parse_duration(Some(" 245 ")), Some(245));
        assert_eq!(parse_duration(Some("")), None);
        assert_eq!(parse_duration(None), None);
        assert_eq!(parse_duration(Some("4:05")), None);
    }

    #[test]
    fn test_parse_popularity_prefers_popularity_field() {
        assert_eq!(parse_popularity(Some("120~4"), Some("9K+")), Some(120));
        assert_eq!(parse_popularity(Some("978~"), None), Some(978));
    }

    #[test]
    fn test_parse_popularity_falls_back_to_play_count() {
        assert_eq!(parse_popularity(None, Some("9K+")), Some(9_000));
        assert_eq!(parse_popularity(Some(""), Some("12")), Some(12));
        assert_eq!(parse_popularity(None, None), None);
        assert_eq!(parse_popularity(Some(""), Some("")), None);
    }
}
