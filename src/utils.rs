use anyhow::{bail, Context};
use blake2::{Blake2b512, Digest};
use chrono::{DateTime, NaiveDateTime};

/// Parses an ISO-8601 timestamp into naive UTC.
///
/// Accepts RFC 3339 (`Z` or a numeric offset) and offset-less values, which
/// are taken to be UTC already.
pub fn parse_time_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDateTime> {
    const TIME_FMT_NAIVE: &str = "%Y-%m-%dT%H:%M:%S%.f";
    const TIME_FMT_NAIVE_SHORT: &str = "%Y-%m-%dT%H:%M";

    let s = s.as_ref().trim();
    if s.is_empty() {
        bail!("empty timestamp");
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.naive_utc());
    }
    // ' ' is accepted in place of 'T'
    let normalized = s.replacen(' ', "T", 1);
    NaiveDateTime::parse_from_str(&normalized, TIME_FMT_NAIVE)
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, TIME_FMT_NAIVE_SHORT))
        .with_context(|| format!("'{}' is not an ISO datetime", s))
}

pub fn parse_time_pair_str<S1: AsRef<str>, S2: AsRef<str>>(
    start_time: S1,
    end_time: S2,
) -> anyhow::Result<(NaiveDateTime, NaiveDateTime)> {
    let start_time = parse_time_str(start_time).context("Wrong format on 'start'")?;
    let end_time = parse_time_str(end_time).context("Wrong format on 'end'")?;
    Ok((start_time, end_time))
}

pub fn format_time_str(time: &NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

pub const LIKE_ESCAPE: char = '\\';

/// Substring pattern for `LIKE ... ESCAPE '\'`; wildcards in `s` match literally.
pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    let mut pattern = String::from("%");
    for c in s.as_ref().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Salted with the username so equal passwords do not share a digest.
pub fn hash_password(username: &str, password: &str) -> String {
    let mut hasher = Blake2b512::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expected(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn parses_zulu_and_offsets_to_utc() {
        assert_eq!(parse_time_str("2025-11-01T13:30:00Z").unwrap(), expected(13, 30));
        assert_eq!(
            parse_time_str("2025-11-01T15:30:00+02:00").unwrap(),
            expected(13, 30)
        );
    }

    #[test]
    fn parses_naive_values_as_utc() {
        assert_eq!(parse_time_str("2025-11-01T13:30:00").unwrap(), expected(13, 30));
        assert_eq!(parse_time_str("2025-11-01 13:30").unwrap(), expected(13, 30));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_time_str("tomorrow").is_err());
        assert!(parse_time_str("").is_err());
        assert!(parse_time_str("2025-13-01T00:00:00Z").is_err());
    }

    #[test]
    fn pair_errors_name_the_field() {
        let err = parse_time_pair_str("2025-11-01T13:00:00Z", "nope").unwrap_err();
        assert_eq!(err.to_string(), "Wrong format on 'end'");
    }

    #[test]
    fn formats_with_utc_offset() {
        assert_eq!(format_time_str(&expected(9, 5)), "2025-11-01T09:05:00+00:00");
    }

    #[test]
    fn like_patterns_escape_wildcards() {
        assert_eq!(get_str_pattern("Boston"), "%Boston%");
        assert_eq!(get_str_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(get_str_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn password_hash_depends_on_username() {
        let a = hash_password("alice", "secret");
        assert_eq!(a, hash_password("alice", "secret"));
        assert_ne!(a, hash_password("bob", "secret"));
        assert_eq!(a.len(), 128);
    }
}
