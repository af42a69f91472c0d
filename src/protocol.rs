use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

pub const STATUS_OK: &str = "ok";
pub const STATUS_CREATED: &str = "created";
pub const STATUS_ERROR: &str = "error";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

impl ErrorResponse {
    pub fn err<S: ToString>(err: S) -> Self {
        Self {
            status: STATUS_ERROR,
            error: err.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ListResponse<T> {
    pub status: &'static str,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            status: STATUS_OK,
            items,
        }
    }
}

#[derive(Serialize)]
pub struct ItemResponse<T> {
    pub status: &'static str,
    pub item: T,
}

impl<T> ItemResponse<T> {
    pub fn ok(item: T) -> Self {
        Self {
            status: STATUS_OK,
            item,
        }
    }

    pub fn created(item: T) -> Self {
        Self {
            status: STATUS_CREATED,
            item,
        }
    }
}

/// An id sent either as a JSON number or as a numeric string.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl IdValue {
    /// Empty strings and a numeric `0` count as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            IdValue::Number(n) => *n == 0,
            IdValue::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn parse(&self, field: &str) -> ApiResult<i32> {
        let id = match self {
            IdValue::Number(n) => i32::try_from(*n).ok(),
            IdValue::Text(s) => s.trim().parse::<i32>().ok(),
        };
        id.ok_or_else(|| ApiError::validation(format!("'{}' must be an integer id", field)))
    }
}

/// Optional numeric query filter; an empty value means no filter.
pub fn parse_filter_id(field: &str, value: Option<&str>) -> ApiResult<Option<i32>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => IdValue::Text(s.to_string()).parse(field).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_numbers_and_numeric_strings() {
        let number: IdValue = serde_json::from_str("7").unwrap();
        let text: IdValue = serde_json::from_str("\" 7 \"").unwrap();
        assert_eq!(number.parse("provider").unwrap(), 7);
        assert_eq!(text.parse("provider").unwrap(), 7);
    }

    #[test]
    fn ids_reject_junk() {
        let text: IdValue = serde_json::from_str("\"seven\"").unwrap();
        assert!(text.parse("provider").is_err());
        assert!(IdValue::Number(i64::MAX).parse("provider").is_err());
        assert!(IdValue::Text("  ".into()).is_blank());
        assert!(IdValue::Number(0).is_blank());
        assert!(!IdValue::Number(3).is_blank());
    }

    #[test]
    fn empty_filters_are_ignored() {
        assert_eq!(parse_filter_id("provider", None).unwrap(), None);
        assert_eq!(parse_filter_id("provider", Some("")).unwrap(), None);
        assert_eq!(parse_filter_id("provider", Some("3")).unwrap(), Some(3));
        assert!(parse_filter_id("provider", Some("x")).is_err());
    }
}
