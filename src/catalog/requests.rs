use serde::Deserialize;

use crate::{
    booking::TimeRange,
    error::{ApiError, ApiResult},
};

#[derive(Deserialize)]
pub struct SearchProviderQuery {
    pub specialty: Option<String>,
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchAvailabilityQuery {
    pub provider: Option<String>,
}

#[derive(Deserialize)]
pub struct AddAvailabilityRequest {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl AddAvailabilityRequest {
    pub fn validate(self) -> ApiResult<TimeRange> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
                (start, end)
            }
            _ => return Err(ApiError::validation("Missing fields: start, end")),
        };
        let (start, end) = crate::utils::parse_time_pair_str(start, end)
            .map_err(|err| ApiError::validation(format!("{:#}", err)))?;
        Ok(TimeRange::new(start, end)?)
    }
}
