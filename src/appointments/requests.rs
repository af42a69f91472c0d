use serde::Deserialize;

use crate::{
    booking::TimeRange,
    database::store::NewBooking,
    error::{ApiError, ApiResult},
    models::appointments::AppointmentStatus,
    protocol::IdValue,
};

#[derive(Deserialize)]
pub struct ListAppointmentsQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize, Default)]
pub struct CreateAppointmentRequest {
    pub provider: Option<IdValue>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub patient: Option<IdValue>,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub notes: String,
    pub status: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn validate(self) -> ApiResult<NewBooking> {
        let provider = self.provider.filter(|p| !p.is_blank());
        let start = self.start.filter(|s| !s.trim().is_empty());
        let end = self.end.filter(|s| !s.trim().is_empty());
        let (provider, start, end) = match (provider, start, end) {
            (Some(provider), Some(start), Some(end)) => (provider, start, end),
            (provider, start, end) => {
                let missing: Vec<&str> = [
                    ("provider", provider.is_none()),
                    ("start", start.is_none()),
                    ("end", end.is_none()),
                ]
                .iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| *name)
                .collect();
                return Err(ApiError::validation(format!(
                    "Missing fields: {}",
                    missing.join(", ")
                )));
            }
        };

        let provider_id = provider.parse("provider")?;
        let patient_id = match &self.patient {
            Some(patient) if !patient.is_blank() => Some(patient.parse("patient")?),
            _ => None,
        };

        let (start, end) = crate::utils::parse_time_pair_str(start, end).map_err(|_| {
            ApiError::validation("start/end must be ISO datetimes (e.g. 2025-11-01T13:30:00Z)")
        })?;
        let range = TimeRange::new(start, end)?;

        let status = parse_status(self.status.as_deref())?;

        Ok(NewBooking {
            provider_id,
            patient_id,
            range,
            patient_name: self.patient_name.trim().to_string(),
            provider_name: self.provider_name.trim().to_string(),
            service: self.service.trim().to_string(),
            notes: self.notes.trim().to_string(),
            status,
        })
    }
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    pub fn validate(self) -> ApiResult<AppointmentStatus> {
        if is_blank(&self.status) {
            return Err(ApiError::validation("Missing fields: status"));
        }
        parse_status(self.status.as_deref())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn parse_status(status: Option<&str>) -> ApiResult<AppointmentStatus> {
    match status.map(str::trim) {
        None | Some("") => Ok(AppointmentStatus::default()),
        Some(s) => s.parse().map_err(ApiError::Validation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(provider: &str, start: &str, end: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            provider: Some(IdValue::Text(provider.to_string())),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            ..Default::default()
        }
    }

    fn validation_message(result: ApiResult<NewBooking>) -> String {
        match result {
            Err(ApiError::Validation(msg)) => msg,
            Err(other) => panic!("expected validation error, got {:?}", other),
            Ok(_) => panic!("expected validation error"),
        }
    }

    #[test]
    fn lists_every_missing_field() {
        let msg = validation_message(CreateAppointmentRequest::default().validate());
        assert_eq!(msg, "Missing fields: provider, start, end");

        let msg = validation_message(request("1", "", " ").validate());
        assert_eq!(msg, "Missing fields: start, end");
    }

    #[test]
    fn rejects_non_iso_timestamps() {
        let msg = validation_message(request("1", "next tuesday", "2025-11-01T13:30:00Z").validate());
        assert!(msg.starts_with("start/end must be ISO datetimes"));
    }

    #[test]
    fn rejects_end_not_after_start() {
        let msg = validation_message(
            request("1", "2025-11-01T13:30:00Z", "2025-11-01T13:30:00Z").validate(),
        );
        assert_eq!(msg, "end must be after start");
        let msg = validation_message(
            request("1", "2025-11-01T14:00:00Z", "2025-11-01T13:30:00Z").validate(),
        );
        assert_eq!(msg, "end must be after start");
    }

    #[test]
    fn defaults_status_and_trims_text() {
        let mut req = request("4", "2025-11-01T13:00:00Z", "2025-11-01T13:30:00Z");
        req.service = "  checkup ".to_string();
        req.patient = Some(IdValue::Number(9));
        let booking = req.validate().unwrap();
        assert_eq!(booking.provider_id, 4);
        assert_eq!(booking.patient_id, Some(9));
        assert_eq!(booking.service, "checkup");
        assert_eq!(booking.status, AppointmentStatus::Requested);
    }

    #[test]
    fn rejects_unknown_status() {
        let mut req = request("1", "2025-11-01T13:00:00Z", "2025-11-01T13:30:00Z");
        req.status = Some("booked".to_string());
        assert!(matches!(req.validate(), Err(ApiError::Validation(_))));
    }
}
