use crate::schema::appointments;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::{fmt, str::FromStr};

#[derive(Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = appointments)]
pub struct Appointment {
    pub id: i32,
    pub patient_id: Option<i32>,
    pub provider_id: i32,
    pub patient_name: String,
    pub provider_name: String,
    pub service: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = appointments)]
pub struct NewAppointment {
    pub patient_id: Option<i32>,
    pub provider_id: i32,
    pub patient_name: String,
    pub provider_name: String,
    pub service: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub const APPOINT_STATUS_REQUESTED: &str = "requested";
pub const APPOINT_STATUS_CONFIRMED: &str = "confirmed";
pub const APPOINT_STATUS_CANCELLED: &str = "cancelled";
pub const APPOINT_STATUS_COMPLETED: &str = "completed";

/// Any status may follow any other; transitions are not guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentStatus {
    #[default]
    Requested,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Requested => APPOINT_STATUS_REQUESTED,
            AppointmentStatus::Confirmed => APPOINT_STATUS_CONFIRMED,
            AppointmentStatus::Cancelled => APPOINT_STATUS_CANCELLED,
            AppointmentStatus::Completed => APPOINT_STATUS_COMPLETED,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            APPOINT_STATUS_REQUESTED => Ok(AppointmentStatus::Requested),
            APPOINT_STATUS_CONFIRMED => Ok(AppointmentStatus::Confirmed),
            APPOINT_STATUS_CANCELLED => Ok(AppointmentStatus::Cancelled),
            APPOINT_STATUS_COMPLETED => Ok(AppointmentStatus::Completed),
            other => Err(format!(
                "Unknown status '{}', expected one of requested, confirmed, cancelled, completed",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!(
            " confirmed ".parse::<AppointmentStatus>(),
            Ok(AppointmentStatus::Confirmed)
        );
        assert_eq!(AppointmentStatus::default().as_str(), "requested");
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("booked".parse::<AppointmentStatus>().is_err());
        assert!("".parse::<AppointmentStatus>().is_err());
    }
}
