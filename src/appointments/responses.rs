use serde::Serialize;

use crate::{models::appointments::Appointment, utils::format_time_str};

#[derive(Serialize)]
pub struct AppointmentItem {
    pub id: i32,
    pub patient: Option<i32>,
    pub provider: i32,
    pub patient_name: String,
    pub provider_name: String,
    pub service: String,
    pub start: String,
    pub end: String,
    pub status: String,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Appointment> for AppointmentItem {
    fn from(data: Appointment) -> Self {
        Self {
            id: data.id,
            patient: data.patient_id,
            provider: data.provider_id,
            patient_name: data.patient_name,
            provider_name: data.provider_name,
            service: data.service,
            start: format_time_str(&data.start_time),
            end: format_time_str(&data.end_time),
            status: data.status,
            notes: data.notes,
            created_at: format_time_str(&data.created_at),
            updated_at: format_time_str(&data.updated_at),
        }
    }
}
