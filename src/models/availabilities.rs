use crate::schema::availabilities;
use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::{specialties::SpecialtyData, users::UserData};

#[derive(Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = availabilities)]
pub struct AvailabilityData {
    pub id: i32,
    pub provider_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = availabilities)]
pub struct NewAvailability {
    pub provider_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// A slot joined with the provider's account and specialty, enough to label it.
pub type AvailabilityRow = (AvailabilityData, UserData, SpecialtyData);
