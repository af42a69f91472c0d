use anyhow::Context;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::{
    booking::{self, TimeRange},
    database::{assert, get_db_conn, DbPool},
    error::{ApiError, ApiResult},
    models::{
        appointments::{Appointment, AppointmentStatus, NewAppointment},
        providers::{provider_display, ProviderData, ProviderRow},
        specialties::SpecialtyData,
        users::UserData,
    },
};

pub const MAX_LIST_LIMIT: i64 = 50;

/// A booking request that already passed field validation.
pub struct NewBooking {
    pub provider_id: i32,
    pub patient_id: Option<i32>,
    pub range: TimeRange,
    pub patient_name: String,
    pub provider_name: String,
    pub service: String,
    pub notes: String,
    pub status: AppointmentStatus,
}

#[derive(Clone)]
pub struct AppointmentStore {
    pool: DbPool,
}

impl AppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts the booking unless it overlaps one of the provider's
    /// appointments.
    ///
    /// The lookup, the overlap check and the insert share one immediate
    /// transaction, so the SQLite write lock is held from the first read and
    /// concurrent bookings for the same slot are serialized.
    pub fn create(&self, booking: NewBooking) -> ApiResult<Appointment> {
        use crate::schema::{appointments, providers, specialties, users};

        let mut conn = get_db_conn(&self.pool)?;
        conn.immediate_transaction::<_, ApiError, _>(|conn| {
            let (_, provider_user, specialty) = providers::table
                .inner_join(users::table)
                .inner_join(specialties::table)
                .filter(providers::id.eq(booking.provider_id))
                .select((
                    ProviderData::as_select(),
                    UserData::as_select(),
                    SpecialtyData::as_select(),
                ))
                .first::<ProviderRow>(conn)
                .optional()
                .context("DB error")?
                .ok_or_else(|| ApiError::not_found("Provider not found"))?;

            let patient = match booking.patient_id {
                Some(id) => Some(
                    users::table
                        .find(id)
                        .select(UserData::as_select())
                        .first::<UserData>(conn)
                        .optional()
                        .context("DB error")?
                        .ok_or_else(|| ApiError::not_found("Patient not found"))?,
                ),
                None => None,
            };

            let existing = appointments::table
                .filter(appointments::provider_id.eq(booking.provider_id))
                .select((appointments::start_time, appointments::end_time))
                .load::<(NaiveDateTime, NaiveDateTime)>(conn)
                .context("DB error")?;
            booking::check_bookable(
                existing
                    .into_iter()
                    .map(|(start, end)| TimeRange { start, end }),
                &booking.range,
            )?;

            let patient_name = match (booking.patient_name.is_empty(), &patient) {
                (true, Some(patient)) => patient.display_name(),
                _ => booking.patient_name,
            };
            let provider_name = if booking.provider_name.is_empty() {
                provider_display(&provider_user, &specialty)
            } else {
                booking.provider_name
            };

            let now = Utc::now().naive_utc();
            let data = NewAppointment {
                patient_id: booking.patient_id,
                provider_id: booking.provider_id,
                patient_name,
                provider_name,
                service: booking.service,
                start_time: booking.range.start,
                end_time: booking.range.end,
                status: booking.status.as_str().to_string(),
                notes: booking.notes,
                created_at: now,
                updated_at: now,
            };
            diesel::insert_into(appointments::table)
                .values(data)
                .execute(conn)
                .context("DB error")?;

            let created = appointments::table
                .order(appointments::id.desc())
                .select(Appointment::as_select())
                .first::<Appointment>(conn)
                .context("DB error")?;
            Ok(created)
        })
    }

    /// Most recent bookings first; `limit` is clamped to `0..=50`.
    pub fn list(&self, limit: i64) -> ApiResult<Vec<Appointment>> {
        use crate::schema::appointments;

        let limit = limit.clamp(0, MAX_LIST_LIMIT);
        let mut conn = get_db_conn(&self.pool)?;
        let items = appointments::table
            .order((appointments::start_time.desc(), appointments::id.desc()))
            .limit(limit)
            .select(Appointment::as_select())
            .load::<Appointment>(&mut conn)
            .context("DB error")?;
        Ok(items)
    }

    /// Sets any status; there is no transition table.
    pub fn update_status(&self, id: i32, status: AppointmentStatus) -> ApiResult<Appointment> {
        use crate::schema::appointments;

        let mut conn = get_db_conn(&self.pool)?;
        conn.transaction::<_, ApiError, _>(|conn| {
            assert::assert_appointment(conn, id)?;

            diesel::update(appointments::table.find(id))
                .set((
                    appointments::status.eq(status.as_str()),
                    appointments::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)
                .context("DB error")?;

            let updated = appointments::table
                .find(id)
                .select(Appointment::as_select())
                .first::<Appointment>(conn)
                .context("DB error")?;
            Ok(updated)
        })
    }
}
