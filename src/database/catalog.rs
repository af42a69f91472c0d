use anyhow::Context;
use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::{
    booking::{self, TimeRange},
    database::{assert, get_db_conn, DbPool},
    error::{ApiError, ApiResult},
    models::{
        availabilities::{AvailabilityData, AvailabilityRow, NewAvailability},
        providers::{ProviderData, ProviderRow},
        specialties::SpecialtyData,
        users::UserData,
    },
    utils::{get_str_pattern, LIKE_ESCAPE},
};

#[derive(Default)]
pub struct ProviderFilter {
    pub specialty_id: Option<i32>,
    /// Case-insensitive substring of the provider's location.
    pub location: Option<String>,
}

/// Read side over specialties, providers and their declared availability.
#[derive(Clone)]
pub struct Catalog {
    pool: DbPool,
}

impl Catalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list_specialties(&self) -> ApiResult<Vec<SpecialtyData>> {
        use crate::schema::specialties;

        let mut conn = get_db_conn(&self.pool)?;
        let items = specialties::table
            .order(specialties::name.asc())
            .select(SpecialtyData::as_select())
            .load::<SpecialtyData>(&mut conn)
            .context("DB error")?;
        Ok(items)
    }

    pub fn list_providers(&self, filter: ProviderFilter) -> ApiResult<Vec<ProviderRow>> {
        use crate::schema::{providers, specialties, users};

        let mut conn = get_db_conn(&self.pool)?;
        let mut query = providers::table
            .inner_join(users::table)
            .inner_join(specialties::table)
            .select((
                ProviderData::as_select(),
                UserData::as_select(),
                SpecialtyData::as_select(),
            ))
            .order(providers::id.asc())
            .into_boxed();
        if let Some(specialty_id) = filter.specialty_id {
            query = query.filter(providers::specialty_id.eq(specialty_id));
        }
        if let Some(location) = filter.location {
            // LIKE ignores ASCII case in SQLite
            query = query.filter(
                providers::location
                    .like(get_str_pattern(location))
                    .escape(LIKE_ESCAPE),
            );
        }

        let items = query.load::<ProviderRow>(&mut conn).context("DB error")?;
        Ok(items)
    }

    pub fn get_provider(&self, id: i32) -> ApiResult<ProviderRow> {
        use crate::schema::{providers, specialties, users};

        let mut conn = get_db_conn(&self.pool)?;
        providers::table
            .inner_join(users::table)
            .inner_join(specialties::table)
            .filter(providers::id.eq(id))
            .select((
                ProviderData::as_select(),
                UserData::as_select(),
                SpecialtyData::as_select(),
            ))
            .first::<ProviderRow>(&mut conn)
            .optional()
            .context("DB error")?
            .ok_or_else(|| ApiError::not_found("Provider not found"))
    }

    /// Slots starting at or after `now`, earliest first.
    pub fn list_availability(
        &self,
        provider_id: Option<i32>,
        now: NaiveDateTime,
    ) -> ApiResult<Vec<AvailabilityRow>> {
        let mut conn = get_db_conn(&self.pool)?;
        load_availability(&mut conn, provider_id, now)
    }

    /// Like [`Catalog::list_availability`] but a missing provider is an error
    /// rather than an empty list.
    pub fn provider_availability(
        &self,
        provider_id: i32,
        now: NaiveDateTime,
    ) -> ApiResult<Vec<AvailabilityRow>> {
        let mut conn = get_db_conn(&self.pool)?;
        assert::assert_provider(&mut conn, provider_id)?;
        load_availability(&mut conn, Some(provider_id), now)
    }

    /// Declares a new open window. Windows of one provider may touch but not
    /// overlap.
    pub fn add_availability(&self, provider_id: i32, range: TimeRange) -> ApiResult<AvailabilityRow> {
        use crate::schema::{availabilities, providers, specialties, users};

        let mut conn = get_db_conn(&self.pool)?;
        conn.immediate_transaction::<_, ApiError, _>(|conn| {
            assert::assert_provider(conn, provider_id)?;

            let existing = availabilities::table
                .filter(availabilities::provider_id.eq(provider_id))
                .select((availabilities::start_time, availabilities::end_time))
                .load::<(NaiveDateTime, NaiveDateTime)>(conn)
                .context("DB error")?;
            let conflict = booking::find_conflict(
                existing
                    .into_iter()
                    .map(|(start, end)| TimeRange { start, end }),
                &range,
            );
            if conflict.is_some() {
                return Err(ApiError::Conflict(
                    "Time interval conflicts with existing availability".to_string(),
                ));
            }

            let data = NewAvailability {
                provider_id,
                start_time: range.start,
                end_time: range.end,
            };
            diesel::insert_into(availabilities::table)
                .values(data)
                .execute(conn)
                .context("DB error")?;

            let created = availabilities::table
                .inner_join(providers::table.inner_join(users::table).inner_join(specialties::table))
                .order(availabilities::id.desc())
                .select((
                    AvailabilityData::as_select(),
                    UserData::as_select(),
                    SpecialtyData::as_select(),
                ))
                .first::<AvailabilityRow>(conn)
                .context("DB error")?;
            Ok(created)
        })
    }
}

fn load_availability(
    conn: &mut SqliteConnection,
    provider_id: Option<i32>,
    now: NaiveDateTime,
) -> ApiResult<Vec<AvailabilityRow>> {
    use crate::schema::{availabilities, providers, specialties, users};

    let mut query = availabilities::table
        .inner_join(providers::table.inner_join(users::table).inner_join(specialties::table))
        .filter(availabilities::start_time.ge(now))
        .select((
            AvailabilityData::as_select(),
            UserData::as_select(),
            SpecialtyData::as_select(),
        ))
        .order((availabilities::start_time.asc(), availabilities::id.asc()))
        .into_boxed();
    if let Some(provider_id) = provider_id {
        query = query.filter(availabilities::provider_id.eq(provider_id));
    }

    let items = query.load::<AvailabilityRow>(conn).context("DB error")?;
    Ok(items)
}
