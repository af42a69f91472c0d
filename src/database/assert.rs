use anyhow::Context;
use diesel::prelude::*;

use crate::error::{ApiError, ApiResult};

pub fn assert_provider(conn: &mut SqliteConnection, id: i32) -> ApiResult<()> {
    use crate::schema::providers;

    let res = providers::table
        .filter(providers::id.eq(id))
        .count()
        .get_result::<i64>(conn)
        .context("DB error")?;

    if res == 0 {
        return Err(ApiError::not_found("Provider not found"));
    }

    Ok(())
}

pub fn assert_appointment(conn: &mut SqliteConnection, id: i32) -> ApiResult<()> {
    use crate::schema::appointments;

    let res = appointments::table
        .filter(appointments::id.eq(id))
        .count()
        .get_result::<i64>(conn)
        .context("DB error")?;

    if res == 0 {
        return Err(ApiError::not_found("Appointment not found"));
    }

    Ok(())
}
