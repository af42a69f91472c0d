use anyhow::Context;
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    database::{get_db_conn, DbPool},
    error::{ApiError, ApiResult},
    models::users::{NewUser, UserData},
    utils::hash_password,
};

pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone)]
pub struct Accounts {
    pool: DbPool,
}

impl Accounts {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn register(&self, account: NewAccount) -> ApiResult<UserData> {
        use crate::schema::users;

        let mut conn = get_db_conn(&self.pool)?;
        conn.immediate_transaction::<_, ApiError, _>(|conn| {
            let res = users::table
                .filter(users::username.eq(&account.username))
                .count()
                .get_result::<i64>(conn)
                .context("DB error")?;
            if res > 0 {
                return Err(ApiError::UsernameTaken);
            }

            let data = NewUser {
                password: hash_password(&account.username, &account.password),
                username: account.username.clone(),
                email: account.email,
                first_name: account.first_name,
                last_name: account.last_name,
                created_at: Utc::now().naive_utc(),
            };
            diesel::insert_into(users::table)
                .values(data)
                .execute(conn)
                .context("DB error")?;

            let user = users::table
                .filter(users::username.eq(&account.username))
                .select(UserData::as_select())
                .first::<UserData>(conn)
                .context("DB error")?;
            Ok(user)
        })
    }

    /// Checks the credentials and returns the user together with their
    /// provider profile id, if they have one.
    pub fn login(&self, username: &str, password: &str) -> ApiResult<(UserData, Option<i32>)> {
        use crate::schema::{providers, users};

        let mut conn = get_db_conn(&self.pool)?;
        let hashed_password = hash_password(username, password);
        let user = users::table
            .filter(users::username.eq(username))
            .filter(users::password.eq(&hashed_password))
            .select(UserData::as_select())
            .first::<UserData>(&mut conn)
            .optional()
            .context("DB error")?
            .ok_or(ApiError::InvalidCredentials)?;

        let provider_id = providers::table
            .filter(providers::user_id.eq(user.id))
            .select(providers::id)
            .first::<i32>(&mut conn)
            .optional()
            .context("DB error")?;

        Ok((user, provider_id))
    }
}
