pub mod accounts;
pub mod assert;
pub mod catalog;
pub mod store;

use anyhow::Context;
use diesel::{connection::SimpleConnection, r2d2::ConnectionManager, SqliteConnection};
use r2d2::{CustomizeConnection, PooledConnection};

pub use self::{accounts::Accounts, catalog::Catalog, store::AppointmentStore};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

const SCHEMA_SQL: &str = include_str!("../../migrations/schema.sql");
const IN_MEMORY_URL: &str = ":memory:";
const BUSY_TIMEOUT_MS: u32 = 5000;

#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the pool and makes sure every table exists.
///
/// `:memory:` databases live only as long as their single connection, so
/// such pools are capped at one connection that never expires.
pub fn build_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = r2d2::Pool::builder().connection_customizer(Box::new(ConnectionOptions {
        busy_timeout_ms: BUSY_TIMEOUT_MS,
    }));
    builder = if database_url == IN_MEMORY_URL {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(max_size)
    };
    let pool = builder.build(manager).context("Failed to create pool")?;

    let mut conn = get_db_conn(&pool)?;
    conn.batch_execute(SCHEMA_SQL)
        .context("Failed to apply database schema")?;

    Ok(pool)
}

pub fn get_db_conn(pool: &DbPool) -> anyhow::Result<DbConn> {
    pool.get().context("DB connection")
}
