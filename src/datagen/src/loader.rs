use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use sqlx::postgres::PgConnectOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use tracing::debug;
use tracing::info;

use crate::config::Db;
use crate::error::Result;
use crate::USER_DIMENSIONS_FILE;

pub const DB_NAME: &str = "task_data";
pub const TABLE_NAME: &str = "user_dimensions";

pub const TABLE_SCHEMA: &str = r#"
CREATE TABLE user_dimensions (
    user_id varchar(255),
    install_tms bigint
)
"#;

pub const INDEX_SCHEMA: &str = r#"
CREATE INDEX user_dimensions_index
    ON user_dimensions (user_id)
"#;

// The CSV writers quote with `\`, which COPY is not told about. Generated
// fields are UUIDs and integers and never get quoted, so the two sides
// never actually disagree.
pub const COPY_STMT: &str = "COPY user_dimensions FROM STDIN WITH (FORMAT csv, DELIMITER ',')";

pub fn connect_options(db: &Db, dbname: Option<&str>) -> PgConnectOptions {
    let opts = PgConnectOptions::new()
        .host(db.host.as_str())
        .port(db.port)
        .username(db.user.as_str())
        .password(db.password.as_str());
    match dbname {
        Some(name) => opts.database(name),
        None => opts,
    }
}

// One short-lived autocommit connection per operation, never pooled.
async fn connect(db: &Db, dbname: Option<&str>) -> Result<PgConnection> {
    Ok(PgConnection::connect_with(&connect_options(db, dbname)).await?)
}

async fn ensure_database(db: &Db) -> Result<()> {
    let mut conn = connect(db, None).await?;
    let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(DB_NAME)
        .fetch_optional(&mut conn)
        .await?;
    if exists.is_none() {
        info!("creating database {DB_NAME}");
        conn.execute(format!("CREATE DATABASE {DB_NAME}").as_str())
            .await?;
    }

    Ok(())
}

async fn ensure_table(db: &Db) -> Result<()> {
    let mut conn = connect(db, Some(DB_NAME)).await?;
    let exists: Option<i32> = sqlx::query_scalar(
        "SELECT 1 FROM pg_tables WHERE schemaname = 'public' AND tablename = $1",
    )
    .bind(TABLE_NAME)
    .fetch_optional(&mut conn)
    .await?;
    if exists.is_none() {
        info!("creating table {TABLE_NAME}");
        conn.execute(TABLE_SCHEMA).await?;
        conn.execute(INDEX_SCHEMA).await?;
    } else {
        info!("truncating table {TABLE_NAME}");
        conn.execute(format!("TRUNCATE TABLE {TABLE_NAME}").as_str())
            .await?;
    }

    Ok(())
}

/// Ensures database, table and index exist (truncating an existing table),
/// then streams the decompressed dimension file through `COPY ... FROM
/// STDIN`. Running it twice leaves the schema unchanged and the row count
/// equal to the latest dimension file.
pub async fn load(db: &Db, dir: &Path) -> Result<()> {
    ensure_database(db).await?;
    ensure_table(db).await?;

    let mut buf = Vec::new();
    let file = File::open(dir.join(USER_DIMENSIONS_FILE))?;
    GzDecoder::new(file).read_to_end(&mut buf)?;

    let mut conn = connect(db, Some(DB_NAME)).await?;
    let mut copy = conn.copy_in_raw(COPY_STMT).await?;
    copy.send(buf.as_slice()).await?;
    let rows = copy.finish().await?;
    debug!("copied {rows} rows into {TABLE_NAME}");

    Ok(())
}
