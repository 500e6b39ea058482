//! One function per statement issued against the `subscriber` table.
//!
//! Only DML is issued; the table must already exist. Writes run in their own
//! transaction and are committed before returning.

use sqlx::{Connection, MySqlConnection};

use crate::models::email::Subscriber;

const INSERT: &str = "INSERT INTO subscriber (email) VALUES (?)";
const COUNT: &str = "SELECT COUNT(*) FROM subscriber";
const FIND_EMAIL: &str = "SELECT email FROM subscriber WHERE email = ?";
const LIST: &str = "SELECT email FROM subscriber";
const UPDATE_EMAIL: &str = "UPDATE subscriber SET email = ? WHERE email = ?";
const DELETE_BY_EMAIL: &str = "DELETE FROM subscriber WHERE email = ?";
const DELETE_ALL: &str = "DELETE FROM subscriber";

pub async fn insert(
    conn: &mut MySqlConnection,
    subscriber: &Subscriber,
) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query(INSERT)
        .bind(&subscriber.email)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::debug!(email = %subscriber.email, "inserted subscriber");
    Ok(result.rows_affected())
}

pub async fn count(conn: &mut MySqlConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(COUNT)
        .fetch_one(&mut *conn)
        .await
}

pub async fn find_email(
    conn: &mut MySqlConnection,
    email: &str,
) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query_as::<_, (String,)>(FIND_EMAIL)
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.map(|r| r.0))
}

pub async fn list(conn: &mut MySqlConnection) -> Result<Vec<Subscriber>, sqlx::Error> {
    sqlx::query_as::<_, Subscriber>(LIST)
        .fetch_all(&mut *conn)
        .await
}

pub async fn update_email(
    conn: &mut MySqlConnection,
    from: &str,
    to: &Subscriber,
) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query(UPDATE_EMAIL)
        .bind(&to.email)
        .bind(from)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::debug!(from, to = %to.email, rows = result.rows_affected(), "updated subscriber");
    Ok(result.rows_affected())
}

pub async fn delete_by_email(conn: &mut MySqlConnection, email: &str) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query(DELETE_BY_EMAIL)
        .bind(email)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    if result.rows_affected() == 0 {
        tracing::debug!(email, "no subscriber to delete");
    }
    Ok(result.rows_affected())
}

/// Empties the table. Running it on an empty table changes nothing.
pub async fn delete_all(conn: &mut MySqlConnection) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query(DELETE_ALL)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::debug!(rows = result.rows_affected(), "cleared subscriber table");
    Ok(result.rows_affected())
}
