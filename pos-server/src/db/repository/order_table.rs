//! Order Table Repository

use super::{RepoError, RepoResult, placeholders};
use shared::models::OrderTable;
use sqlx::SqliteConnection;

const TABLE_SELECT: &str = "SELECT id, table_group_id, number_of_guests, empty FROM order_table";

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<OrderTable>> {
    let sql = format!("{TABLE_SELECT} ORDER BY id");
    let tables = sqlx::query_as::<_, OrderTable>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(tables)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<OrderTable>> {
    let sql = format!("{TABLE_SELECT} WHERE id = ?");
    let table = sqlx::query_as::<_, OrderTable>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(table)
}

/// Fetch every table whose id is in `ids`; unknown ids are simply absent
pub async fn find_by_ids(conn: &mut SqliteConnection, ids: &[i64]) -> RepoResult<Vec<OrderTable>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let sql = format!(
        "{TABLE_SELECT} WHERE id IN ({}) ORDER BY id",
        placeholders(ids.len())
    );
    let mut query = sqlx::query_as::<_, OrderTable>(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    let tables = query.fetch_all(&mut *conn).await?;
    Ok(tables)
}

pub async fn find_by_group(
    conn: &mut SqliteConnection,
    table_group_id: i64,
) -> RepoResult<Vec<OrderTable>> {
    let sql = format!("{TABLE_SELECT} WHERE table_group_id = ? ORDER BY id");
    let tables = sqlx::query_as::<_, OrderTable>(&sql)
        .bind(table_group_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(tables)
}

pub async fn create(
    conn: &mut SqliteConnection,
    number_of_guests: i32,
    empty: bool,
) -> RepoResult<OrderTable> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO order_table (id, table_group_id, number_of_guests, empty) VALUES (?1, NULL, ?2, ?3)",
    )
    .bind(id)
    .bind(number_of_guests)
    .bind(empty)
    .execute(&mut *conn)
    .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order table".into()))
}

pub async fn update_empty(
    conn: &mut SqliteConnection,
    id: i64,
    empty: bool,
) -> RepoResult<OrderTable> {
    let rows = sqlx::query("UPDATE order_table SET empty = ? WHERE id = ?")
        .bind(empty)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order table {id} not found")));
    }
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order table {id} not found")))
}

pub async fn update_number_of_guests(
    conn: &mut SqliteConnection,
    id: i64,
    number_of_guests: i32,
) -> RepoResult<OrderTable> {
    let rows = sqlx::query("UPDATE order_table SET number_of_guests = ? WHERE id = ?")
        .bind(number_of_guests)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order table {id} not found")));
    }
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order table {id} not found")))
}

/// Attach tables to a group and mark them occupied
///
/// Only free, ungrouped rows are touched; if any of `ids` was grabbed in the
/// meantime the whole call fails and the caller's transaction rolls back.
pub async fn attach_to_group(
    conn: &mut SqliteConnection,
    ids: &[i64],
    table_group_id: i64,
) -> RepoResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let sql = format!(
        "UPDATE order_table SET table_group_id = ?, empty = 0 WHERE table_group_id IS NULL AND empty = 1 AND id IN ({})",
        placeholders(ids.len())
    );
    let mut query = sqlx::query(&sql).bind(table_group_id);
    for id in ids {
        query = query.bind(*id);
    }
    let rows = query.execute(&mut *conn).await?;
    if rows.rows_affected() != ids.len() as u64 {
        return Err(RepoError::Validation(format!(
            "Only {} of {} tables could join group {table_group_id}",
            rows.rows_affected(),
            ids.len()
        )));
    }
    Ok(())
}

/// Detach every member of a group; the empty flag is left as is
pub async fn detach_group(conn: &mut SqliteConnection, table_group_id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE order_table SET table_group_id = NULL WHERE table_group_id = ?")
        .bind(table_group_id)
        .execute(&mut *conn)
        .await?;
    Ok(rows.rows_affected())
}
