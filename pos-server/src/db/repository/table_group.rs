//! Table Group Repository

use super::{RepoError, RepoResult, order_table};
use shared::models::TableGroup;
use sqlx::SqliteConnection;

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<TableGroup>> {
    let group =
        sqlx::query_as::<_, TableGroup>("SELECT id, created_date FROM table_group WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
    match group {
        Some(mut g) => {
            g.order_tables = order_table::find_by_group(conn, g.id).await?;
            Ok(Some(g))
        }
        None => Ok(None),
    }
}

/// Insert the group row only; members are attached by the caller
pub async fn create(conn: &mut SqliteConnection, created_date: i64) -> RepoResult<TableGroup> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO table_group (id, created_date) VALUES (?1, ?2)")
        .bind(id)
        .bind(created_date)
        .execute(&mut *conn)
        .await?;
    Ok(TableGroup {
        id,
        created_date,
        order_tables: Vec::new(),
    })
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM table_group WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table group {id} not found")));
    }
    Ok(())
}
