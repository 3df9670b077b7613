//! Menu Group Repository

use super::{RepoError, RepoResult};
use shared::models::MenuGroup;
use sqlx::SqliteConnection;

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<MenuGroup>> {
    let groups = sqlx::query_as::<_, MenuGroup>("SELECT id, name FROM menu_group ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    Ok(groups)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<MenuGroup>> {
    let group = sqlx::query_as::<_, MenuGroup>("SELECT id, name FROM menu_group WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(group)
}

pub async fn exists(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_group WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count > 0)
}

pub async fn create(conn: &mut SqliteConnection, name: &str) -> RepoResult<MenuGroup> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO menu_group (id, name) VALUES (?1, ?2)")
        .bind(id)
        .bind(name)
        .execute(&mut *conn)
        .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu group".into()))
}
