//! Product Repository

use super::{RepoError, RepoResult, placeholders};
use shared::models::Product;
use sqlx::SqliteConnection;

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM product ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
    Ok(products)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT id, name, price FROM product WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(product)
}

/// Fetch every product whose id is in `ids`; unknown ids are simply absent
pub async fn find_by_ids(conn: &mut SqliteConnection, ids: &[i64]) -> RepoResult<Vec<Product>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let sql = format!(
        "SELECT id, name, price FROM product WHERE id IN ({})",
        placeholders(ids.len())
    );
    let mut query = sqlx::query_as::<_, Product>(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    let products = query.fetch_all(&mut *conn).await?;
    Ok(products)
}

pub async fn create(conn: &mut SqliteConnection, name: &str, price: f64) -> RepoResult<Product> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO product (id, name, price) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(name)
        .bind(price)
        .execute(&mut *conn)
        .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}
