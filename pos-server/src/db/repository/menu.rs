//! Menu Repository
//!
//! A menu owns its menu_product rows; they are written with the menu and
//! loaded alongside it.

use super::{RepoError, RepoResult, placeholders};
use shared::models::{Menu, MenuProduct, MenuProductInput};
use sqlx::SqliteConnection;

const MENU_SELECT: &str = "SELECT id, name, price, menu_group_id FROM menu";

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<Menu>> {
    let sql = format!("{MENU_SELECT} ORDER BY id");
    let mut menus = sqlx::query_as::<_, Menu>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    for menu in &mut menus {
        menu.menu_products = find_menu_products(conn, menu.id).await?;
    }
    Ok(menus)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Menu>> {
    let sql = format!("{MENU_SELECT} WHERE id = ?");
    let menu = sqlx::query_as::<_, Menu>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    match menu {
        Some(mut m) => {
            m.menu_products = find_menu_products(conn, m.id).await?;
            Ok(Some(m))
        }
        None => Ok(None),
    }
}

pub async fn find_menu_products(
    conn: &mut SqliteConnection,
    menu_id: i64,
) -> RepoResult<Vec<MenuProduct>> {
    let rows = sqlx::query_as::<_, MenuProduct>(
        "SELECT seq, menu_id, product_id, quantity FROM menu_product WHERE menu_id = ? ORDER BY seq",
    )
    .bind(menu_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Number of distinct menus among `ids` that exist
pub async fn count_existing(conn: &mut SqliteConnection, ids: &[i64]) -> RepoResult<i64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "SELECT COUNT(*) FROM menu WHERE id IN ({})",
        placeholders(ids.len())
    );
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    let count = query.fetch_one(&mut *conn).await?;
    Ok(count)
}

/// Insert a menu and its product lines (call inside a transaction)
pub async fn create(
    conn: &mut SqliteConnection,
    name: &str,
    price: f64,
    menu_group_id: i64,
    products: &[MenuProductInput],
) -> RepoResult<Menu> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO menu (id, name, price, menu_group_id) VALUES (?1, ?2, ?3, ?4)")
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(menu_group_id)
        .execute(&mut *conn)
        .await?;

    for p in products {
        sqlx::query("INSERT INTO menu_product (menu_id, product_id, quantity) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(p.product_id)
            .bind(p.quantity)
            .execute(&mut *conn)
            .await?;
    }

    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu".into()))
}
