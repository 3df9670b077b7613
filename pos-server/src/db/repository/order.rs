//! Order Repository
//!
//! Orders are stored in the `orders` table (ORDER is a keyword); line items
//! are owned by their order and written with it.

use super::{RepoError, RepoResult, placeholders};
use shared::models::{Order, OrderLineItem, OrderLineItemInput, OrderStatus};
use sqlx::SqliteConnection;

const ORDER_SELECT: &str = "SELECT id, order_table_id, order_status, ordered_time FROM orders";

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<Order>> {
    let sql = format!("{ORDER_SELECT} ORDER BY ordered_time, id");
    let mut orders = sqlx::query_as::<_, Order>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    for order in &mut orders {
        order.order_line_items = find_line_items(conn, order.id).await?;
    }
    Ok(orders)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ?");
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    match order {
        Some(mut o) => {
            o.order_line_items = find_line_items(conn, o.id).await?;
            Ok(Some(o))
        }
        None => Ok(None),
    }
}

pub async fn find_line_items(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> RepoResult<Vec<OrderLineItem>> {
    let items = sqlx::query_as::<_, OrderLineItem>(
        "SELECT seq, order_id, menu_id, quantity FROM order_line_item WHERE order_id = ? ORDER BY seq",
    )
    .bind(order_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(items)
}

/// Statuses of every order placed on any of `table_ids`
pub async fn find_statuses_by_tables(
    conn: &mut SqliteConnection,
    table_ids: &[i64],
) -> RepoResult<Vec<OrderStatus>> {
    if table_ids.is_empty() {
        return Ok(Vec::new());
    }
    let sql = format!(
        "SELECT order_status FROM orders WHERE order_table_id IN ({})",
        placeholders(table_ids.len())
    );
    let mut query = sqlx::query_scalar::<_, OrderStatus>(&sql);
    for id in table_ids {
        query = query.bind(*id);
    }
    let statuses = query.fetch_all(&mut *conn).await?;
    Ok(statuses)
}

/// Insert an order and its line items (call inside a transaction)
pub async fn create(
    conn: &mut SqliteConnection,
    order_table_id: i64,
    ordered_time: i64,
    items: &[OrderLineItemInput],
) -> RepoResult<Order> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO orders (id, order_table_id, order_status, ordered_time) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(id)
    .bind(order_table_id)
    .bind(OrderStatus::Cooking)
    .bind(ordered_time)
    .execute(&mut *conn)
    .await?;

    for item in items {
        sqlx::query("INSERT INTO order_line_item (order_id, menu_id, quantity) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(item.menu_id)
            .bind(item.quantity)
            .execute(&mut *conn)
            .await?;
    }

    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

pub async fn update_status(
    conn: &mut SqliteConnection,
    id: i64,
    status: OrderStatus,
) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE orders SET order_status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}
