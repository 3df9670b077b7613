//! Order table service

use shared::error::{AppError, ErrorCode};
use shared::models::{OrderTable, OrderTableCreate, OrderTableEmptyUpdate, OrderTableGuestsUpdate};
use sqlx::{SqliteConnection, SqlitePool};

use super::ServiceResult;
use crate::db::repository::{order, order_table};
use crate::domain::table as rules;

/// New tables are never grouped
pub async fn create(pool: &SqlitePool, data: OrderTableCreate) -> ServiceResult<OrderTable> {
    rules::validate_initial_guests(data.number_of_guests)?;

    let mut conn = pool.acquire().await?;
    let created = order_table::create(&mut conn, data.number_of_guests, data.empty).await?;

    tracing::info!(
        table_id = created.id,
        number_of_guests = created.number_of_guests,
        empty = created.empty,
        "Order table created"
    );
    Ok(created)
}

pub async fn list(pool: &SqlitePool) -> ServiceResult<Vec<OrderTable>> {
    let mut conn = pool.acquire().await?;
    Ok(order_table::find_all(&mut conn).await?)
}

pub async fn change_empty(
    pool: &SqlitePool,
    id: i64,
    data: OrderTableEmptyUpdate,
) -> ServiceResult<OrderTable> {
    let mut tx = pool.begin().await?;

    let table = require_table(&mut *tx, id).await?;
    let statuses = order::find_statuses_by_tables(&mut *tx, &[id]).await?;
    rules::validate_change_empty(&table, &statuses)?;

    let updated = order_table::update_empty(&mut *tx, id, data.empty).await?;
    tx.commit().await?;

    tracing::info!(table_id = id, empty = updated.empty, "Order table empty state changed");
    Ok(updated)
}

pub async fn change_number_of_guests(
    pool: &SqlitePool,
    id: i64,
    data: OrderTableGuestsUpdate,
) -> ServiceResult<OrderTable> {
    let mut tx = pool.begin().await?;

    let table = require_table(&mut *tx, id).await?;
    rules::validate_change_guests(&table, data.number_of_guests)?;

    let updated = order_table::update_number_of_guests(&mut *tx, id, data.number_of_guests).await?;
    tx.commit().await?;

    tracing::info!(
        table_id = id,
        number_of_guests = updated.number_of_guests,
        "Order table guest count changed"
    );
    Ok(updated)
}

async fn require_table(conn: &mut SqliteConnection, id: i64) -> ServiceResult<OrderTable> {
    order_table::find_by_id(conn, id).await?.ok_or_else(|| {
        AppError::new(ErrorCode::TableNotFound)
            .with_detail("tableId", id)
            .into()
    })
}
