//! Table group service
//!
//! Grouping attaches two or more free tables to a new group and marks them
//! occupied. Ungrouping detaches them again once every order on them is
//! completed; the empty flags are left untouched.

use shared::error::{AppError, ErrorCode};
use shared::models::{TableGroup, TableGroupCreate};
use sqlx::SqlitePool;

use super::ServiceResult;
use crate::db::repository::{order, order_table, table_group};
use crate::domain::table as rules;

pub async fn create(pool: &SqlitePool, data: TableGroupCreate) -> ServiceResult<TableGroup> {
    let ids = rules::distinct_ids(&data.order_tables);
    rules::validate_group_size(&ids)?;

    let mut tx = pool.begin().await?;

    let tables = order_table::find_by_ids(&mut *tx, &ids).await?;
    rules::validate_groupable(&ids, &tables)?;

    let mut group = table_group::create(&mut *tx, shared::util::now_millis()).await?;
    order_table::attach_to_group(&mut *tx, &ids, group.id).await?;
    group.order_tables = order_table::find_by_group(&mut *tx, group.id).await?;

    tx.commit().await?;

    tracing::info!(
        table_group_id = group.id,
        tables = ?ids,
        "Table group created"
    );
    Ok(group)
}

pub async fn ungroup(pool: &SqlitePool, id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    let group = table_group::find_by_id(&mut *tx, id).await?.ok_or_else(|| {
        AppError::new(ErrorCode::TableGroupNotFound).with_detail("tableGroupId", id)
    })?;
    let table_ids: Vec<i64> = group.order_tables.iter().map(|t| t.id).collect();

    let statuses = order::find_statuses_by_tables(&mut *tx, &table_ids).await?;
    rules::validate_ungroup(&statuses)?;

    order_table::detach_group(&mut *tx, id).await?;
    table_group::delete(&mut *tx, id).await?;

    tx.commit().await?;

    tracing::info!(table_group_id = id, tables = ?table_ids, "Table group dissolved");
    Ok(())
}
