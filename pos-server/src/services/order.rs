//! Order service

use shared::error::{AppError, ErrorCode};
use shared::models::{Order, OrderCreate, OrderStatusUpdate};
use sqlx::SqlitePool;

use super::ServiceResult;
use crate::db::repository::{menu, order, order_table};
use crate::domain::order as rules;

/// Place an order on an occupied table; it starts COOKING
pub async fn create(pool: &SqlitePool, data: OrderCreate) -> ServiceResult<Order> {
    let menu_ids = rules::validate_line_items(&data.order_line_items)?;

    let mut tx = pool.begin().await?;

    let table = order_table::find_by_id(&mut *tx, data.order_table_id).await?;
    let table = rules::validate_orderable_table(table.as_ref())
        .map_err(|e| e.with_detail("orderTableId", data.order_table_id))?;

    let found = menu::count_existing(&mut *tx, &menu_ids).await?;
    if found != menu_ids.len() as i64 {
        return Err(AppError::new(ErrorCode::MenuNotFound)
            .with_detail("menuIds", menu_ids)
            .into());
    }

    let created = order::create(
        &mut *tx,
        table.id,
        shared::util::now_millis(),
        &data.order_line_items,
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        order_id = created.id,
        table_id = created.order_table_id,
        items = created.order_line_items.len(),
        "Order created"
    );
    Ok(created)
}

pub async fn list(pool: &SqlitePool) -> ServiceResult<Vec<Order>> {
    let mut conn = pool.acquire().await?;
    Ok(order::find_all(&mut conn).await?)
}

pub async fn change_status(
    pool: &SqlitePool,
    id: i64,
    data: OrderStatusUpdate,
) -> ServiceResult<Order> {
    let mut tx = pool.begin().await?;

    let current = order::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("orderId", id))?;
    let next = rules::transition(current.order_status, data.order_status)?;

    let updated = order::update_status(&mut *tx, id, next).await?;
    tx.commit().await?;

    tracing::info!(
        order_id = id,
        from = %current.order_status,
        to = %updated.order_status,
        "Order status changed"
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::services::{menu as menus, menu_group, order_table as tables, product, table_group};
    use shared::models::{
        MenuCreate, MenuGroupCreate, MenuProductInput, OrderLineItemInput, OrderStatus,
        OrderTable, OrderTableCreate, ProductCreate, TableGroupCreate, TableRef,
    };

    async fn setup() -> (SqlitePool, i64) {
        let pool = DbService::in_memory().await.unwrap().pool;
        let group = menu_group::create(
            &pool,
            MenuGroupCreate {
                name: "한마리메뉴".into(),
            },
        )
        .await
        .unwrap();
        let fried = product::create(
            &pool,
            ProductCreate {
                name: "후라이드".into(),
                price: Some(16000.0),
            },
        )
        .await
        .unwrap();
        let menu = menus::create(
            &pool,
            MenuCreate {
                name: "후라이드치킨".into(),
                price: Some(16000.0),
                menu_group_id: group.id,
                menu_products: vec![MenuProductInput {
                    product_id: fried.id,
                    quantity: 1,
                }],
            },
        )
        .await
        .unwrap();
        (pool, menu.id)
    }

    async fn new_table(pool: &SqlitePool, empty: bool) -> OrderTable {
        tables::create(
            pool,
            OrderTableCreate {
                number_of_guests: 0,
                empty,
            },
        )
        .await
        .unwrap()
    }

    fn order_for(table_id: i64, menu_id: i64) -> OrderCreate {
        OrderCreate {
            order_table_id: table_id,
            order_line_items: vec![OrderLineItemInput {
                menu_id,
                quantity: 2,
            }],
        }
    }

    fn status(order_status: OrderStatus) -> OrderStatusUpdate {
        OrderStatusUpdate { order_status }
    }

    #[tokio::test]
    async fn test_order_lifecycle() {
        let (pool, menu_id) = setup().await;
        let table = new_table(&pool, false).await;

        let created = create(&pool, order_for(table.id, menu_id)).await.unwrap();
        assert_eq!(created.order_status, OrderStatus::Cooking);
        assert_eq!(created.order_line_items.len(), 1);
        assert_eq!(created.order_line_items[0].menu_id, menu_id);
        assert_eq!(created.order_line_items[0].quantity, 2);

        let meal = change_status(&pool, created.id, status(OrderStatus::Meal))
            .await
            .unwrap();
        assert_eq!(meal.order_status, OrderStatus::Meal);

        change_status(&pool, created.id, status(OrderStatus::Completion))
            .await
            .unwrap();

        let err: AppError = change_status(&pool, created.id, status(OrderStatus::Meal))
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::OrderAlreadyCompleted);

        let orders = list(&pool).await.unwrap();
        assert_eq!(orders[0].order_status, OrderStatus::Completion);
    }

    #[tokio::test]
    async fn test_order_on_empty_table_fails() {
        let (pool, menu_id) = setup().await;
        let table = new_table(&pool, true).await;

        let err: AppError = create(&pool, order_for(table.id, menu_id))
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::TableEmpty);
        assert_eq!(err.message, "Order from empty table is not allowed");
        assert!(list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_with_unknown_table_or_menu_fails() {
        let (pool, menu_id) = setup().await;
        let table = new_table(&pool, false).await;

        let err: AppError = create(&pool, order_for(777, menu_id))
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::TableNotFound);

        let err: AppError = create(&pool, order_for(table.id, 777))
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::MenuNotFound);
    }

    #[tokio::test]
    async fn test_unknown_order_status_change_fails() {
        let (pool, _) = setup().await;
        let err: AppError = change_status(&pool, 1, status(OrderStatus::Meal))
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn test_ungroup_blocked_by_running_order() {
        let (pool, menu_id) = setup().await;
        let a = new_table(&pool, true).await;
        let b = new_table(&pool, true).await;
        let group = table_group::create(
            &pool,
            TableGroupCreate {
                order_tables: vec![TableRef { id: a.id }, TableRef { id: b.id }],
            },
        )
        .await
        .unwrap();

        let placed = create(&pool, order_for(a.id, menu_id)).await.unwrap();

        let err: AppError = table_group::ungroup(&pool, group.id)
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::TableGroupNotCompleted);
        for t in tables::list(&pool).await.unwrap() {
            assert_eq!(t.table_group_id, Some(group.id));
        }

        change_status(&pool, placed.id, status(OrderStatus::Completion))
            .await
            .unwrap();
        table_group::ungroup(&pool, group.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_running_order_keeps_table_occupied() {
        let (pool, menu_id) = setup().await;
        let table = new_table(&pool, false).await;
        create(&pool, order_for(table.id, menu_id)).await.unwrap();

        let err: AppError = tables::change_empty(
            &pool,
            table.id,
            shared::models::OrderTableEmptyUpdate { empty: true },
        )
        .await
        .unwrap_err()
        .into();
        assert_eq!(err.code, ErrorCode::TableHasUncompletedOrders);
    }
}
