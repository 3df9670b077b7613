//! Menu service
//!
//! Creation resolves the group and every product, checks the bundle price
//! against current product prices, then writes the menu and its lines in one
//! transaction.

use std::collections::HashMap;

use shared::error::{AppError, ErrorCode};
use shared::models::{Menu, MenuCreate};
use sqlx::SqlitePool;

use super::ServiceResult;
use crate::db::repository::{menu, menu_group, product};
use crate::domain::menu::{self as rules, PricedLine};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

pub async fn create(pool: &SqlitePool, data: MenuCreate) -> ServiceResult<Menu> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    let price = rules::validate_price(data.price)?;
    rules::validate_quantities(data.menu_products.iter().map(|p| p.quantity))?;

    let mut tx = pool.begin().await?;

    if !menu_group::exists(&mut *tx, data.menu_group_id).await? {
        return Err(AppError::new(ErrorCode::MenuGroupNotFound)
            .with_detail("menuGroupId", data.menu_group_id)
            .into());
    }

    let product_ids: Vec<i64> = data.menu_products.iter().map(|p| p.product_id).collect();
    let prices: HashMap<i64, f64> = product::find_by_ids(&mut *tx, &product_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p.price))
        .collect();

    let mut lines = Vec::with_capacity(data.menu_products.len());
    for mp in &data.menu_products {
        let product_price = prices.get(&mp.product_id).copied().ok_or_else(|| {
            AppError::new(ErrorCode::ProductNotFound).with_detail("productId", mp.product_id)
        })?;
        lines.push(PricedLine {
            product_price,
            quantity: mp.quantity,
        });
    }
    rules::validate_price_within_products(price, &lines)?;

    let created = menu::create(
        &mut *tx,
        &data.name,
        price,
        data.menu_group_id,
        &data.menu_products,
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        menu_id = created.id,
        name = %created.name,
        price = created.price,
        products = created.menu_products.len(),
        "Menu created"
    );
    Ok(created)
}

pub async fn list(pool: &SqlitePool) -> ServiceResult<Vec<Menu>> {
    let mut conn = pool.acquire().await?;
    Ok(menu::find_all(&mut conn).await?)
}
