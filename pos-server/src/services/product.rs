//! Product service

use shared::models::{Product, ProductCreate};
use sqlx::SqlitePool;

use super::ServiceResult;
use crate::db::repository::product;
use crate::domain;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> ServiceResult<Product> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    let price = domain::product::validate_price(data.price)?;

    let mut conn = pool.acquire().await?;
    let created = product::create(&mut conn, &data.name, price).await?;

    tracing::info!(product_id = created.id, name = %created.name, price = created.price, "Product created");
    Ok(created)
}

pub async fn list(pool: &SqlitePool) -> ServiceResult<Vec<Product>> {
    let mut conn = pool.acquire().await?;
    Ok(product::find_all(&mut conn).await?)
}
