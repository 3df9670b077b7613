//! Menu group service

use shared::models::{MenuGroup, MenuGroupCreate};
use sqlx::SqlitePool;

use super::ServiceResult;
use crate::db::repository::menu_group;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

pub async fn create(pool: &SqlitePool, data: MenuGroupCreate) -> ServiceResult<MenuGroup> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

    let mut conn = pool.acquire().await?;
    let created = menu_group::create(&mut conn, &data.name).await?;

    tracing::info!(menu_group_id = created.id, name = %created.name, "Menu group created");
    Ok(created)
}

pub async fn list(pool: &SqlitePool) -> ServiceResult<Vec<MenuGroup>> {
    let mut conn = pool.acquire().await?;
    Ok(menu_group::find_all(&mut conn).await?)
}
