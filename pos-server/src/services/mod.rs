//! 服务层 - 业务用例
//!
//! 每个用例在一个 SQLite 事务内完成：加载领域规则需要的状态、调用
//! [`crate::domain`] 中的规则、规则通过后再写入。
//!
//! # 服务列表
//!
//! - [`product`] - 单品
//! - [`menu_group`] - 菜单分组
//! - [`menu`] - 菜单 (价格不超过单品合计)
//! - [`order_table`] - 桌台
//! - [`table_group`] - 并桌 / 拆桌
//! - [`order`] - 订单与状态流转
//! - [`https`] - HTTP 路由与中间件

pub mod error;
pub mod https;
pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod table_group;

pub use error::{ServiceError, ServiceResult};
pub use https::{build_app, build_router};
