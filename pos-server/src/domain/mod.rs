//! Domain rules
//!
//! Plain functions over already-fetched state plus the requested change.
//! They never touch the database: services load what a rule needs, call it,
//! and only write when it returns `Ok`.
//!
//! - [`money`] - f64 ⇄ Decimal conversion for price arithmetic
//! - [`product`] - product price rules
//! - [`menu`] - menu price vs. constituent products
//! - [`table`] - table grouping, ungrouping, empty flag and guest count
//! - [`order`] - order placement and status transitions

pub mod menu;
pub mod money;
pub mod order;
pub mod product;
pub mod table;
