//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - tracing 日志初始化
//! - [`validation`] - 文本输入校验

pub mod logger;
pub mod validation;
