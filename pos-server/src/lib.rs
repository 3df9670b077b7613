//! Kitchen POS Server - 餐厅点餐后端
//!
//! # 架构概述
//!
//! 请求自上而下经过四层：
//!
//! - **HTTP API** (`api`): axum 路由和处理器, 负责 JSON 和状态码
//! - **服务层** (`services`): 业务用例, 每个用例一个 SQLite 事务
//! - **领域规则** (`domain`): 纯函数, 基于已加载的状态判断是否允许变更
//! - **数据库** (`db`): sqlx + SQLite, 迁移与仓储函数
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务用例、HTTP 中间件
//! ├── domain/        # 领域规则
//! ├── db/            # 连接池、迁移、仓储
//! └── utils/         # 日志、输入校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod domain;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use services::{build_app, build_router};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{LogFormat, init_logger_with_file};

/// 设置运行环境: 加载 .env 并初始化日志
///
/// 返回的 guard 需要持有到进程退出, 否则文件日志可能丢失尾部。
pub fn setup_environment(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let format = if config.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref(), format)
}

pub fn print_banner() {
    println!(
        r#"
    __ __ _ __       __                 ____  ____  _____
   / //_/(_) /______/ /_  ___  ____    / __ \/ __ \/ ___/
  / ,<  / / __/ ___/ __ \/ _ \/ __ \  / /_/ / / / /\__ \
 / /| |/ / /_/ /__/ / / /  __/ / / / / ____/ /_/ /___/ /
/_/ |_/_/\__/\___/_/ /_/\___/_/ /_/ /_/    \____//____/
    "#
    );
}
