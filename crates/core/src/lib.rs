//! # `gosense-core` - 领域契约层
//!
//! 本 crate 只包含实体、错误与端口（trait）定义，不包含任何具体实现。
//!
//! ## 架构职责
//! - `market`: 历史序列与预测序列实体、随机源端口
//! - `notify`: 通知实体、提示音端口
//! - `assistant`: 聊天消息实体
//! - `settings`: 用户偏好（图表类型、货币、语言、开关）
//! - `common`: 周期枚举、时间供给器
//! - `config`: 全局应用配置

pub mod assistant;
pub mod common;
pub mod config;
pub mod market;
pub mod notify;
pub mod settings;
