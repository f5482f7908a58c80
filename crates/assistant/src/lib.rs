//! # `gosense-assistant` - 模拟 AI 助手
//!
//! 关键词分类 + 静态回复表，回复通过定时器延迟送达以模拟异步应答。

pub mod classifier;
pub mod session;
