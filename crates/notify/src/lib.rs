//! # `gosense-notify` - 预警与通知
//!
//! 波动预警规则、容量受限的通知中心、提示音以及模拟的新闻推送。

pub mod center;
pub mod news;
pub mod rule;
pub mod sound;
