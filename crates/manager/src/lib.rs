//! # `gosense-manager` - 应用服务层
//!
//! 编排行情生成、预警、预测与聊天，并以集中式状态容器 + Action 分发的方式
//! 取代界面层的散落状态。所有具体实现通过构造函数注入。

pub mod dashboard;
pub mod error;
pub mod prediction;
pub mod session;
pub mod state;
