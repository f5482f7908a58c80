//! # `gosense-market` - 合成行情序列
//!
//! 提供历史价格随机游走生成器与线性外推预测器，以及可注入的随机源实现。

pub mod forecast;
pub mod generator;
pub mod random;
