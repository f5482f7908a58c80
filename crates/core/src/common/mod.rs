pub mod time;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 周模式下的横轴标签（周一至周日）。
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// 月模式下的横轴标签（一月至十二月缩写）。
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 月份下拉框中的完整月份名称，下标即月份序号 (0..11)。
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 仪表盘允许选择的年份。
pub const SELECTABLE_YEARS: [i32; 3] = [2023, 2024, 2025];

/// # Summary
/// 图表观察周期枚举，决定序列长度与标签集合。
///
/// # Invariants
/// - `Week` 固定 7 个槽位，`Month` 固定 12 个槽位。
/// - 字面量只接受 "Week" / "Month"（大小写敏感），与界面下拉值保持一致。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Period {
    // 按周展示，7 个交易日标签
    Week,
    // 按年展示，12 个月份标签
    Month,
}

impl Period {
    /// # Summary
    /// 获取该周期的横轴标签集合。
    ///
    /// # Returns
    /// 按时间顺序排列的静态标签切片。
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Period::Week => &DAY_LABELS,
            Period::Month => &MONTH_LABELS,
        }
    }

    /// 该周期包含的槽位数量。
    pub fn slots(self) -> usize {
        self.labels().len()
    }

    /// 通知文案中使用的小写名称。
    pub fn lowercase_name(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Week" => Ok(Period::Week),
            "Month" => Ok(Period::Month),
            _ => Err(format!("Unknown Period: {}", s)),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Week => write!(f, "Week"),
            Period::Month => write!(f, "Month"),
        }
    }
}

/// # Summary
/// 将价格四舍五入到两位小数。
///
/// # Logic
/// 放大 100 倍后取整再缩小，所有对外输出的价格都必须经过此函数。
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// # Summary
/// 根据月份名称查找其序号。
///
/// # Returns
/// 合法名称返回 `Some(0..=11)`，否则返回 None。
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .and_then(|i| u32::try_from(i).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_round_trip_literals() {
        assert_eq!("Week".parse::<Period>(), Ok(Period::Week));
        assert_eq!("Month".parse::<Period>(), Ok(Period::Month));
        assert!("week".parse::<Period>().is_err());
        assert!("Year".parse::<Period>().is_err());
        assert_eq!(Period::Month.to_string(), "Month");
    }

    #[test]
    fn test_period_slots() {
        assert_eq!(Period::Week.slots(), 7);
        assert_eq!(Period::Month.slots(), 12);
        assert_eq!(Period::Week.labels()[0], "Mon");
        assert_eq!(Period::Month.labels()[11], "Dec");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(146.456), 146.46);
        assert_eq!(round2(146.454), 146.45);
        assert_eq!(round2(-3.333), -3.33);
    }

    #[test]
    fn test_month_index() {
        assert_eq!(month_index("January"), Some(0));
        assert_eq!(month_index("December"), Some(11));
        assert_eq!(month_index("Smarch"), None);
    }
}
