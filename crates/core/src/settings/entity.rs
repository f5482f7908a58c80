use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// 图表渲染类型，仅作为偏好透传给外层界面。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Area,
    Candlestick,
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Line" => Ok(ChartType::Line),
            "Bar" => Ok(ChartType::Bar),
            "Area" => Ok(ChartType::Area),
            "Candlestick" => Ok(ChartType::Candlestick),
            _ => Err(format!("Unknown ChartType: {}", s)),
        }
    }
}

/// # Summary
/// 展示货币。所有内部价格以 USD 计价，仅在展示时换算。
///
/// # Invariants
/// - 汇率为静态常量，不追求换算精度。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    MYR,
}

impl Currency {
    /// 货币符号
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::MYR => "RM",
        }
    }

    /// 相对 USD 的静态汇率
    pub fn rate(self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EUR => 0.92,
            Currency::GBP => 0.79,
            Currency::JPY => 149.5,
            Currency::MYR => 4.47,
        }
    }

    /// 将 USD 价格换算为本币
    pub fn convert(self, price_usd: f64) -> f64 {
        price_usd * self.rate()
    }

    /// # Summary
    /// 格式化带符号的展示价格。
    ///
    /// # Logic
    /// 1. 按静态汇率换算。
    /// 2. JPY 取整并加千分位分隔符，其余货币保留两位小数。
    pub fn format_price(self, price_usd: f64) -> String {
        format!("{}{}", self.symbol(), self.format_amount(price_usd))
    }

    /// 不带货币符号的数值部分，用于涨跌额展示
    pub fn format_amount(self, price_usd: f64) -> String {
        let converted = self.convert(price_usd);
        match self {
            Currency::JPY => group_thousands(converted.round()),
            _ => format!("{:.2}", converted),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "MYR" => Ok(Currency::MYR),
            _ => Err(format!("Unknown Currency: {}", s)),
        }
    }
}

// 整数值的千分位格式化，例如 -23688 -> "-23,688"
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// # Summary
/// 通知相关开关。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationToggles {
    pub push: bool,
    pub email: bool,
    pub sound: bool,
    pub auto_refresh: bool,
    pub risk_alerts: bool,
    pub price_alerts: bool,
    pub news_alerts: bool,
}

/// # Summary
/// 可单独切换的通知开关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleKind {
    Push,
    Email,
    Sound,
    AutoRefresh,
    RiskAlerts,
    PriceAlerts,
    NewsAlerts,
}

impl NotificationToggles {
    /// 设置指定开关
    pub fn set(&mut self, kind: ToggleKind, enabled: bool) {
        let slot = match kind {
            ToggleKind::Push => &mut self.push,
            ToggleKind::Email => &mut self.email,
            ToggleKind::Sound => &mut self.sound,
            ToggleKind::AutoRefresh => &mut self.auto_refresh,
            ToggleKind::RiskAlerts => &mut self.risk_alerts,
            ToggleKind::PriceAlerts => &mut self.price_alerts,
            ToggleKind::NewsAlerts => &mut self.news_alerts,
        };
        *slot = enabled;
    }

    pub fn get(&self, kind: ToggleKind) -> bool {
        match kind {
            ToggleKind::Push => self.push,
            ToggleKind::Email => self.email,
            ToggleKind::Sound => self.sound,
            ToggleKind::AutoRefresh => self.auto_refresh,
            ToggleKind::RiskAlerts => self.risk_alerts,
            ToggleKind::PriceAlerts => self.price_alerts,
            ToggleKind::NewsAlerts => self.news_alerts,
        }
    }
}

impl Default for NotificationToggles {
    fn default() -> Self {
        Self {
            push: true,
            email: false,
            sound: true,
            auto_refresh: true,
            risk_alerts: true,
            price_alerts: false,
            news_alerts: true,
        }
    }
}

/// # Summary
/// 用户偏好聚合。
///
/// # Invariants
/// - `language` 只是一个不透明标签，本系统不做任何翻译。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: String,
    pub chart_type: ChartType,
    pub currency: Currency,
    pub toggles: NotificationToggles,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "English".to_string(),
            chart_type: ChartType::Line,
            currency: Currency::USD,
            toggles: NotificationToggles::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(Currency::USD.format_price(158.45), "$158.45");
        assert_eq!(Currency::EUR.format_price(100.0), "€92.00");
        assert_eq!(Currency::MYR.format_price(10.0), "RM44.70");
    }

    #[test]
    fn test_format_price_jpy_groups_thousands() {
        // 158.45 * 149.5 = 23688.275
        assert_eq!(Currency::JPY.format_price(158.45), "¥23,688");
        assert_eq!(Currency::JPY.format_price(1.0), "¥150");
        assert_eq!(Currency::JPY.format_amount(-10.0), "-1,495");
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.dark_mode);
        assert_eq!(prefs.language, "English");
        assert_eq!(prefs.chart_type, ChartType::Line);
        assert_eq!(prefs.currency, Currency::USD);
        assert!(prefs.toggles.sound);
        assert!(!prefs.toggles.price_alerts);
    }

    #[test]
    fn test_every_toggle_can_be_flipped() {
        let kinds = [
            ToggleKind::Push,
            ToggleKind::Email,
            ToggleKind::Sound,
            ToggleKind::AutoRefresh,
            ToggleKind::RiskAlerts,
            ToggleKind::PriceAlerts,
            ToggleKind::NewsAlerts,
        ];
        let mut toggles = NotificationToggles::default();
        for kind in kinds {
            let before = toggles.get(kind);
            toggles.set(kind, !before);
            assert_eq!(toggles.get(kind), !before);
        }
        assert!(!toggles.push);
        assert!(toggles.email);
        assert!(!toggles.news_alerts);
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!("Candlestick".parse::<ChartType>(), Ok(ChartType::Candlestick));
        assert_eq!("JPY".parse::<Currency>(), Ok(Currency::JPY));
        assert!("BTC".parse::<Currency>().is_err());
    }
}
