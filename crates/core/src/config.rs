use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub alerts: AlertConfig,
    pub assistant: AssistantConfig,
    pub news: NewsConfig,
    pub log: LogConfig,
}

/// 启动时的会话选择（相当于用户在仪表盘上的初始选择）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub username: String,
    pub period: String,
    pub month: String,
    pub year: i32,
    // 固定种子，设置后生成的序列可复现
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    // 预警文案中的证券名称
    pub symbol: String,
    pub sound: bool,
    pub risk_alerts: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    // 启动时向助手提出的问题
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    // 日志文件目录，None 表示只输出到 stdout
    pub dir: Option<String>,
    pub filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            username: "User".to_string(),
            period: "Week".to_string(),
            month: "January".to_string(),
            year: 2024,
            seed: None,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            symbol: "NVIDIA".to_string(),
            sound: true,
            risk_alerts: true,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 800,
            prompt: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.session.period, "Week");
        assert_eq!(config.session.month, "January");
        assert_eq!(config.session.year, 2024);
        assert_eq!(config.alerts.symbol, "NVIDIA");
        assert_eq!(config.assistant.reply_delay_ms, 800);
        assert_eq!(config.log.filter, "info");
        assert!(config.log.dir.is_none());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "session": { "period": "Month", "year": 2025 } }"#).unwrap();
        assert_eq!(config.session.period, "Month");
        assert_eq!(config.session.year, 2025);
        assert_eq!(config.session.month, "January");
        assert!(config.alerts.sound);
    }
}
