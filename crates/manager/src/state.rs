use gosense_core::common::SELECTABLE_YEARS;
use gosense_core::market::entity::HistoricalPoint;
use gosense_core::settings::entity::{ChartType, Currency, Preferences, ToggleKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 未注册用户名时展示的名称
pub const DEFAULT_USERNAME: &str = "User";
/// 资料页默认邮箱
pub const DEFAULT_EMAIL: &str = "john.doe@company.com";

/// # Summary
/// 当前所在的页面。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Dashboard,
    Prediction,
    Settings,
}

/// # Summary
/// 仪表盘上的周期 / 月份 / 年份选择。
///
/// # Invariants
/// - `period` 与 `month` 保留界面原始字面量，非法值在生成阶段降级为空序列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub period: String,
    pub month: String,
    pub year: i32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            period: "Week".to_string(),
            month: "January".to_string(),
            year: 2024,
        }
    }
}

/// # Summary
/// 从仪表盘跳转到预测页时携带的数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub historical: Vec<HistoricalPoint>,
    pub selection: Selection,
}

/// # Summary
/// 所有可分发的界面动作。
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // 登录；注册时携带用户名
    Login { username: Option<String> },
    Navigate(Screen),
    OpenPrediction(PredictionRequest),
    SelectPeriod(String),
    SelectMonth(String),
    SelectYear(i32),
    SetChartType(ChartType),
    SetCurrency(Currency),
    SetLanguage(String),
    ToggleDarkMode,
    SetToggle(ToggleKind, bool),
    // 资料编辑；空白字段保持原值
    UpdateProfile { username: String, email: String },
    ToggleNotificationPanel,
    MarkRead(String),
    MarkAllRead,
    DismissNewsAlert,
    MarkNewsRead,
    Logout,
}

/// # Summary
/// 状态变更后需要由服务层执行的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    // 重新生成仪表盘序列并评估预警
    RefreshDashboard,
    // 基于已保存的请求计算预测
    ComputePrediction,
    MarkRead(String),
    MarkAllRead,
    // 关闭突发新闻横幅
    DismissNewsAlert,
    // 清除新闻未读标记
    MarkNewsRead,
}

/// # Summary
/// 集中式应用状态。
///
/// # Invariants
/// - 只能通过 `dispatch` 修改。
/// - 处于 `Prediction` 页面时 `prediction` 一定存在。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub screen: Screen,
    pub username: String,
    pub email: String,
    pub preferences: Preferences,
    pub selection: Selection,
    pub prediction: Option<PredictionRequest>,
    pub show_notifications: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Login,
            username: DEFAULT_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            preferences: Preferences::default(),
            selection: Selection::default(),
            prediction: None,
            show_notifications: false,
        }
    }
}

impl AppState {
    /// # Summary
    /// 应用一个动作并返回需要执行的副作用。
    ///
    /// # Logic
    /// 1. 修改对应字段。
    /// 2. 凡是影响仪表盘数据的动作（选择变化、进入仪表盘）都返回 `RefreshDashboard`。
    /// 3. 没有预测数据时导航到预测页不生效，不在 `SELECTABLE_YEARS` 中的年份被忽略。
    pub fn dispatch(&mut self, action: Action) -> Effect {
        match action {
            Action::Login { username } => {
                if let Some(name) = username.filter(|n| !n.trim().is_empty()) {
                    self.username = name;
                }
                self.screen = Screen::Dashboard;
                Effect::RefreshDashboard
            }
            Action::Navigate(Screen::Prediction) => {
                if self.prediction.is_none() {
                    return Effect::None;
                }
                self.screen = Screen::Prediction;
                Effect::ComputePrediction
            }
            Action::Navigate(screen) => {
                self.screen = screen;
                if screen == Screen::Dashboard {
                    Effect::RefreshDashboard
                } else {
                    Effect::None
                }
            }
            Action::OpenPrediction(request) => {
                self.prediction = Some(request);
                self.screen = Screen::Prediction;
                Effect::ComputePrediction
            }
            Action::SelectPeriod(period) => {
                self.selection.period = period;
                Effect::RefreshDashboard
            }
            Action::SelectMonth(month) => {
                self.selection.month = month;
                Effect::RefreshDashboard
            }
            Action::SelectYear(year) => {
                if !SELECTABLE_YEARS.contains(&year) {
                    warn!(year, "year not selectable, ignored");
                    return Effect::None;
                }
                self.selection.year = year;
                Effect::RefreshDashboard
            }
            Action::SetChartType(chart_type) => {
                self.preferences.chart_type = chart_type;
                Effect::None
            }
            Action::SetCurrency(currency) => {
                self.preferences.currency = currency;
                Effect::None
            }
            Action::SetLanguage(language) => {
                self.preferences.language = language;
                Effect::None
            }
            Action::ToggleDarkMode => {
                self.preferences.dark_mode = !self.preferences.dark_mode;
                Effect::None
            }
            Action::SetToggle(kind, enabled) => {
                self.preferences.toggles.set(kind, enabled);
                Effect::None
            }
            Action::UpdateProfile { username, email } => {
                if !username.trim().is_empty() {
                    self.username = username;
                }
                if !email.trim().is_empty() {
                    self.email = email;
                }
                Effect::None
            }
            Action::ToggleNotificationPanel => {
                self.show_notifications = !self.show_notifications;
                Effect::None
            }
            Action::MarkRead(id) => Effect::MarkRead(id),
            Action::MarkAllRead => Effect::MarkAllRead,
            Action::DismissNewsAlert => Effect::DismissNewsAlert,
            Action::MarkNewsRead => Effect::MarkNewsRead,
            Action::Logout => {
                self.screen = Screen::Login;
                self.show_notifications = false;
                Effect::None
            }
        }
    }
}
