use crate::dashboard::{DashboardService, DashboardView};
use crate::error::ManagerError;
use crate::prediction::{PredictionService, PredictionView};
use crate::state::{Action, AppState, Effect, PredictionRequest};
use gosense_assistant::session::ChatSession;
use gosense_core::assistant::entity::ChatMessage;
use gosense_core::notify::entity::{Notification, ToneSpec};
use gosense_core::notify::port::SoundCue;
use gosense_notify::news::{NewsFeed, NewsItem};
use std::sync::Arc;
use tracing::{debug, warn};

/// # Summary
/// 单用户会话门面：持有集中式状态，并在每次分发后执行对应副作用。
///
/// # Invariants
/// - 状态只通过 `AppState::dispatch` 修改，服务层只负责副作用。
/// - `dashboard` / `prediction` 视图始终对应最近一次执行的副作用结果。
pub struct Session {
    state: AppState,
    dashboard: DashboardService,
    prediction: PredictionService,
    chat: ChatSession,
    news: NewsFeed,
    cue: Arc<dyn SoundCue>,
    dashboard_view: Option<DashboardView>,
    prediction_view: Option<PredictionView>,
}

impl Session {
    pub fn new(
        state: AppState,
        dashboard: DashboardService,
        chat: ChatSession,
        news: NewsFeed,
        cue: Arc<dyn SoundCue>,
    ) -> Self {
        Self {
            state,
            dashboard,
            prediction: PredictionService::new(),
            chat,
            news,
            cue,
            dashboard_view: None,
            prediction_view: None,
        }
    }

    /// # Summary
    /// 分发一个动作并执行其副作用。
    ///
    /// # Logic
    /// 1. 交给 `AppState::dispatch` 修改状态。
    /// 2. 根据返回的 `Effect` 刷新仪表盘、计算预测或修改通知已读状态。
    ///
    /// # Returns
    /// 标记不存在的通知时返回 `ManagerError::Notify`。
    pub fn dispatch(&mut self, action: Action) -> Result<(), ManagerError> {
        debug!(?action, "dispatch");
        match self.state.dispatch(action) {
            Effect::None => {}
            Effect::RefreshDashboard => {
                let view = self
                    .dashboard
                    .refresh(&self.state.selection, &self.state.preferences);
                self.dashboard_view = Some(view);
            }
            Effect::ComputePrediction => {
                if let Some(request) = &self.state.prediction {
                    let view = self.prediction.predict(request, self.dashboard.rng_mut());
                    self.prediction_view = Some(view);
                }
            }
            Effect::MarkRead(id) => {
                self.dashboard.mark_read(&id)?;
                self.sync_unread();
            }
            Effect::MarkAllRead => {
                self.dashboard.mark_all_read();
                self.sync_unread();
            }
            Effect::DismissNewsAlert => self.news.dismiss_alert(),
            Effect::MarkNewsRead => self.news.mark_all_read(),
        }
        Ok(())
    }

    /// # Summary
    /// 以当前仪表盘序列打开预测页。
    ///
    /// # Returns
    /// 尚未刷新过仪表盘时不做任何事并返回 Ok。
    pub fn open_prediction(&mut self) -> Result<(), ManagerError> {
        let Some(view) = &self.dashboard_view else {
            return Ok(());
        };
        let request = PredictionRequest {
            historical: view.series.clone(),
            selection: view.selection.clone(),
        };
        self.dispatch(Action::OpenPrediction(request))
    }

    /// # Summary
    /// 向助手提问并等待回复。
    pub async fn ask(&mut self, input: &str) -> Result<ChatMessage, ManagerError> {
        Ok(self.chat.send(input).await?)
    }

    /// # Summary
    /// 接收一条实时新闻；高影响新闻在开启新闻提醒与声音时播放提示音。
    pub fn receive_news(&mut self, item: NewsItem) {
        let toggles = &self.state.preferences.toggles;
        if self.news.receive(item) && toggles.news_alerts && toggles.sound {
            if let Err(e) = self.cue.play(&ToneSpec::ALERT) {
                warn!("news tone failed: {}", e);
            }
        }
    }

    fn sync_unread(&mut self) {
        let unread = self.dashboard.unread_count();
        if let Some(view) = self.dashboard_view.as_mut() {
            view.unread_count = unread;
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dashboard_view(&self) -> Option<&DashboardView> {
        self.dashboard_view.as_ref()
    }

    pub fn prediction_view(&self) -> Option<&PredictionView> {
        self.prediction_view.as_ref()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.dashboard.notifications()
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        self.chat.messages()
    }

    pub fn news(&self) -> &NewsFeed {
        &self.news
    }
}
