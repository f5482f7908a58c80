use chrono::{DateTime, Utc};
use gosense_core::common::time::TimeProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// 突发新闻横幅的展示时长
pub const ALERT_VISIBLE_FOR: Duration = Duration::from_secs(10);

/// # Summary
/// 新闻对股价的影响等级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// # Summary
/// 单条市场新闻。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    // 相对时间描述，例如 "2h ago"
    pub time: String,
    pub impact: Impact,
    pub is_new: bool,
}

impl NewsItem {
    fn new(id: &str, title: &str, source: &str, time: &str, impact: Impact) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            source: source.to_string(),
            time: time.to_string(),
            impact,
            is_new: false,
        }
    }
}

/// # Summary
/// 延迟送达的新闻。
#[derive(Debug, Clone)]
pub struct ScheduledNews {
    pub delay: Duration,
    pub item: NewsItem,
}

/// 启动时已存在的三条新闻
pub fn initial_news() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            "1",
            "NVIDIA announces new AI chip with 2x performance",
            "Tech News",
            "2h ago",
            Impact::High,
        ),
        NewsItem::new(
            "2",
            "AI industry growth exceeds expectations",
            "Financial Times",
            "5h ago",
            Impact::Medium,
        ),
        NewsItem::new(
            "3",
            "New data center partnership announced",
            "Data Center Weekly",
            "1d ago",
            Impact::Low,
        ),
    ]
}

/// 模拟的实时新闻：30 秒后一条高影响、90 秒后一条中影响
pub fn default_schedule() -> Vec<ScheduledNews> {
    vec![
        ScheduledNews {
            delay: Duration::from_secs(30),
            item: NewsItem::new(
                "4",
                "Breaking: NVIDIA stock surges 5% on strong earnings report",
                "Market Watch",
                "Just now",
                Impact::High,
            ),
        },
        ScheduledNews {
            delay: Duration::from_secs(90),
            item: NewsItem::new(
                "5",
                "New AI regulations could impact tech sector growth",
                "Wall Street Journal",
                "Just now",
                Impact::Medium,
            ),
        },
    ]
}

/// # Summary
/// 已调度的新闻送达任务集合。
///
/// # Invariants
/// - 每条新闻由独立的定时任务送达，彼此之间没有顺序保证。
/// - 句柄被丢弃时所有尚未送达的任务随之取消。
pub struct Arrivals {
    handles: Vec<JoinHandle<()>>,
}

impl Arrivals {
    /// # Summary
    /// 为每条计划新闻启动一个延迟送达任务。
    ///
    /// # Logic
    /// 1. 每个任务先 sleep 指定时长。
    /// 2. 唤醒后通过 `tx` 投递新闻；接收端已关闭时静默结束。
    ///
    /// # Arguments
    /// * `schedule`: 计划送达的新闻。
    /// * `tx`: 送达通道。
    pub fn spawn(schedule: Vec<ScheduledNews>, tx: mpsc::Sender<NewsItem>) -> Self {
        let handles = schedule
            .into_iter()
            .map(|scheduled| {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(scheduled.delay).await;
                    if tx.send(scheduled.item).await.is_err() {
                        debug!("news receiver dropped before delivery");
                    }
                })
            })
            .collect();
        Self { handles }
    }

    /// 取消所有尚未送达的任务
    pub fn cancel(&self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

impl Drop for Arrivals {
    fn drop(&mut self) {
        self.cancel();
    }
}

// 当前展示中的突发新闻横幅
struct ActiveAlert {
    item: NewsItem,
    raised_at: DateTime<Utc>,
}

/// # Summary
/// 新闻列表状态。
///
/// # Invariants
/// - 新到达的新闻置顶，并替换列表中同 ID 的旧条目。
/// - 只有高影响新闻会触发横幅，横幅在 `ALERT_VISIBLE_FOR` 后自动隐藏。
pub struct NewsFeed {
    items: Vec<NewsItem>,
    alert: Option<ActiveAlert>,
    clock: Arc<dyn TimeProvider>,
}

impl NewsFeed {
    pub fn new(items: Vec<NewsItem>, clock: Arc<dyn TimeProvider>) -> Self {
        Self {
            items,
            alert: None,
            clock,
        }
    }

    /// 以初始三条新闻构造
    pub fn with_initial(clock: Arc<dyn TimeProvider>) -> Self {
        Self::new(initial_news(), clock)
    }

    /// # Summary
    /// 接收一条实时新闻。
    ///
    /// # Logic
    /// 1. 移除同 ID 的旧条目，将新条目标记为未读、时间改为 "Just now" 并置顶。
    /// 2. 高影响新闻刷新横幅。
    ///
    /// # Returns
    /// 触发横幅（调用方应播放提示音）时返回 true。
    pub fn receive(&mut self, mut item: NewsItem) -> bool {
        item.is_new = true;
        item.time = "Just now".to_string();
        self.items.retain(|n| n.id != item.id);
        self.items.insert(0, item.clone());

        if item.impact != Impact::High {
            return false;
        }
        info!(id = %item.id, "breaking news: {}", item.title);
        self.alert = Some(ActiveAlert {
            item,
            raised_at: self.clock.now(),
        });
        true
    }

    /// # Summary
    /// 当前仍在展示期内的横幅新闻。
    pub fn active_alert(&self) -> Option<&NewsItem> {
        let alert = self.alert.as_ref()?;
        let visible = chrono::Duration::from_std(ALERT_VISIBLE_FOR).ok()?;
        if self.clock.now() - alert.raised_at < visible {
            Some(&alert.item)
        } else {
            None
        }
    }

    /// 手动关闭横幅
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_new = false;
        }
    }

    pub fn has_unread(&self) -> bool {
        self.items.iter().any(|n| n.is_new)
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gosense_core::common::time::FakeClockProvider;

    fn clock() -> Arc<FakeClockProvider> {
        Arc::new(FakeClockProvider::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn test_receive_moves_item_to_front() {
        let mut feed = NewsFeed::with_initial(clock());
        assert!(!feed.has_unread());

        let medium = default_schedule()[1].item.clone();
        assert!(!feed.receive(medium));
        assert_eq!(feed.items().len(), 4);
        assert_eq!(feed.items()[0].id, "5");
        assert!(feed.has_unread());
        assert!(feed.active_alert().is_none());

        feed.mark_all_read();
        assert!(!feed.has_unread());
    }

    #[test]
    fn test_receive_replaces_same_id() {
        let mut feed = NewsFeed::with_initial(clock());
        let mut update = initial_news()[2].clone();
        update.title = "Partnership expanded".to_string();
        feed.receive(update);

        assert_eq!(feed.items().len(), 3);
        assert_eq!(feed.items()[0].title, "Partnership expanded");
        assert_eq!(feed.items()[0].time, "Just now");
    }

    #[test]
    fn test_high_impact_alert_expires() {
        let clock = clock();
        let mut feed = NewsFeed::with_initial(clock.clone());
        let breaking = default_schedule()[0].item.clone();

        assert!(feed.receive(breaking));
        assert_eq!(feed.active_alert().map(|n| n.id.as_str()), Some("4"));

        clock.advance(chrono::Duration::seconds(9));
        assert!(feed.active_alert().is_some());
        clock.advance(chrono::Duration::seconds(1));
        assert!(feed.active_alert().is_none());
    }
}
