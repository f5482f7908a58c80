use gosense_core::common::time::TimeProvider;
use gosense_core::notify::entity::{NOTIFICATION_CAPACITY, Notification, VolatilityAlert};
use gosense_core::notify::error::NotifyError;
use std::sync::Arc;
use tracing::{debug, info};

/// # Summary
/// 站内通知中心，维护一个新到旧排序、容量受限的通知列表。
///
/// # Invariants
/// - 列表长度不超过 `NOTIFICATION_CAPACITY`，超出时丢弃最旧的通知。
/// - 与最新一条正文相同的通知会被抑制，避免重复计算时反复触发。
/// - 通知一经创建只允许修改已读状态。
pub struct NotificationCenter {
    // 新到旧排列
    items: Vec<Notification>,
    // 展示时间来源
    clock: Arc<dyn TimeProvider>,
}

impl NotificationCenter {
    pub fn new(clock: Arc<dyn TimeProvider>) -> Self {
        Self {
            items: Vec::with_capacity(NOTIFICATION_CAPACITY),
            clock,
        }
    }

    /// # Summary
    /// 将预警结果写入通知中心。
    ///
    /// # Returns
    /// 实际写入时返回新通知，被去重抑制时返回 None。
    pub fn push_alert(&mut self, alert: &VolatilityAlert) -> Option<Notification> {
        self.push_message(&alert.message)
    }

    /// # Summary
    /// 写入一条任意正文的通知。
    ///
    /// # Logic
    /// 1. 若与最新一条通知正文相同则直接返回 None。
    /// 2. 生成 UUID 与 `HH:MM` 时间戳，插入到列表头部。
    /// 3. 截断到容量上限。
    pub fn push_message(&mut self, message: &str) -> Option<Notification> {
        if self.items.first().is_some_and(|n| n.message == message) {
            debug!(message, "duplicate notification suppressed");
            return None;
        }

        let notification = Notification {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.to_string(),
            time: self.clock.now().format("%H:%M").to_string(),
            read: false,
        };
        self.items.insert(0, notification.clone());
        self.items.truncate(NOTIFICATION_CAPACITY);

        info!(id = %notification.id, "notification raised: {}", notification.message);
        Some(notification)
    }

    /// # Summary
    /// 将指定通知标记为已读。
    ///
    /// # Returns
    /// ID 不存在时返回 `NotifyError::NotFound`。
    pub fn mark_read(&mut self, id: &str) -> Result<(), NotifyError> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotifyError::NotFound(id.to_string()))?;
        item.read = true;
        Ok(())
    }

    /// 全部标记为已读
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    /// 未读数量，用于铃铛角标
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// 新到旧排列的通知快照
    pub fn list(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
