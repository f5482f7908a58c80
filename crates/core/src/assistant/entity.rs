use serde::{Deserialize, Serialize};

/// # Summary
/// 聊天消息的发送方。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Ai,
    User,
}

/// # Summary
/// 聊天会话中的单条消息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
}

impl ChatMessage {
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
        }
    }
}

/// # Summary
/// 关键词分类结果，对应静态回复表中的一条。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseKey {
    // 询问上涨原因
    Rising,
    // 询问风险
    Risk,
    // 兜底的能力介绍
    General,
}
