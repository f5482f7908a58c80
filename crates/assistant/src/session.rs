use crate::classifier::{GREETING, classify, response_for};
use gosense_core::assistant::entity::{ChatMessage, ResponseKey};
use gosense_core::assistant::error::AssistantError;
use std::time::Duration;
use tracing::debug;

/// 默认回复延迟
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(800);

/// # Summary
/// 单个聊天会话。
///
/// # Invariants
/// - 第一条消息永远是助手开场白。
/// - 用户消息与助手回复按发生顺序追加，不会被删除。
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    reply_delay: Duration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ChatSession {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: vec![ChatMessage::ai(GREETING)],
            reply_delay,
        }
    }

    /// # Summary
    /// 记录一条用户消息并返回应答类别，不等待回复。
    ///
    /// # Returns
    /// 空白输入返回 `AssistantError::EmptyInput`，且不记录任何消息。
    pub fn submit(&mut self, input: &str) -> Result<ResponseKey, AssistantError> {
        if input.trim().is_empty() {
            return Err(AssistantError::EmptyInput);
        }
        self.messages.push(ChatMessage::user(input));
        let key = classify(input);
        debug!(?key, "chat input classified");
        Ok(key)
    }

    /// 追加指定类别的助手回复，并返回该回复
    pub fn deliver(&mut self, key: ResponseKey) -> ChatMessage {
        let reply = ChatMessage::ai(response_for(key));
        self.messages.push(reply.clone());
        reply
    }

    /// # Summary
    /// 发送消息并在回复延迟后得到助手回复。
    ///
    /// # Logic
    /// 1. 记录用户消息并分类。
    /// 2. 等待 `reply_delay` 模拟思考时间。
    /// 3. 追加并返回助手回复。
    pub async fn send(&mut self, input: &str) -> Result<ChatMessage, AssistantError> {
        let key = self.submit(input)?;
        tokio::time::sleep(self.reply_delay).await;
        Ok(self.deliver(key))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gosense_core::assistant::entity::Sender;

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Ai);
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[test]
    fn test_deliver_returns_appended_reply() {
        let mut session = ChatSession::default();
        let key = session.submit("any risk?").unwrap();
        let reply = session.deliver(key);

        assert_eq!(reply.sender, Sender::Ai);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages().last(), Some(&reply));
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut session = ChatSession::default();
        assert_eq!(session.submit("   "), Err(AssistantError::EmptyInput));
        assert_eq!(session.messages().len(), 1);
    }
}
