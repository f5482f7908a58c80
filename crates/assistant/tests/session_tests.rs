use gosense_assistant::session::ChatSession;
use gosense_core::assistant::entity::Sender;
use gosense_core::assistant::error::AssistantError;
use std::time::Duration;

/// # Summary
/// 集成测试：回复在延迟之后送达，消息按顺序追加。
#[tokio::test(start_paused = true)]
async fn test_reply_arrives_after_delay() {
    let mut session = ChatSession::new(Duration::from_millis(800));
    let started = tokio::time::Instant::now();

    let reply = session.send("Why is the stock rising?").await.unwrap();
    assert_eq!(reply.sender, Sender::Ai);
    assert!(reply.content.starts_with("NVIDIA stock is rising"));
    assert!(started.elapsed() >= Duration::from_millis(800));

    let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Ai, Sender::User, Sender::Ai]);
    assert_eq!(session.messages()[1].content, "Why is the stock rising?");
}

/// # Summary
/// 集成测试：空白输入立即失败，不产生回复。
#[tokio::test(start_paused = true)]
async fn test_blank_input_fails_fast() {
    let mut session = ChatSession::default();
    assert_eq!(session.send("").await.err(), Some(AssistantError::EmptyInput));
    assert_eq!(session.messages().len(), 1);
}
