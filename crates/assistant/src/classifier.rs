use gosense_core::assistant::entity::ResponseKey;

/// 会话开场白
pub const GREETING: &str = "Hello! I'm your AI-powered stock analysis assistant for NVIDIA. I can help you understand:

• Reasons for price movements (news & sentiment)
• Risk alerts and warnings
• Optimization strategies
• Market trends and forecasts

What would you like to know?";

const RISING_REPLY: &str = "NVIDIA stock is rising due to:

• Strong AI chip demand from major tech companies
• Data center revenue growth exceeding 40% YoY
• Positive market sentiment around AI infrastructure
• Technical indicators showing bullish momentum";

const RISK_REPLY: &str = "Key risks to consider:

• Market volatility in tech sector
• Competition from AMD and Intel
• Regulatory concerns around AI development
• High valuation metrics (P/E ratio)";

const GENERAL_REPLY: &str = "I can provide detailed analysis on:

• Price predictions and trends
• Market sentiment analysis
• Risk factors and opportunities
• Technical and fundamental analysis

What specific aspect would you like to explore?";

/// # Summary
/// 根据用户输入的关键词选择回复类别。
///
/// # Logic
/// 1. 输入转为小写。
/// 2. 包含 "rising" 或 "why" 归为 `Rising`。
/// 3. 否则包含 "risk" 归为 `Risk`。
/// 4. 其余归为 `General`。
pub fn classify(input: &str) -> ResponseKey {
    let lower = input.to_lowercase();
    if lower.contains("rising") || lower.contains("why") {
        ResponseKey::Rising
    } else if lower.contains("risk") {
        ResponseKey::Risk
    } else {
        ResponseKey::General
    }
}

/// 回复类别对应的静态文案
pub fn response_for(key: ResponseKey) -> &'static str {
    match key {
        ResponseKey::Rising => RISING_REPLY,
        ResponseKey::Risk => RISK_REPLY,
        ResponseKey::General => GENERAL_REPLY,
    }
}
