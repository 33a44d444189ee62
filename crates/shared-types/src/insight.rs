use serde::Serialize;

/// A canned AI insight shown on dashboards. Static demo content, no
/// inference behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AiInsight {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: InsightPriority,
    pub actionable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    High,
    Medium,
    Low,
}

impl InsightPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightPriority::High => "high",
            InsightPriority::Medium => "medium",
            InsightPriority::Low => "low",
        }
    }
}

/// One turn in the canned assistant conversation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChatMessage {
    pub from_user: bool,
    pub content: &'static str,
}

/// An assistant capability tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Capability {
    pub name: &'static str,
    pub description: &'static str,
}
