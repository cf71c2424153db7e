use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::MessageRole;

/// Restricts a chat session's context to a set of folders or documents.
///
/// An absent scope (`None` where a scope is optional) means global context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatScope {
    #[serde(default)]
    pub folder_ids: Vec<String>,
    #[serde(default)]
    pub document_ids: Vec<String>,
}

impl ChatScope {
    /// Build a scope from folder and document filters. Empty filters mean global.
    #[must_use]
    pub fn from_filters(folder_ids: Vec<String>, document_ids: Vec<String>) -> Option<Self> {
        if folder_ids.is_empty() && document_ids.is_empty() {
            None
        } else {
            Some(Self {
                folder_ids,
                document_ids,
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub scope: Option<ChatScope>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Reply to `POST /chat/conversations/{id}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageExchange {
    pub ai_message: ChatMessage,
    #[serde(default)]
    pub user_message: Option<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_mean_global_scope() {
        assert!(ChatScope::from_filters(Vec::new(), Vec::new()).is_none());
        let scope = ChatScope::from_filters(vec!["f1".into()], Vec::new()).unwrap();
        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(json["folderIds"][0], "f1");
        assert!(json["documentIds"].as_array().unwrap().is_empty());
    }

    #[test]
    fn exchange_reads_ai_message() {
        let json = r#"{
            "aiMessage": {
                "id": "m2",
                "role": "assistant",
                "content": "Three FIRs mention Section 379.",
                "created_at": "2025-10-22T10:00:00Z"
            }
        }"#;
        let exchange: MessageExchange = serde_json::from_str(json).unwrap();
        assert_eq!(exchange.ai_message.role, MessageRole::Assistant);
        assert!(exchange.user_message.is_none());
    }
}
