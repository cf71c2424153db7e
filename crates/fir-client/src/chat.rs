//! Chat resource: scoped conversations over the document corpus, plus the
//! chat analytics summary.

use fir_core::entities::{Conversation, MessageExchange};
use fir_core::requests::{NewConversation, NewMessage};
use serde_json::Value;

use crate::{ApiClient, Query, error::ApiError, segment};

fn conversation_path(id: &str, suffix: &str) -> String {
    format!("/chat/conversations/{}{suffix}", segment(id))
}

pub(crate) fn conversations_path(user_id: Option<&str>) -> String {
    Query::new()
        .opt("userId", user_id)
        .apply("/chat/conversations")
}

impl ApiClient {
    /// Start a conversation. A `None` scope searches the whole corpus.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the request.
    pub async fn create_conversation(
        &self,
        request: &NewConversation,
    ) -> Result<Conversation, ApiError> {
        self.post("/chat/conversations", request).await
    }

    /// Fetch a conversation with its message history.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 for unknown conversations.
    pub async fn get_conversation(&self, id: &str) -> Result<Conversation, ApiError> {
        self.get(&conversation_path(id, "")).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_conversations(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<Conversation>, ApiError> {
        self.get(&conversations_path(user_id)).await
    }

    /// Post a user message and receive the assistant's reply.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<MessageExchange, ApiError> {
        self.post(&conversation_path(conversation_id, "/messages"), message)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn chat_analytics(&self) -> Result<Value, ApiError> {
        self.get("/chat/analytics").await
    }

    /// Ask the server to recompute chat analytics.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn refresh_chat_analytics(&self) -> Result<Value, ApiError> {
        self.post("/chat/analytics/refresh", &serde_json::json!({}))
            .await
    }
}
