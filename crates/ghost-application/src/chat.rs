//! Mock chat engine.
//!
//! A transcript seeded with the assistant's greeting. Sending a message
//! appends it, waits out the simulated typing delay, then appends one of a
//! small pool of canned replies. No model, no streaming, no memory of
//! earlier turns.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use ghost_core::config::ChatConfig;

/// Opening message of every transcript.
pub const GREETING: &str =
    "Olá, Operador. Sou o GHOST, seu assistente neural. Como posso ajudar hoje?";

/// Replies the assistant rotates through, picked at random.
pub const CANNED_REPLIES: &[&str] = &[
    "Processando sua solicitação...",
    "Entendi. Deixe-me analisar os dados disponíveis.",
    "Interessante. Posso ajudar com isso.",
    "Acessando banco de dados neural para sua consulta.",
    "Analisando padrões... Encontrei algumas informações relevantes.",
];

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Ghost,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: ChatSender,
    pub timestamp: DateTime<Utc>,
}

/// The mock conversation.
pub struct ChatService {
    messages: Vec<ChatMessage>,
    response_delay: Duration,
    next_id: u64,
}

impl ChatService {
    pub fn new(config: &ChatConfig) -> Self {
        let mut service = Self {
            messages: Vec::new(),
            response_delay: config.response_delay(),
            next_id: 1,
        };
        service.push(GREETING.to_string(), ChatSender::Ghost);
        service
    }

    /// The transcript so far, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user's message and, after the simulated typing delay,
    /// the assistant's canned reply. Returns the reply, or `None` when the
    /// input was blank (blank input is ignored entirely).
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.push(text.to_string(), ChatSender::User);
        tokio::time::sleep(self.response_delay).await;

        let reply = CANNED_REPLIES[rand::thread_rng().gen_range(0..CANNED_REPLIES.len())];
        self.push(reply.to_string(), ChatSender::Ghost);

        self.messages.last()
    }

    fn push(&mut self, text: String, sender: ChatSender) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_chat() -> ChatService {
        ChatService::new(&ChatConfig {
            response_delay_ms: 0,
        })
    }

    #[test]
    fn test_transcript_starts_with_greeting() {
        let chat = instant_chat();
        let messages = chat.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, GREETING);
        assert_eq!(messages[0].sender, ChatSender::Ghost);
    }

    #[tokio::test]
    async fn test_send_appends_user_message_and_canned_reply() {
        let mut chat = instant_chat();

        let reply = chat.send("status report").await.unwrap();
        assert_eq!(reply.sender, ChatSender::Ghost);
        assert!(CANNED_REPLIES.contains(&reply.text.as_str()));

        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text, "status report");
        assert_eq!(messages[1].sender, ChatSender::User);
        assert_eq!(messages[2].sender, ChatSender::Ghost);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut chat = instant_chat();

        assert!(chat.send("   ").await.is_none());
        assert!(chat.send("").await.is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_message_ids_are_monotonic() {
        let mut chat = instant_chat();
        chat.send("one").await.unwrap();
        chat.send("two").await.unwrap();

        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
