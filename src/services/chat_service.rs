use crate::catalog;
use crate::models::message::{ConversationMessage, MessageKind, Sender};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// The one sentence a simulated voice capture ever produces.
pub const VOICE_CAPTURE_SENTENCE: &str = "Tell me about engineering colleges in Tamil Nadu";

const ENGINEERING_REPLY: &str = "Based on your location and interests, here are top government engineering colleges:\n\n🏗️ **IIT Delhi** - Fee: ₹2L/year\n🏗️ **NIT Trichy** - Fee: ₹1.5L/year\n🏗️ **IIIT Hyderabad** - Fee: ₹3L/year\n\nWould you like detailed admission criteria or scholarship information?";

const MEDICAL_REPLY: &str = "Government medical colleges with affordable fees:\n\n⚕️ **AIIMS Delhi** - Fee: ₹25K/year\n⚕️ **JIPMER Puducherry** - Fee: ₹30K/year\n⚕️ **KGMC Lucknow** - Fee: ₹35K/year\n\nNEET cutoff for these colleges is typically 650+ marks. Need help with NEET preparation strategy?";

const SCHOLARSHIP_REPLY: &str = "Available scholarships for government college students:\n\n💰 **Merit Scholarships**: ₹50K-₹2L based on marks\n💰 **Need-based Aid**: ₹25K-₹1L for family income <₹5L\n💰 **Minority Scholarships**: Special schemes available\n\n📅 **Important Deadlines:**\n- Central schemes: March 31st\n- State schemes: Varies by state\n\nShall I help you apply for specific scholarships?";

const GENERIC_REPLY: &str = "I understand you need guidance! I can help with:\n\n📚 Career path selection\n🎯 College recommendations\n💰 Scholarship information\n📝 Admission procedures\n🗣️ Interview preparation\n\nWhat specific topic would you like to explore?";

/// One entry of the reply table. `keyword: None` marks the catch-all.
pub struct ReplyRule {
    pub keyword: Option<&'static str>,
    pub response: &'static str,
}

impl ReplyRule {
    fn matches(&self, lowered_utterance: &str) -> bool {
        match self.keyword {
            Some(keyword) => lowered_utterance.contains(keyword),
            None => true,
        }
    }
}

/// Ordered rule table, evaluated first-match-wins.
pub const REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        keyword: Some("engineering"),
        response: ENGINEERING_REPLY,
    },
    ReplyRule {
        keyword: Some("medical"),
        response: MEDICAL_REPLY,
    },
    ReplyRule {
        keyword: Some("scholarship"),
        response: SCHOLARSHIP_REPLY,
    },
    ReplyRule {
        keyword: None,
        response: GENERIC_REPLY,
    },
];

/// Picks the scripted reply for an utterance. Total: the catch-all rule
/// means every input lands on exactly one template.
pub fn scripted_reply(utterance: &str) -> &'static str {
    let lowered = utterance.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.response)
        .unwrap_or(GENERIC_REPLY)
}

#[derive(Debug)]
struct ChatState {
    transcript: Vec<ConversationMessage>,
    input_buffer: String,
    language: String,
    is_listening: bool,
    last_id: i64,
}

impl ChatState {
    /// Ids derive from the creation time but are bumped past the previous
    /// id so two messages in the same millisecond stay distinct.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

#[derive(Clone)]
pub struct ChatService {
    state: Arc<Mutex<ChatState>>,
    reply_delay: Duration,
    voice_capture_delay: Duration,
}

impl ChatService {
    pub fn new(reply_delay: Duration, voice_capture_delay: Duration, language: String) -> Self {
        let mut state = ChatState {
            transcript: Vec::new(),
            input_buffer: String::new(),
            language,
            is_listening: false,
            last_id: 0,
        };
        let id = state.next_id();
        state.transcript.push(ConversationMessage {
            id,
            content: catalog::greeting(),
            sender: Sender::Assistant,
            created_at: Utc::now(),
            language: Some("hi".to_string()),
            kind: None,
        });

        Self {
            state: Arc::new(Mutex::new(state)),
            reply_delay,
            voice_capture_delay,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().expect("chat state lock poisoned")
    }

    /// Appends the user's message, clears the input buffer, and schedules
    /// exactly one assistant reply after the configured delay.
    ///
    /// Whitespace-only input is silently ignored: the transcript is left
    /// unchanged and nothing is scheduled. Each accepted submission gets
    /// its own delayed reply; pending replies are never cancelled or
    /// coalesced, so overlapping submissions all resolve.
    pub fn submit(&self, text: &str) -> Option<JoinHandle<ConversationMessage>> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }

        let response = scripted_reply(content);
        {
            let mut state = self.lock();
            let id = state.next_id();
            state.transcript.push(ConversationMessage {
                id,
                content: content.to_string(),
                sender: Sender::User,
                created_at: Utc::now(),
                language: None,
                kind: None,
            });
            state.input_buffer.clear();
        }
        debug!(delay_ms = self.reply_delay.as_millis() as u64, "scheduling scripted reply");

        let service = self.clone();
        let delay = self.reply_delay;
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = service.lock();
            let id = state.next_id();
            let message = ConversationMessage {
                id,
                content: response.to_string(),
                sender: Sender::Assistant,
                created_at: Utc::now(),
                language: None,
                kind: Some(MessageKind::Text),
            };
            state.transcript.push(message.clone());
            message
        }))
    }

    /// Flips the listening flag. Turning it on schedules a simulated
    /// capture that fills the input buffer with [`VOICE_CAPTURE_SENTENCE`]
    /// and flips the flag back off. Turning it off early does not cancel
    /// a capture that is already scheduled.
    pub fn toggle_voice_capture(&self) -> Option<JoinHandle<()>> {
        let was_listening = {
            let mut state = self.lock();
            let was = state.is_listening;
            state.is_listening = !was;
            was
        };
        if was_listening {
            return None;
        }

        let service = self.clone();
        let delay = self.voice_capture_delay;
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = service.lock();
            state.input_buffer = VOICE_CAPTURE_SENTENCE.to_string();
            state.is_listening = false;
        }))
    }

    pub fn transcript(&self) -> Vec<ConversationMessage> {
        self.lock().transcript.clone()
    }

    pub fn transcript_len(&self) -> usize {
        self.lock().transcript.len()
    }

    pub fn input_buffer(&self) -> String {
        self.lock().input_buffer.clone()
    }

    pub fn set_input(&self, text: &str) {
        self.lock().input_buffer = text.to_string();
    }

    pub fn language(&self) -> String {
        self.lock().language.clone()
    }

    pub fn set_language(&self, code: &str) {
        self.lock().language = code.to_string();
    }

    pub fn is_listening(&self) -> bool {
        self.lock().is_listening
    }
}
