//! Conversation state — which topic owns the session, how far it has
//! progressed, and the answers collected so far.
//!
//! Invariant: `phase == 0` exactly when `topic` is `None` (idle). Starting
//! a flow moves the cursor to 1 and swaps in a fresh, fully-unset data
//! record for that topic; a hard reset returns everything to idle.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::flows::fitness::FitnessData;
use crate::flows::goal::GoalData;
use crate::flows::health::HealthData;
use crate::flows::idea::IdeaData;
use crate::flows::investing::InvestingData;
use crate::flows::knowledge::RiddleData;
use crate::flows::reminder::ReminderData;

/// The eight selectable conversation topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    Health,
    GoalSetting,
    Investing,
    Fitness,
    Idea,
    Reminder,
    Riddle,
    Nlp,
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Health => "health",
            Self::GoalSetting => "goal_setting",
            Self::Investing => "investing",
            Self::Fitness => "fitness",
            Self::Idea => "idea",
            Self::Reminder => "reminder",
            Self::Riddle => "riddle",
            Self::Nlp => "nlp",
        };
        write!(f, "{s}")
    }
}

/// Per-topic answer records. `Idle` when no flow is active.
#[derive(Debug, Clone, Default)]
pub enum TopicData {
    #[default]
    Idle,
    Health(HealthData),
    Goal(GoalData),
    Investing(InvestingData),
    Fitness(FitnessData),
    Idea(IdeaData),
    Reminder(ReminderData),
    Riddle(RiddleData),
    /// The NLP explainer collects nothing; the phase cursor is enough.
    Nlp,
}

impl TopicData {
    /// A fresh, fully-unset record for the given topic.
    pub fn fresh(topic: TopicId) -> Self {
        match topic {
            TopicId::Health => Self::Health(HealthData::default()),
            TopicId::GoalSetting => Self::Goal(GoalData::default()),
            TopicId::Investing => Self::Investing(InvestingData::default()),
            TopicId::Fitness => Self::Fitness(FitnessData::default()),
            TopicId::Idea => Self::Idea(IdeaData::default()),
            TopicId::Reminder => Self::Reminder(ReminderData::default()),
            TopicId::Riddle => Self::Riddle(RiddleData::default()),
            TopicId::Nlp => Self::Nlp,
        }
    }
}

/// The mutable record of one conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    /// Which flow owns the session; `None` means idle.
    pub topic: Option<TopicId>,
    /// Position in the topic's question sequence; 0 is idle.
    pub phase: u8,
    /// Answers collected so far.
    pub data: TopicData,
}

impl ConversationState {
    /// A new idle conversation.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.topic.is_none()
    }

    /// Activate a flow at its entry phase with fully-unset data.
    pub fn start(&mut self, topic: TopicId) {
        self.topic = Some(topic);
        self.phase = 1;
        self.data = TopicData::fresh(topic);
    }

    /// Unconditional return to idle, discarding any in-progress answers.
    pub fn reset(&mut self) {
        self.topic = None;
        self.phase = 0;
        self.data = TopicData::Idle;
    }
}

// ── Session store ───────────────────────────────────────────────────────

/// Conversations keyed by a caller-supplied session id.
///
/// Each session gets its own `Mutex<ConversationState>`, so turns within a
/// session are serialized while different sessions proceed concurrently.
/// Clients that never send an id all share the `"default"` session, which
/// preserves the single-global-conversation behavior.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Arc<Mutex<ConversationState>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session for `id`, creating an idle one if absent.
    pub async fn session(&self, id: &str) -> Arc<Mutex<ConversationState>> {
        {
            let sessions = self.inner.read().await;
            if let Some(session) = sessions.get(id) {
                return Arc::clone(session);
            }
        }
        let mut sessions = self.inner.write().await;
        Arc::clone(
            sessions
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(ConversationState::idle()))),
        )
    }

    /// Number of known sessions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
