//! Topic flows — one module per topic, each a fixed phase sequence.
//!
//! Every flow exposes `handle(&mut ConversationState, &str)` and follows
//! the same template: phase 1 emits the first question, collection phases
//! classify the input (re-prompting on a miss without advancing), and the
//! terminal phase synthesizes advice, renders a summary, and closes the
//! flow with a line from the reset controller.

pub mod fitness;
pub mod goal;
pub mod health;
pub mod idea;
pub mod investing;
pub mod knowledge;
pub mod reminder;

use crate::error::FlowError;
use crate::state::{ConversationState, TopicId};

/// What a phase handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowReply {
    /// Next question or a re-prompt; the flow stays active.
    Prompt(String),
    /// Terminal response (summary + advice + closing); the router resets
    /// the state after returning it.
    Finished(String),
}

/// Dispatch to the flow that owns the topic.
pub fn dispatch(
    topic: TopicId,
    state: &mut ConversationState,
    input: &str,
) -> Result<FlowReply, FlowError> {
    match topic {
        TopicId::Health => health::handle(state, input),
        TopicId::GoalSetting => goal::handle(state, input),
        TopicId::Investing => investing::handle(state, input),
        TopicId::Fitness => fitness::handle(state, input),
        TopicId::Idea => idea::handle(state, input),
        TopicId::Reminder => reminder::handle(state, input),
        // Riddle and NLP share the knowledge dispatcher
        TopicId::Riddle | TopicId::Nlp => knowledge::handle(topic, state, input),
    }
}
