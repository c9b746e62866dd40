//! Topic router — the single entry point for a conversation turn.
//!
//! Order of checks: hard-reset vocabulary first (it overrides any phase),
//! then redispatch to the active flow, then idle trigger matching, then
//! the global fallback. Flow failures are contained here: they become a
//! forced reset plus an apology, never a protocol-level error.

use tracing::{debug, info, warn};

use crate::classify::contains_any;
use crate::error::FlowError;
use crate::flows::{self, FlowReply};
use crate::reset;
use crate::state::{ConversationState, TopicId};

/// Reserved words that force a return to idle from any phase.
const HARD_RESET_KEYWORDS: &[&str] = &["reset", "start over", "cancel", "stop", "auto_reset_scroll"];

/// Idle acknowledgment phrases that get a closing line instead of the
/// fallback message.
const IDLE_ACK_KEYWORDS: &[&str] = &["no", "none", "bye", "thanks"];

/// Trigger phrase → topic, scanned in order while idle.
const TOPIC_TRIGGERS: &[(&str, TopicId)] = &[
    ("health check-up", TopicId::Health),
    ("goal setting", TopicId::GoalSetting),
    ("investing tips", TopicId::Investing),
    ("fitness goals", TopicId::Fitness),
    ("schedule a reminder", TopicId::Reminder),
    ("generate idea", TopicId::Idea),
    ("quick riddle", TopicId::Riddle),
    ("define nlp", TopicId::Nlp),
];

fn trigger_topic(input_lower: &str) -> Option<TopicId> {
    TOPIC_TRIGGERS
        .iter()
        .find(|(phrase, _)| input_lower.contains(phrase))
        .map(|&(_, topic)| topic)
}

/// Run one conversation turn. Always produces a text response.
pub fn respond(state: &mut ConversationState, input: &str) -> String {
    let lower = input.to_lowercase();

    if contains_any(&lower, HARD_RESET_KEYWORDS) {
        info!(topic = ?state.topic, phase = state.phase, "hard reset requested");
        state.reset();
        return reset::WELCOME_BACK.to_string();
    }

    match state.topic {
        Some(topic) => run_flow(state, topic, input, &lower),
        None => match trigger_topic(&lower) {
            Some(topic) => {
                info!(%topic, "starting flow");
                state.start(topic);
                run_flow(state, topic, input, &lower)
            }
            None if contains_any(&lower, IDLE_ACK_KEYWORDS) => {
                reset::closing_line(None, input).to_string()
            }
            None => {
                debug!(input = %input, "no trigger phrase matched");
                state.reset();
                reset::NO_FLOW.to_string()
            }
        },
    }
}

fn run_flow(state: &mut ConversationState, topic: TopicId, input: &str, lower: &str) -> String {
    match flows::dispatch(topic, state, input) {
        Ok(FlowReply::Prompt(text)) => text,
        Ok(FlowReply::Finished(text)) => {
            info!(%topic, "flow finished");
            state.reset();
            text
        }
        Err(FlowError::PhaseOutOfRange { topic, phase }) => {
            // Defensive fall-through: never a no-op, always a reset
            warn!(%topic, phase, "active flow fell through every phase branch");
            state.reset();
            if contains_any(lower, reset::IN_FLOW_CANCEL) {
                reset::CANCELLED.to_string()
            } else {
                reset::NO_FLOW.to_string()
            }
        }
        Err(e) => {
            warn!(%topic, error = %e, "flow handler failed, forcing reset");
            let closing = reset::closing_line(Some(topic), "");
            state.reset();
            format!("{closing}{}", reset::INTERNAL_APOLOGY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TopicData;

    #[test]
    fn idle_trigger_starts_the_matching_flow() {
        let mut state = ConversationState::idle();
        let reply = respond(&mut state, "I'd like a Health Check-up please");
        assert_eq!(state.topic, Some(TopicId::Health));
        assert_eq!(state.phase, 2);
        assert!(reply.contains("**sleep**"));
    }

    #[test]
    fn hard_reset_wins_from_any_phase() {
        for keyword in ["reset", "start over", "cancel", "stop", "auto_reset_scroll"] {
            let mut state = ConversationState::idle();
            respond(&mut state, "investing tips");
            respond(&mut state, "high");
            assert_eq!(state.phase, 3);

            let reply = respond(&mut state, keyword);
            assert!(state.is_idle(), "{keyword:?} must clear the state");
            assert_eq!(state.phase, 0);
            assert!(matches!(state.data, TopicData::Idle));
            assert_eq!(reply, reset::WELCOME_BACK);
        }
    }

    #[test]
    fn hard_reset_applies_while_idle_too() {
        let mut state = ConversationState::idle();
        let reply = respond(&mut state, "reset");
        assert!(state.is_idle());
        assert_eq!(reply, reset::WELCOME_BACK);
    }

    #[test]
    fn mid_flow_trigger_phrases_are_ignored() {
        let mut state = ConversationState::idle();
        respond(&mut state, "health check-up");
        // "goal setting" is another topic's trigger; at phase 2 it is just
        // an invalid sleep answer
        let reply = respond(&mut state, "goal setting");
        assert_eq!(state.topic, Some(TopicId::Health));
        assert_eq!(state.phase, 2);
        assert!(reply.contains("Please select a range for sleep"));
    }

    #[test]
    fn invalid_input_reoffers_the_same_options() {
        let mut state = ConversationState::idle();
        let first = respond(&mut state, "health check-up");
        let retry = respond(&mut state, "banana");
        let offered = crate::options::extract(&first);
        let reoffered = crate::options::extract(&retry);
        assert_eq!(offered, reoffered);
        assert_eq!(state.phase, 2);
    }

    #[test]
    fn unknown_idle_input_gets_fallback() {
        let mut state = ConversationState::idle();
        let reply = respond(&mut state, "what's the weather like?");
        assert!(state.is_idle());
        assert_eq!(reply, reset::NO_FLOW);
    }

    #[test]
    fn idle_acknowledgment_gets_closing_line() {
        let mut state = ConversationState::idle();
        let reply = respond(&mut state, "thanks, bye!");
        assert!(state.is_idle());
        assert!(reply.contains("Thank you for chatting"));
    }

    #[test]
    fn finished_flow_returns_to_idle() {
        let mut state = ConversationState::idle();
        for input in [
            "health check-up",
            "6-8 hours",
            "8+ Glasses",
            "Low",
            "5+ Days",
        ] {
            respond(&mut state, input);
        }
        let last = respond(&mut state, "Most of the Time");
        assert!(last.contains("your habits are excellent"));
        assert!(state.is_idle());
        assert_eq!(state.phase, 0);
    }

    #[test]
    fn phase_fall_through_resets_with_fallback() {
        let mut state = ConversationState::idle();
        state.start(TopicId::Fitness);
        state.phase = 42;
        let reply = respond(&mut state, "anything");
        assert!(state.is_idle());
        assert_eq!(reply, reset::NO_FLOW);
    }

    #[test]
    fn phase_fall_through_with_quit_says_cancelled() {
        let mut state = ConversationState::idle();
        state.start(TopicId::Fitness);
        state.phase = 42;
        let reply = respond(&mut state, "quit");
        assert!(state.is_idle());
        assert_eq!(reply, reset::CANCELLED);
    }

    #[test]
    fn internal_failure_becomes_apology_and_reset() {
        // Mismatched data for the active topic is an internal failure
        let mut state = ConversationState::idle();
        state.topic = Some(TopicId::Health);
        state.phase = 3;
        state.data = TopicData::Nlp;
        let reply = respond(&mut state, "6-8 hours");
        assert!(state.is_idle());
        assert!(reply.contains(reset::INTERNAL_APOLOGY));
        assert!(reply.contains("well-being"), "closing line should be topic-flavored");
    }

    #[test]
    fn phase_advances_by_exactly_one_per_valid_answer() {
        let mut state = ConversationState::idle();
        respond(&mut state, "investing tips");
        let mut phases = vec![state.phase];
        for input in ["medium", "passive income"] {
            respond(&mut state, input);
            phases.push(state.phase);
        }
        assert_eq!(phases, vec![2, 3, 4]);
    }
}
