//! Reset controller — closing remarks and the fixed reset/fallback copy.
//!
//! Invoked both at natural flow completion (to pick a closing line before
//! the state clears) and from the router's error path.

use crate::classify::contains_any;
use crate::state::TopicId;

/// Returned for a hard reset, regardless of what was in progress.
pub const WELCOME_BACK: &str =
    "Welcome back! Due to inactivity, I've reset the conversation state. Ready when you are!";

/// Returned when an active flow falls through with a cancel word in the input.
pub const CANCELLED: &str =
    "Conversation cancelled. How else can I assist you? Select a topic above to start.";

/// Returned when no flow is active and nothing matched a trigger phrase.
pub const NO_FLOW: &str = "I'm sorry, I don't have a specific flow for that yet. \
     Try selecting one of the main topics above to start a deeper conversation.";

/// Appended after the closing line when a flow handler fails internally.
pub const INTERNAL_APOLOGY: &str = "An internal server error occurred. Sorry!";

/// Cancel vocabulary honored by the in-flow fallback helper.
pub const IN_FLOW_CANCEL: &[&str] = &["cancel", "stop", "quit", "reset"];

/// Acknowledgment phrases that always get the generic thank-you closing.
const CLOSING_KEYWORDS: &[&str] = &[
    "no",
    "nope",
    "none",
    "nothing",
    "thats all",
    "that is all",
    "bye",
    "thanks",
    "thank you",
];

/// Pick the closing line for a finished (or aborted) flow.
///
/// Inputs carrying a closing/acknowledgment keyword always get the generic
/// thank-you; otherwise four topics have bespoke encouragement lines and
/// the rest share a generic flow-complete line.
pub fn closing_line(topic: Option<TopicId>, input: &str) -> &'static str {
    let lower = input.to_lowercase();
    if contains_any(&lower, CLOSING_KEYWORDS) {
        return "Understood! Thank you for chatting. \
                Feel free to select a new topic whenever you're ready.";
    }

    match topic {
        Some(TopicId::Health) => {
            "Great work checking in on your well-being! \
             Remember to prioritize **consistency over perfection** this week."
        }
        Some(TopicId::GoalSetting) => {
            "Goal set! Now that your **S.M.A.R.T. goal** is defined, \
             you're already one step closer to achieving it. Go crush it!"
        }
        Some(TopicId::Reminder) => {
            "Reminder confirmed! Your assistant has the details locked in. \
             Don't worry about forgetting—you're covered."
        }
        Some(TopicId::Idea) => {
            "Brainstorming is complete! That's a solid foundation for your idea. \
             Time to turn inspiration into action!"
        }
        _ => "Flow complete. Ready for a new topic? Select one of the chips above.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_keyword_wins_over_topic_line() {
        let line = closing_line(Some(TopicId::Health), "Thanks, that's everything");
        assert!(line.contains("Thank you for chatting"));
    }

    #[test]
    fn bespoke_lines_for_four_topics() {
        assert!(closing_line(Some(TopicId::Health), "Most of the Time").contains("well-being"));
        assert!(closing_line(Some(TopicId::GoalSetting), "next week").contains("S.M.A.R.T."));
        assert!(closing_line(Some(TopicId::Reminder), "High").contains("locked in"));
        assert!(closing_line(Some(TopicId::Idea), "Mobile App").contains("Brainstorming"));
    }

    #[test]
    fn other_topics_get_generic_line() {
        assert!(closing_line(Some(TopicId::Investing), "Long Term").starts_with("Flow complete"));
        assert!(closing_line(Some(TopicId::Riddle), "a towel").starts_with("Flow complete"));
        assert!(closing_line(None, "hello").starts_with("Flow complete"));
    }

    #[test]
    fn closing_match_is_case_insensitive_substring() {
        assert!(closing_line(None, "THAT IS ALL for today").contains("Thank you"));
    }
}
