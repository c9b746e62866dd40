//! Knowledge flows — the riddle game and the NLP explainer.
//!
//! Both are two-phase sub-flows dispatched by topic: the riddle phase 2
//! stays open across hints and wrong guesses, the NLP phase 2 picks one
//! of two fixed explanations.

use rand::seq::SliceRandom;

use crate::error::FlowError;
use crate::flows::FlowReply;
use crate::options;
use crate::reset;
use crate::state::{ConversationState, TopicData, TopicId};

// ── Riddle bank ─────────────────────────────────────────────────────────

/// One riddle with its canonical answer and hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Riddle {
    pub text: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

pub static RIDDLES: &[Riddle] = &[
    Riddle {
        text: "I am always wet, but never rain. I am what you use when you want to be \
               clean again. What am I?",
        answer: "A towel",
        hint: "Think about what you use in the bathroom after a shower.",
    },
    Riddle {
        text: "What has an eye but cannot see?",
        answer: "A needle",
        hint: "You use me to fix things you wear.",
    },
    Riddle {
        text: "What is full of holes but still holds water?",
        answer: "A sponge",
        hint: "I live by the sink or in the tub.",
    },
    Riddle {
        text: "What question can you never answer yes to?",
        answer: "Are you asleep yet?",
        hint: "The act of answering proves the opposite of the question.",
    },
];

/// The riddle drawn for this session, unset until phase 1 runs.
#[derive(Debug, Clone, Default)]
pub struct RiddleData {
    pub riddle: Option<Riddle>,
}

/// Whether any whitespace-split token of the canonical answer appears in
/// the lowercased guess.
fn guessed_correctly(answer: &str, guess_lower: &str) -> bool {
    answer
        .split_whitespace()
        .any(|word| guess_lower.contains(&word.to_lowercase()))
}

// ── Dispatch ────────────────────────────────────────────────────────────

pub fn handle(
    topic: TopicId,
    state: &mut ConversationState,
    input: &str,
) -> Result<FlowReply, FlowError> {
    match topic {
        TopicId::Riddle => handle_riddle(state, input),
        TopicId::Nlp => handle_nlp(state, input),
        other => Err(FlowError::DataMismatch { topic: other }),
    }
}

// ── Riddle sub-flow ─────────────────────────────────────────────────────

fn handle_riddle(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();
    let ConversationState { phase, data, .. } = state;
    let TopicData::Riddle(data) = data else {
        return Err(FlowError::DataMismatch {
            topic: TopicId::Riddle,
        });
    };

    match *phase {
        1 => {
            let riddle = *RIDDLES
                .choose(&mut rand::thread_rng())
                .ok_or(FlowError::EmptyRiddleBank)?;
            data.riddle = Some(riddle);
            *phase = 2;
            Ok(FlowReply::Prompt(format!(
                "{} (Type 'hint' or 'answer' if you give up)",
                riddle.text
            )))
        }
        2 => {
            let riddle = data.riddle.ok_or(FlowError::MissingField {
                field: "riddle",
            })?;
            if guessed_correctly(riddle.answer, &lower) {
                let closing = reset::closing_line(Some(TopicId::Riddle), input);
                Ok(FlowReply::Finished(format!(
                    "That's correct! You got it right.\n\n{closing}"
                )))
            } else if lower.contains("answer") || lower.contains("give up") {
                let closing = reset::closing_line(Some(TopicId::Riddle), input);
                Ok(FlowReply::Finished(format!(
                    "The answer was **{}**. Good try!\n\n{closing}",
                    riddle.answer
                )))
            } else if lower.contains("hint") {
                // Hints neither advance nor reset
                Ok(FlowReply::Prompt(format!(
                    "Hint: {} (Try again or type 'answer')",
                    riddle.hint
                )))
            } else {
                Ok(FlowReply::Prompt(
                    "Keep guessing! Type 'hint' for help or 'answer' if you give up."
                        .to_string(),
                ))
            }
        }
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::Riddle,
            phase: other,
        }),
    }
}

// ── NLP sub-flow ────────────────────────────────────────────────────────

const NLP_FOLLOWUPS: [&str; 2] = ["Applications", "History"];

fn handle_nlp(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();

    match state.phase {
        1 => {
            state.phase = 2;
            Ok(FlowReply::Prompt(format!(
                "**Natural Language Processing (NLP)** is a branch of AI that gives \
                 computers the ability to read, understand, and generate human language.\
                 \n\nWould you like to know more about its: {}",
                options::options(&NLP_FOLLOWUPS)
            )))
        }
        2 => {
            let explanation = if lower.contains("applications") {
                "Key NLP applications include translation (Google Translate), sentiment \
                 analysis (figuring out if a review is positive or negative), and \
                 chatbots like me!"
            } else if lower.contains("history") {
                "NLP began in the 1950s with rule-based systems, but exploded in the \
                 2010s with **Deep Learning** and large language models (LLMs)."
            } else {
                return Ok(FlowReply::Prompt(format!(
                    "Please select: {}",
                    options::options(&NLP_FOLLOWUPS)
                )));
            };
            let closing = reset::closing_line(Some(TopicId::Nlp), input);
            Ok(FlowReply::Finished(format!("{explanation}\n\n{closing}")))
        }
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::Nlp,
            phase: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riddle_at_phase_2() -> (ConversationState, Riddle) {
        let mut state = ConversationState::idle();
        state.start(TopicId::Riddle);
        handle(TopicId::Riddle, &mut state, "quick riddle").unwrap();
        let TopicData::Riddle(ref data) = state.data else {
            panic!("wrong data variant");
        };
        let riddle = data.riddle.expect("phase 1 must draw a riddle");
        (state, riddle)
    }

    #[test]
    fn phase_1_draws_a_riddle_from_the_bank() {
        let (state, riddle) = riddle_at_phase_2();
        assert_eq!(state.phase, 2);
        assert!(RIDDLES.contains(&riddle));
    }

    #[test]
    fn hint_returns_stored_hint_without_advancing() {
        let (mut state, riddle) = riddle_at_phase_2();
        let reply = handle(TopicId::Riddle, &mut state, "hint").unwrap();
        let FlowReply::Prompt(text) = reply else {
            panic!("hint must not finish the flow");
        };
        assert!(text.contains(riddle.hint));
        assert_eq!(state.phase, 2, "hint must leave the phase untouched");
    }

    #[test]
    fn give_up_reveals_the_answer() {
        let (mut state, riddle) = riddle_at_phase_2();
        let reply = handle(TopicId::Riddle, &mut state, "i give up").unwrap();
        let FlowReply::Finished(text) = reply else {
            panic!("giving up must finish the flow");
        };
        assert!(text.contains(riddle.answer));
    }

    #[test]
    fn correct_guess_by_token_containment() {
        assert!(guessed_correctly("A towel", "is it a towel?"));
        assert!(guessed_correctly("A needle", "needle maybe"));
        assert!(!guessed_correctly("A sponge", "umm... brick?"));
    }

    #[test]
    fn wrong_guess_keeps_the_flow_open() {
        let (mut state, _) = riddle_at_phase_2();
        // No riddle answer token, no control keyword
        let reply = handle(TopicId::Riddle, &mut state, "zzz").unwrap();
        assert!(matches!(reply, FlowReply::Prompt(ref text)
            if text.contains("Keep guessing")));
        assert_eq!(state.phase, 2);
    }

    #[test]
    fn nlp_definition_offers_two_followups() {
        let mut state = ConversationState::idle();
        state.start(TopicId::Nlp);
        let reply = handle(TopicId::Nlp, &mut state, "define nlp").unwrap();
        let FlowReply::Prompt(text) = reply else {
            panic!("definition is not terminal");
        };
        assert!(text.contains("Natural Language Processing"));
        assert!(text.contains("<<OPTION:Applications>><<OPTION:History>>"));
        assert_eq!(state.phase, 2);
    }

    #[test]
    fn nlp_classifies_applications_and_history() {
        for (answer, expected) in [
            ("applications please", "sentiment"),
            ("the history", "1950s"),
        ] {
            let mut state = ConversationState::idle();
            state.start(TopicId::Nlp);
            handle(TopicId::Nlp, &mut state, "define nlp").unwrap();
            let reply = handle(TopicId::Nlp, &mut state, answer).unwrap();
            let FlowReply::Finished(text) = reply else {
                panic!("followup should finish the flow");
            };
            assert!(text.contains(expected), "{answer:?} -> {text}");
        }
    }

    #[test]
    fn nlp_miss_reprompts_with_same_options() {
        let mut state = ConversationState::idle();
        state.start(TopicId::Nlp);
        handle(TopicId::Nlp, &mut state, "define nlp").unwrap();
        let reply = handle(TopicId::Nlp, &mut state, "idk").unwrap();
        assert!(matches!(reply, FlowReply::Prompt(ref text)
            if text.contains("<<OPTION:Applications>><<OPTION:History>>")));
        assert_eq!(state.phase, 2);
    }
}
