//! Reminder scheduling flow — subject, time, priority.
//!
//! Subject and time are free text behind length guards; the terminal
//! phase confirms the triple with no branching advice.

use crate::classify::{first_match, shorter_than};
use crate::error::FlowError;
use crate::flows::FlowReply;
use crate::options;
use crate::reset;
use crate::state::{ConversationState, TopicData, TopicId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("high", Self::High),
                ("medium", Self::Medium),
                ("low", Self::Low),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReminderData {
    pub subject: Option<String>,
    pub time: Option<String>,
    pub priority: Option<Priority>,
}

const PRIORITY_LABELS: [&str; 3] = ["High", "Medium", "Low"];

/// Minimum characters for the reminder subject and time.
const MIN_SUBJECT_LEN: usize = 5;
const MIN_TIME_LEN: usize = 5;

pub fn handle(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();
    let ConversationState { phase, data, .. } = state;
    let TopicData::Reminder(data) = data else {
        return Err(FlowError::DataMismatch {
            topic: TopicId::Reminder,
        });
    };

    match *phase {
        1 => {
            *phase = 2;
            Ok(FlowReply::Prompt(
                "I can schedule that. What is the **subject** of the reminder \
                 (e.g., 'Pay the electricity bill')?"
                    .to_string(),
            ))
        }
        2 => {
            if shorter_than(input, MIN_SUBJECT_LEN) {
                return Ok(FlowReply::Prompt(
                    "The subject is too short. Please tell me what to remind you about."
                        .to_string(),
                ));
            }
            data.subject = Some(input.to_string());
            *phase = 3;
            Ok(FlowReply::Prompt(format!(
                "Got it: **'{input}'**. What **day and time** should I remind you?"
            )))
        }
        3 => {
            if shorter_than(input, MIN_TIME_LEN) {
                return Ok(FlowReply::Prompt(
                    "Please provide a time (e.g., 'Tomorrow at 10 AM').".to_string(),
                ));
            }
            data.time = Some(input.to_string());
            *phase = 4;
            Ok(FlowReply::Prompt(format!(
                "Time set for **{input}**. What **priority level** should this reminder \
                 have? {}",
                options::options(&PRIORITY_LABELS)
            )))
        }
        4 => match Priority::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select a priority: {}",
                options::options(&PRIORITY_LABELS)
            ))),
            Some(priority) => {
                data.priority = Some(priority);
                let subject = data.subject.as_deref().ok_or(FlowError::MissingField {
                    field: "subject",
                })?;
                let time = data.time.as_deref().ok_or(FlowError::MissingField {
                    field: "time",
                })?;
                let closing = reset::closing_line(Some(TopicId::Reminder), input);
                Ok(FlowReply::Finished(format!(
                    "Reminder Scheduled!\n\
                     **Subject:** {subject}\n\
                     **Time:** {time}\n\
                     **Priority:** {}\n\n\n{closing}",
                    priority.label()
                )))
            }
        },
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::Reminder,
            phase: other,
        }),
    }
}
