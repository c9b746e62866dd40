//! S.M.A.R.T. goal-setting flow — subject, metric, deadline.
//!
//! No branching advice at the end; the terminal phase confirms the triple
//! as a S.M.A.R.T. summary. Subject and deadline are free text behind
//! length guards rather than keyword classification.

use crate::classify::{first_match, shorter_than};
use crate::error::FlowError;
use crate::flows::FlowReply;
use crate::options;
use crate::reset;
use crate::state::{ConversationState, TopicData, TopicId};

/// How the goal will be measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalMetric {
    Completion,
    Quantity,
    Time,
}

impl GoalMetric {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("completion", Self::Completion),
                ("quantity", Self::Quantity),
                ("time", Self::Time),
            ],
        )
    }

    /// Canonical stored value (differs from the button label).
    pub fn label(self) -> &'static str {
        match self {
            Self::Completion => "Completion (Binary)",
            Self::Quantity => "Quantity (Number)",
            Self::Time => "Time (Hours Spent)",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalData {
    pub subject: Option<String>,
    pub metric: Option<GoalMetric>,
    pub deadline: Option<String>,
}

const METRIC_LABELS: [&str; 3] = [
    "Completion (Yes/No)",
    "Quantity (Number)",
    "Time (Hours)",
];

/// Minimum characters for the goal subject.
const MIN_SUBJECT_LEN: usize = 5;
/// Minimum characters for the deadline text.
const MIN_DEADLINE_LEN: usize = 3;

pub fn handle(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();
    let ConversationState { phase, data, .. } = state;
    let TopicData::Goal(data) = data else {
        return Err(FlowError::DataMismatch {
            topic: TopicId::GoalSetting,
        });
    };

    match *phase {
        1 => {
            *phase = 2;
            Ok(FlowReply::Prompt(
                "Let's set a **S.M.A.R.T. Goal**. What is the specific **subject** of \
                 your goal (e.g., 'Learn Python', 'Finish Project')?"
                    .to_string(),
            ))
        }
        2 => {
            if shorter_than(input, MIN_SUBJECT_LEN) {
                return Ok(FlowReply::Prompt(
                    "Please enter a subject longer than a few characters.".to_string(),
                ));
            }
            data.subject = Some(input.to_string());
            *phase = 3;
            Ok(FlowReply::Prompt(format!(
                "Subject set: **{}**. How will you **measure** this goal? {}",
                input,
                options::options(&METRIC_LABELS)
            )))
        }
        3 => match GoalMetric::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select a measurement method: {}",
                options::options(&METRIC_LABELS)
            ))),
            Some(metric) => {
                data.metric = Some(metric);
                *phase = 4;
                Ok(FlowReply::Prompt(format!(
                    "Metric set as **{}**. What is the **deadline** or time-bound element?",
                    metric.label()
                )))
            }
        },
        4 => {
            if shorter_than(input, MIN_DEADLINE_LEN) {
                return Ok(FlowReply::Prompt(
                    "Please enter a deadline (e.g., 'Next Friday' or 'End of Semester')."
                        .to_string(),
                ));
            }
            data.deadline = Some(input.to_string());

            let subject = data.subject.as_deref().ok_or(FlowError::MissingField {
                field: "subject",
            })?;
            let metric = data.metric.ok_or(FlowError::MissingField { field: "metric" })?;
            let summary = format!(
                "--- S.M.A.R.T. Goal Summary ---\n\
                 Subject (Specific): {subject}\n\
                 Metric (Measurable): {}\n\
                 Deadline (Time-bound): {input}\n\
                 ------------------------------\n",
                metric.label()
            );
            let closing = reset::closing_line(Some(TopicId::GoalSetting), input);
            Ok(FlowReply::Finished(format!(
                "Goal Created! Your assistant will track:\n\n{summary}\n\n{closing}"
            )))
        }
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::GoalSetting,
            phase: other,
        }),
    }
}
