//! Idea generation flow — topic, audience, format.
//!
//! The topic is free text with no length guard; audience and format are
//! classified. Two specific combinations get bespoke ideas, everything
//! else a generic deep dive.

use crate::classify::first_match;
use crate::error::FlowError;
use crate::flows::FlowReply;
use crate::options;
use crate::reset;
use crate::state::{ConversationState, TopicData, TopicId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Students,
    Professionals,
    GeneralPublic,
}

impl Audience {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("student", Self::Students),
                ("professional", Self::Professionals),
                ("general", Self::GeneralPublic),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Students => "Students",
            Self::Professionals => "Professionals",
            Self::GeneralPublic => "General Public",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaFormat {
    BlogPost,
    VideoSeries,
    MobileApp,
}

impl IdeaFormat {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("blog post", Self::BlogPost),
                ("video series", Self::VideoSeries),
                ("mobile app", Self::MobileApp),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BlogPost => "Blog Post",
            Self::VideoSeries => "Video Series",
            Self::MobileApp => "Mobile App",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdeaData {
    pub topic: Option<String>,
    pub audience: Option<Audience>,
    pub format: Option<IdeaFormat>,
}

const AUDIENCE_LABELS: [&str; 3] = ["Students", "Professionals", "General Public"];
const FORMAT_LABELS: [&str; 3] = ["Blog Post", "Video Series", "Mobile App"];

fn pitch(topic: &str, audience: Audience, format: IdeaFormat) -> String {
    let mut idea = format!(
        "Idea for a {} on the topic '{topic}' aimed at {}: ",
        format.label(),
        audience.label()
    );

    if format == IdeaFormat::MobileApp && audience == Audience::Students {
        idea.push_str(
            "Develop a **'Study Buddy'** app that uses flashcards and AI-generated \
             practice quizzes related to their coursework.",
        );
    } else if format == IdeaFormat::VideoSeries && topic.to_lowercase().contains("investing") {
        idea.push_str(
            "Create a **'3-Minute Money Manager'** video series, breaking down complex \
             financial topics into quick, actionable clips.",
        );
    } else {
        idea.push_str(&format!(
            "Create a **'Deep Dive'** {} explaining a controversial or overlooked angle \
             of the '{topic}' topic to {}.",
            format.label(),
            audience.label()
        ));
    }
    idea
}

pub fn handle(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();
    let ConversationState { phase, data, .. } = state;
    let TopicData::Idea(data) = data else {
        return Err(FlowError::DataMismatch {
            topic: TopicId::Idea,
        });
    };

    match *phase {
        1 => {
            *phase = 2;
            Ok(FlowReply::Prompt(
                "I can help you brainstorm! What is the **general topic** you need an \
                 idea for?"
                    .to_string(),
            ))
        }
        2 => {
            data.topic = Some(input.to_string());
            *phase = 3;
            Ok(FlowReply::Prompt(format!(
                "Topic: **{input}**. Who is the **target audience**? {}",
                options::options(&AUDIENCE_LABELS)
            )))
        }
        3 => match Audience::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select the target audience: {}",
                options::options(&AUDIENCE_LABELS)
            ))),
            Some(audience) => {
                data.audience = Some(audience);
                *phase = 4;
                Ok(FlowReply::Prompt(format!(
                    "Target: **{}**. What **format** should the idea be? {}",
                    audience.label(),
                    options::options(&FORMAT_LABELS)
                )))
            }
        },
        4 => match IdeaFormat::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select a format: {}",
                options::options(&FORMAT_LABELS)
            ))),
            Some(format) => {
                data.format = Some(format);
                let topic = data.topic.as_deref().ok_or(FlowError::MissingField {
                    field: "topic",
                })?;
                let audience = data.audience.ok_or(FlowError::MissingField {
                    field: "audience",
                })?;
                let closing = reset::closing_line(Some(TopicId::Idea), input);
                Ok(FlowReply::Finished(format!(
                    "Brainstorming Complete!\n\n**Idea:** {}\n\n{closing}",
                    pitch(topic, audience, format)
                )))
            }
        },
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::Idea,
            phase: other,
        }),
    }
}
