//! Fitness planning flow — goal, weekly frequency, preferred activity.

use crate::classify::{contains_any, first_match};
use crate::error::FlowError;
use crate::flows::FlowReply;
use crate::options;
use crate::reset;
use crate::state::{ConversationState, TopicData, TopicId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
}

impl FitnessGoal {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("loss", Self::WeightLoss),
                ("muscle", Self::MuscleGain),
                ("endurance", Self::Endurance),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Endurance => "Endurance Training",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Strength,
    Cardio,
    Hybrid,
}

impl Activity {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("strength training", Self::Strength),
                ("cardio focus", Self::Cardio),
                ("hybrid", Self::Hybrid),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength Training",
            Self::Cardio => "Cardio Focus",
            Self::Hybrid => "Hybrid (Mix)",
        }
    }
}

/// Answers collected so far. Frequency keeps the user's own wording once
/// it names one of the offered ranges.
#[derive(Debug, Clone, Default)]
pub struct FitnessData {
    pub goal: Option<FitnessGoal>,
    pub frequency: Option<String>,
    pub activity: Option<Activity>,
}

const GOAL_LABELS: [&str; 3] = ["Weight Loss", "Build Muscle", "Increase Endurance"];
const FREQUENCY_LABELS: [&str; 3] = ["1-2 Days", "3-4 Days", "5+ Days"];
const FREQUENCY_KEYWORDS: &[&str] = &["1-2 days", "3-4 days", "5+ days"];
const ACTIVITY_LABELS: [&str; 3] = ["Strength Training", "Cardio Focus", "Hybrid"];

fn advice(goal: FitnessGoal, activity: Activity) -> &'static str {
    match (goal, activity) {
        (FitnessGoal::WeightLoss, Activity::Cardio) => {
            "Recommendation: Focus on **High-Intensity Interval Training (HIIT)** on your \
             training days, combined with a caloric deficit."
        }
        (FitnessGoal::MuscleGain, Activity::Strength) => {
            "Recommendation: Implement a **Progressive Overload** routine, focusing on \
             compound lifts (squats, bench press) 3-4 times per week."
        }
        (FitnessGoal::Endurance, _) => {
            "Recommendation: Follow the **80/20 rule** (80% easy effort, 20% high \
             intensity) to build your aerobic base effectively."
        }
        _ => {
            "Recommendation: Consistent effort is key. Ensure your diet supports your \
             goal and prioritize sleep."
        }
    }
}

pub fn handle(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();
    let ConversationState { phase, data, .. } = state;
    let TopicData::Fitness(data) = data else {
        return Err(FlowError::DataMismatch {
            topic: TopicId::Fitness,
        });
    };

    match *phase {
        1 => {
            *phase = 2;
            Ok(FlowReply::Prompt(format!(
                "Let's build a plan. What is your primary **fitness goal**? {}",
                options::options(&GOAL_LABELS)
            )))
        }
        2 => match FitnessGoal::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please choose one of the main goals: {}",
                options::options(&GOAL_LABELS)
            ))),
            Some(goal) => {
                data.goal = Some(goal);
                *phase = 3;
                Ok(FlowReply::Prompt(format!(
                    "Great, **{}** is the focus. How many times per week do you plan to \
                     **exercise**? {}",
                    goal.label(),
                    options::options(&FREQUENCY_LABELS)
                )))
            }
        },
        3 => {
            if !contains_any(&lower, FREQUENCY_KEYWORDS) {
                return Ok(FlowReply::Prompt(format!(
                    "Please select a frequency: {}",
                    options::options(&FREQUENCY_LABELS)
                )));
            }
            data.frequency = Some(input.to_string());
            *phase = 4;
            Ok(FlowReply::Prompt(format!(
                "Finally, what is your **preferred activity**? {}",
                options::options(&ACTIVITY_LABELS)
            )))
        }
        4 => match Activity::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select an activity type: {}",
                options::options(&ACTIVITY_LABELS)
            ))),
            Some(activity) => {
                data.activity = Some(activity);
                let goal = data.goal.ok_or(FlowError::MissingField { field: "goal" })?;
                let frequency = data.frequency.as_deref().ok_or(FlowError::MissingField {
                    field: "frequency",
                })?;
                let summary = format!(
                    "Goal: {}\nFrequency: {frequency}\nActivity: {}\n",
                    goal.label(),
                    activity.label()
                );
                let closing = reset::closing_line(Some(TopicId::Fitness), input);
                Ok(FlowReply::Finished(format!(
                    "Plan Confirmed:\n\n{summary}\n{}\n\n{closing}",
                    advice(goal, activity)
                )))
            }
        },
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::Fitness,
            phase: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> ConversationState {
        let mut state = ConversationState::idle();
        state.start(TopicId::Fitness);
        handle(&mut state, "fitness goals").unwrap();
        state
    }

    #[test]
    fn frequency_keeps_user_wording() {
        let mut state = started();
        handle(&mut state, "build muscle").unwrap();
        handle(&mut state, "probably 3-4 days a week").unwrap();
        let TopicData::Fitness(ref data) = state.data else {
            panic!("wrong data variant");
        };
        assert_eq!(data.frequency.as_deref(), Some("probably 3-4 days a week"));
        assert_eq!(state.phase, 4);
    }

    #[test]
    fn invalid_frequency_reprompts() {
        let mut state = started();
        handle(&mut state, "weight loss").unwrap();
        let reply = handle(&mut state, "every day").unwrap();
        assert!(matches!(reply, FlowReply::Prompt(ref text)
            if text.contains("Please select a frequency")));
        assert_eq!(state.phase, 3);
    }

    #[test]
    fn muscle_plus_strength_gets_progressive_overload() {
        let mut state = started();
        handle(&mut state, "build muscle").unwrap();
        handle(&mut state, "5+ Days").unwrap();
        let reply = handle(&mut state, "Strength Training").unwrap();
        let FlowReply::Finished(text) = reply else {
            panic!("activity should finish the flow");
        };
        assert!(text.contains("Goal: Muscle Gain"));
        assert!(text.contains("Progressive Overload"));
    }

    #[test]
    fn endurance_advice_ignores_activity() {
        assert!(advice(FitnessGoal::Endurance, Activity::Strength).contains("80/20"));
        assert!(advice(FitnessGoal::Endurance, Activity::Hybrid).contains("80/20"));
    }

    #[test]
    fn default_advice_for_other_combinations() {
        assert!(advice(FitnessGoal::WeightLoss, Activity::Strength)
            .contains("Consistent effort is key"));
    }
}
