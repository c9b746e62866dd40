//! Health check-up flow — sleep, water, stress, movement, diet.
//!
//! Six phases: the entry prompt, five collection questions, with advice
//! synthesized from the full answer set at the end.

use crate::classify::first_match;
use crate::error::FlowError;
use crate::flows::FlowReply;
use crate::options;
use crate::reset;
use crate::state::{ConversationState, TopicData, TopicId};

// ── Answer values ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepRange {
    LessThan6h,
    SixToEight,
    EightPlus,
}

impl SleepRange {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("less", Self::LessThan6h),
                ("6-8", Self::SixToEight),
                ("8+", Self::EightPlus),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LessThan6h => "Less than 6h",
            Self::SixToEight => "6-8 hours",
            Self::EightPlus => "8+ hours",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterIntake {
    ZeroToThree,
    FourToSeven,
    EightPlus,
}

impl WaterIntake {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("0-3", Self::ZeroToThree),
                ("4-7", Self::FourToSeven),
                ("8+", Self::EightPlus),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ZeroToThree => "0-3 Glasses",
            Self::FourToSeven => "4-7 Glasses",
            Self::EightPlus => "8+ Glasses",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("low", Self::Low),
                ("moderate", Self::Moderate),
                ("high", Self::High),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDays {
    ZeroToOne,
    TwoToFour,
    FivePlus,
}

impl MovementDays {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("0-1", Self::ZeroToOne),
                ("2-4", Self::TwoToFour),
                ("5+", Self::FivePlus),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ZeroToOne => "0-1 Day",
            Self::TwoToFour => "2-4 Days",
            Self::FivePlus => "5+ Days",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietHabit {
    MostOfTheTime,
    Sometimes,
    Rarely,
}

impl DietHabit {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("most", Self::MostOfTheTime),
                ("sometimes", Self::Sometimes),
                ("rarely", Self::Rarely),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MostOfTheTime => "Most of the Time",
            Self::Sometimes => "Sometimes",
            Self::Rarely => "Rarely",
        }
    }
}

// ── Collected data ──────────────────────────────────────────────────────

/// Answers collected so far, unset until their phase succeeds.
#[derive(Debug, Clone, Default)]
pub struct HealthData {
    pub sleep: Option<SleepRange>,
    pub water: Option<WaterIntake>,
    pub stress: Option<StressLevel>,
    pub movement: Option<MovementDays>,
    pub diet: Option<DietHabit>,
}

impl HealthData {
    /// The finalized record, available only once every field is set.
    pub fn finalize(&self) -> Result<HealthReport, FlowError> {
        Ok(HealthReport {
            sleep: self.sleep.ok_or(FlowError::MissingField { field: "sleep" })?,
            water: self.water.ok_or(FlowError::MissingField { field: "water" })?,
            stress: self
                .stress
                .ok_or(FlowError::MissingField { field: "stress" })?,
            movement: self
                .movement
                .ok_or(FlowError::MissingField { field: "movement" })?,
            diet: self.diet.ok_or(FlowError::MissingField { field: "diet" })?,
        })
    }
}

/// A complete check-up, ready for advice synthesis.
#[derive(Debug, Clone, Copy)]
pub struct HealthReport {
    pub sleep: SleepRange,
    pub water: WaterIntake,
    pub stress: StressLevel,
    pub movement: MovementDays,
    pub diet: DietHabit,
}

impl HealthReport {
    /// Problem areas, tested in a fixed order so the "first win" pick is
    /// deterministic.
    fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if self.sleep == SleepRange::LessThan6h {
            issues.push("Sleep");
        }
        if self.water == WaterIntake::ZeroToThree {
            issues.push("Hydration");
        }
        if self.stress == StressLevel::High {
            issues.push("Stress");
        }
        if self.movement == MovementDays::ZeroToOne {
            issues.push("Movement");
        }
        if self.diet == DietHabit::Rarely {
            issues.push("Diet");
        }
        issues
    }

    fn advice(&self) -> String {
        let issues = self.issues();
        match issues.as_slice() {
            [] => "Overall, your habits are excellent! Maintain this balance and consistency."
                .to_string(),
            [only] => format!(
                "Focus on this key area: **{only}**. \
                 A small, consistent change here will have a big impact."
            ),
            [first, ..] => format!(
                "You have a few opportunities for improvement ({}). \
                 Start by targeting **{first}** first for the easiest win.",
                issues.join(", ")
            ),
        }
    }

    fn summary(&self) -> String {
        format!(
            "--- Comprehensive Health Summary ---\n\
             Sleep: {}\n\
             Water: {}\n\
             Stress: {}\n\
             Movement: {}\n\
             Diet: {}\n\
             ------------------------------------\n",
            self.sleep.label(),
            self.water.label(),
            self.stress.label(),
            self.movement.label(),
            self.diet.label(),
        )
    }
}

// ── Phase handlers ──────────────────────────────────────────────────────

const SLEEP_LABELS: [&str; 3] = ["Less than 6h", "6-8 hours", "8+ hours"];
const WATER_LABELS: [&str; 3] = ["0-3 Glasses", "4-7 Glasses", "8+ Glasses"];
const STRESS_LABELS: [&str; 3] = ["Low", "Moderate", "High"];
const MOVEMENT_LABELS: [&str; 3] = ["0-1 Day", "2-4 Days", "5+ Days"];
const DIET_LABELS: [&str; 3] = ["Most of the Time", "Sometimes", "Rarely"];

pub fn handle(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();
    let ConversationState { phase, data, .. } = state;
    let TopicData::Health(data) = data else {
        return Err(FlowError::DataMismatch {
            topic: TopicId::Health,
        });
    };

    match *phase {
        1 => {
            *phase = 2;
            Ok(FlowReply::Prompt(format!(
                "Let's check in on your well-being. On average, how many hours of \
                 **sleep** did you get last night? {}",
                options::options(&SLEEP_LABELS)
            )))
        }
        2 => match SleepRange::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select a range for sleep: {}",
                options::options(&SLEEP_LABELS)
            ))),
            Some(sleep) => {
                data.sleep = Some(sleep);
                *phase = 3;
                Ok(FlowReply::Prompt(format!(
                    "Sleep noted as **{}**. How many glasses of **water** (approx. 250ml) \
                     did you drink today? {}",
                    sleep.label(),
                    options::options(&WATER_LABELS)
                )))
            }
        },
        3 => match WaterIntake::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please choose a water intake range: {}",
                options::options(&WATER_LABELS)
            ))),
            Some(water) => {
                data.water = Some(water);
                *phase = 4;
                Ok(FlowReply::Prompt(format!(
                    "Water intake confirmed as **{}**. How would you rate your current \
                     **stress level**? {}",
                    water.label(),
                    options::options(&STRESS_LABELS)
                )))
            }
        },
        4 => match StressLevel::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please rate your stress level: {}",
                options::options(&STRESS_LABELS)
            ))),
            Some(stress) => {
                data.stress = Some(stress);
                *phase = 5;
                Ok(FlowReply::Prompt(format!(
                    "Stress level set to **{}**. On average, how many days a week do you \
                     get **30 minutes of intentional movement/exercise**? {}",
                    stress.label(),
                    options::options(&MOVEMENT_LABELS)
                )))
            }
        },
        5 => match MovementDays::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select your weekly movement: {}",
                options::options(&MOVEMENT_LABELS)
            ))),
            Some(movement) => {
                data.movement = Some(movement);
                *phase = 6;
                Ok(FlowReply::Prompt(format!(
                    "Movement noted: **{}**. Last question: How often do you feel you make \
                     **nutritious food choices**? {}",
                    movement.label(),
                    options::options(&DIET_LABELS)
                )))
            }
        },
        6 => match DietHabit::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select a nutrition rating: {}",
                options::options(&DIET_LABELS)
            ))),
            Some(diet) => {
                data.diet = Some(diet);
                let report = data.finalize()?;
                let closing = reset::closing_line(Some(TopicId::Health), input);
                Ok(FlowReply::Finished(format!(
                    "Health Check-up Complete!\n\n{}\n**My Recommendation:** {}\n\n{}",
                    report.summary(),
                    report.advice(),
                    closing
                )))
            }
        },
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::Health,
            phase: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> ConversationState {
        let mut state = ConversationState::idle();
        state.start(TopicId::Health);
        // Consume the entry phase
        handle(&mut state, "health check-up").unwrap();
        state
    }

    fn prompt(reply: FlowReply) -> String {
        match reply {
            FlowReply::Prompt(text) => text,
            FlowReply::Finished(text) => panic!("expected prompt, flow finished: {text}"),
        }
    }

    #[test]
    fn entry_phase_asks_about_sleep() {
        let mut state = ConversationState::idle();
        state.start(TopicId::Health);
        let reply = prompt(handle(&mut state, "health check-up").unwrap());
        assert!(reply.contains("**sleep**"));
        assert!(reply.contains("<<OPTION:6-8 hours>>"));
        assert_eq!(state.phase, 2);
    }

    #[test]
    fn invalid_sleep_answer_reprompts_without_advancing() {
        let mut state = started();
        let reply = prompt(handle(&mut state, "a lot").unwrap());
        assert!(reply.contains("Please select a range for sleep"));
        assert!(reply.contains("<<OPTION:Less than 6h>>"));
        assert_eq!(state.phase, 2, "phase must not advance on a miss");
    }

    #[test]
    fn each_answer_advances_one_phase() {
        let mut state = started();
        for (answer, expected_phase) in [
            ("6-8 hours", 3),
            ("8+ Glasses", 4),
            ("Low", 5),
            ("5+ Days", 6),
        ] {
            handle(&mut state, answer).unwrap();
            assert_eq!(state.phase, expected_phase, "after {answer:?}");
        }
    }

    #[test]
    fn happy_path_summary_and_praise() {
        let mut state = started();
        for answer in ["6-8 hours", "8+ Glasses", "Low", "5+ Days"] {
            handle(&mut state, answer).unwrap();
        }
        let reply = handle(&mut state, "Most of the Time").unwrap();
        let FlowReply::Finished(text) = reply else {
            panic!("terminal phase should finish the flow");
        };
        for line in [
            "Sleep: 6-8 hours",
            "Water: 8+ Glasses",
            "Stress: Low",
            "Movement: 5+ Days",
            "Diet: Most of the Time",
        ] {
            assert!(text.contains(line), "summary missing {line:?}\n{text}");
        }
        assert!(text.contains("your habits are excellent"));
    }

    #[test]
    fn single_issue_is_named() {
        let report = HealthReport {
            sleep: SleepRange::SixToEight,
            water: WaterIntake::EightPlus,
            stress: StressLevel::High,
            movement: MovementDays::FivePlus,
            diet: DietHabit::Sometimes,
        };
        assert!(report.advice().contains("**Stress**"));
    }

    #[test]
    fn multiple_issues_target_the_first() {
        let report = HealthReport {
            sleep: SleepRange::LessThan6h,
            water: WaterIntake::ZeroToThree,
            stress: StressLevel::Low,
            movement: MovementDays::TwoToFour,
            diet: DietHabit::Rarely,
        };
        let advice = report.advice();
        assert!(advice.contains("Sleep, Hydration, Diet"));
        assert!(advice.contains("targeting **Sleep** first"));
    }

    #[test]
    fn finalize_fails_on_partial_data() {
        let data = HealthData {
            sleep: Some(SleepRange::SixToEight),
            ..Default::default()
        };
        assert!(matches!(
            data.finalize(),
            Err(FlowError::MissingField { field: "water" })
        ));
    }

    #[test]
    fn classifiers_use_substring_containment() {
        assert_eq!(
            SleepRange::classify("i got less sleep than usual"),
            Some(SleepRange::LessThan6h)
        );
        assert_eq!(
            StressLevel::classify("pretty moderate i'd say"),
            Some(StressLevel::Moderate)
        );
        assert_eq!(DietHabit::classify("junk food"), None);
    }
}
