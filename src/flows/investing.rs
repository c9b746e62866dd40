//! Investing tips flow — risk tolerance, goal, horizon.
//!
//! The horizon phase is the terminal one: a successful classification
//! advances and emits the summary and recommendation in the same call.

use crate::classify::first_match;
use crate::error::FlowError;
use crate::flows::FlowReply;
use crate::options;
use crate::reset;
use crate::state::{ConversationState, TopicData, TopicId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("low", Self::Low),
                ("medium", Self::Medium),
                ("high", Self::High),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentGoal {
    Retirement,
    PassiveIncome,
    CarPurchase,
}

impl InvestmentGoal {
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("retirement", Self::Retirement),
                ("passive", Self::PassiveIncome),
                ("car", Self::CarPurchase),
            ],
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Retirement => "Retirement Planning",
            Self::PassiveIncome => "Passive Income",
            Self::CarPurchase => "Car Purchase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    Short,
    Medium,
    Long,
}

impl Horizon {
    /// Full button labels are checked first (most reliable when the client
    /// sends the quick-reply text), then looser keywords and year ranges
    /// for manually typed input.
    pub fn classify(input_lower: &str) -> Option<Self> {
        first_match(
            input_lower,
            &[
                ("short term (0-3 yrs)", Self::Short),
                ("medium term (4-10 yrs)", Self::Medium),
                ("long term (10+ yrs)", Self::Long),
            ],
        )
        .or_else(|| {
            first_match(
                input_lower,
                &[
                    ("short", Self::Short),
                    ("0-3", Self::Short),
                    ("medium", Self::Medium),
                    ("4-10", Self::Medium),
                    ("5-10", Self::Medium),
                    ("long", Self::Long),
                    ("10+", Self::Long),
                    ("20", Self::Long),
                ],
            )
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short Term (0-3 yrs)",
            Self::Medium => "Medium Term (4-10 yrs)",
            Self::Long => "Long Term (10+ yrs)",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvestingData {
    pub risk: Option<RiskTolerance>,
    pub goal: Option<InvestmentGoal>,
    pub horizon: Option<Horizon>,
}

impl InvestingData {
    pub fn finalize(&self) -> Result<InvestmentPlan, FlowError> {
        Ok(InvestmentPlan {
            risk: self.risk.ok_or(FlowError::MissingField { field: "risk" })?,
            goal: self.goal.ok_or(FlowError::MissingField { field: "goal" })?,
            horizon: self
                .horizon
                .ok_or(FlowError::MissingField { field: "horizon" })?,
        })
    }
}

/// A complete risk/goal/horizon triple.
#[derive(Debug, Clone, Copy)]
pub struct InvestmentPlan {
    pub risk: RiskTolerance,
    pub goal: InvestmentGoal,
    pub horizon: Horizon,
}

impl InvestmentPlan {
    /// Three specific (risk, horizon) pairings; everything else gets the
    /// target-date-fund default.
    fn advice(&self) -> &'static str {
        match (self.risk, self.horizon) {
            (RiskTolerance::Low, Horizon::Short) => {
                "Recommendation: Focus on **high-yield savings** and **short-term bonds** \
                 to preserve capital."
            }
            (RiskTolerance::Medium, Horizon::Medium) => {
                "Recommendation: A balanced portfolio of **60% ETFs (Stocks)** and \
                 **40% Bonds/Cash** is suitable for steady growth."
            }
            (RiskTolerance::High, Horizon::Long) => {
                "Recommendation: You can afford to be aggressive. A portfolio of \
                 **90%+ broad market equity ETFs** is recommended for maximizing \
                 long-term gains."
            }
            _ => {
                "Recommendation: Given your specific risk and horizon, a diversified \
                 **Target Date Fund (TDF)** might be the simplest, most effective \
                 solution for hands-off management."
            }
        }
    }

    fn summary(&self) -> String {
        format!(
            "--- Investment Summary ---\n\
             Risk Tolerance: {}\n\
             Goal: {}\n\
             Horizon: {}\n\
             --------------------------\n",
            self.risk.label(),
            self.goal.label(),
            self.horizon.label(),
        )
    }
}

const RISK_LABELS: [&str; 3] = ["Low", "Medium", "High"];
const GOAL_LABELS: [&str; 3] = ["Retirement Planning", "Passive Income", "Car Purchase"];
const HORIZON_LABELS: [&str; 3] = [
    "Short Term (0-3 yrs)",
    "Medium Term (4-10 yrs)",
    "Long Term (10+ yrs)",
];

pub fn handle(state: &mut ConversationState, input: &str) -> Result<FlowReply, FlowError> {
    let lower = input.to_lowercase();
    let ConversationState { phase, data, .. } = state;
    let TopicData::Investing(data) = data else {
        return Err(FlowError::DataMismatch {
            topic: TopicId::Investing,
        });
    };

    match *phase {
        1 => {
            *phase = 2;
            Ok(FlowReply::Prompt(format!(
                "As your financial assistant, I recommend starting with a **low-cost ETF** \
                 for diversification. What is your **risk tolerance**? {}",
                options::options(&RISK_LABELS)
            )))
        }
        2 => match RiskTolerance::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please select a valid risk level: {}",
                options::options(&RISK_LABELS)
            ))),
            Some(risk) => {
                data.risk = Some(risk);
                *phase = 3;
                Ok(FlowReply::Prompt(format!(
                    "Understood, your risk tolerance is **{}**. What is your main \
                     **Investment Goal**? {}",
                    risk.label(),
                    options::options(&GOAL_LABELS)
                )))
            }
        },
        3 => match InvestmentGoal::classify(&lower) {
            None => Ok(FlowReply::Prompt(format!(
                "Please specify your goal: {}",
                options::options(&GOAL_LABELS)
            ))),
            Some(goal) => {
                data.goal = Some(goal);
                *phase = 4;
                Ok(FlowReply::Prompt(format!(
                    "Goal set for **{}**. What is your **Investment Horizon** \
                     (how long until you need the money)? {}",
                    goal.label(),
                    options::options(&HORIZON_LABELS)
                )))
            }
        },
        4 => match Horizon::classify(&lower) {
            None => Ok(FlowReply::Prompt(
                "Please specify your horizon. Try selecting one of the options below."
                    .to_string(),
            )),
            Some(horizon) => {
                data.horizon = Some(horizon);
                let plan = data.finalize()?;
                let closing = reset::closing_line(Some(TopicId::Investing), input);
                Ok(FlowReply::Finished(format!(
                    "Thank you! Here is your plan:\n\n{}\n{}\n\n{}",
                    plan.summary(),
                    plan.advice(),
                    closing
                )))
            }
        },
        other => Err(FlowError::PhaseOutOfRange {
            topic: TopicId::Investing,
            phase: other,
        }),
    }
}
