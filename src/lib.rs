//! Flowbot — scripted multi-turn conversation server.
//!
//! A user picks a topic (health check-up, goal setting, investing tips,
//! fitness planning, idea generation, reminders, riddles, NLP explainer)
//! and the engine walks them through a fixed question sequence, validating
//! each answer and finishing with a computed summary and recommendation.

pub mod classify;
pub mod config;
pub mod error;
pub mod flows;
pub mod options;
pub mod reset;
pub mod router;
pub mod server;
pub mod state;
