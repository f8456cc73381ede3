//! # ETHOS Core Library
//!
//! Game-agnostic moral reasoning and affect projection for game
//! characters.
//!
//! Every agent gets a [`Psyche`] — emotions, personality, memory, and a
//! conscience — and the engine turns that state into two decision-usable
//! signals, grounded in cognitive science:
//!
//! - **4D affect projection** — 20 emotion channels collapsed onto
//!   valence/arousal/dominance/affiliation axes (Mehrabian & Russell's
//!   PAD model, 1974, extended with an affiliation axis), modulated by
//!   appraisal-style coping potential (Lazarus & Folkman, 1984).
//! - **Moral judgment** — a rule-based causation/intention/responsibility
//!   chain after Shultz & Schleifer's naive theory of moral reasoning,
//!   feeding a signed action cost, emotional feedback, bounded memory,
//!   and learned avoidance.
//! - **Group dynamics** — peer pressure, leader influence, dissent, and
//!   collective reputation binding individual consciences together.
//!
//! ## Performance Contract
//!
//! All operations are synchronous, allocation-light, and designed for
//! per-tick game use:
//! - 4D projection: < 5μs
//! - Scenario + judgment: < 10μs
//! - Full cost evaluation with a 6-member group: < 100μs

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod coping;
pub mod cost;
pub mod drift;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod group;
pub mod learning;
pub mod memory;
pub mod modulation;
pub mod profiles;
pub mod projection;
pub mod psyche;
pub mod rules;
pub mod scenario;
pub mod types;

pub use config::EthosConfig;
pub use engine::{MoralEngine, StateTrace};
pub use error::EthosError;
pub use psyche::Psyche;
pub use types::*;
