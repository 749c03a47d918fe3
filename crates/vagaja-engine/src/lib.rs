//! VagaJá scoring engine.
//!
//! Everything the recruiting assistant computes lives here: AI-backed CV
//! analysis and ranking, behavioral questionnaire scoring (Big Five, DISC,
//! situational judgment), selection pipeline weight checks, and candidate
//! profile persistence. The CLI in `vagaja-cli` is a thin shell over this
//! crate.

pub mod analysis;
pub mod behavioral;
pub mod error;
pub mod gemini;
pub mod locale;
pub mod models;
pub mod pipeline;
pub mod profile;
pub mod ranking;
