//! Heuristic resume parsing
//! Turns extracted resume text into a structured candidate profile

pub mod defaults;
pub mod entities;
pub mod experience;
pub mod patterns;
pub mod profile;
pub mod sections;
pub mod text;

pub use profile::{parse_candidate_profile, ParserLimits, ProfileParser};
