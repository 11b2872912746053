// Resume question answering: retrieval-grounded answers, or a skill-overlap
// verdict when the question asks whether the candidate suits a role.

pub mod classifier;
pub mod engine;
pub mod prompts;
pub mod skills;

pub use engine::{Answer, QaEngine};
