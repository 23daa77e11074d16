// Skill intelligence: ranking and aggregation projections over externally
// scored gaps, tokens, and upgrade recommendations.

pub mod handlers;
pub mod ranking;
pub mod store;
