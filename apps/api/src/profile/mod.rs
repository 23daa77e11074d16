// Profile strength: deterministic completeness scoring over a profile
// snapshot. The rules are pure; the store assembles the snapshot from the
// externally owned tables.

pub mod handlers;
pub mod store;
pub mod strength;
