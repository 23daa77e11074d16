pub mod profile;
pub mod skills;
