pub mod angles;
pub mod categories;
pub mod flags;
pub mod probabilities;
pub mod profile;
