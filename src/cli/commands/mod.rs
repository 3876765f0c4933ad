pub mod exercise;
pub mod link;
pub mod set;
pub mod workout;
