pub mod candidate;
pub mod criteria;
