pub mod rehearse;
pub mod schedule;
