pub mod workout_repo;

pub use workout_repo::{WorkoutRepository, WorkoutStore};
