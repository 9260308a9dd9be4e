pub mod exercise_repo;

pub use exercise_repo::{ExerciseRepository, ExerciseStore};
