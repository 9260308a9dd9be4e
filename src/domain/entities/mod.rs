pub mod user;
pub mod workout;
pub mod exercise;

pub use user::User;
pub use workout::Workout;
pub use exercise::Exercise;
