//! 운동(워크아웃) 요청/응답 DTO

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{User, Workout};

/// 운동 생성/수정 요청
///
/// 생성 시 `workout_name`은 필수이며, 수정 시에는 값이 있고 공백이
/// 아닌 필드만 반영됩니다. `start_date`는 값이 있을 때만 반영됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    pub workout_name: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// 운동 응답
///
/// 소유자 정보(`user_id`, `username`)를 함께 내려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub workout_id: String,
    pub workout_name: String,
    pub start_date: Option<NaiveDate>,
    pub user_id: String,
    pub username: String,
}

impl WorkoutResponse {
    /// 엔티티와 소유자 정보를 합쳐 응답 DTO를 만듭니다.
    pub fn from_entity(workout: Workout, owner: &User) -> Self {
        Self {
            workout_id: workout.id_string().unwrap_or_default(),
            workout_name: workout.workout_name,
            start_date: workout.start_date,
            user_id: owner.id_string().unwrap_or_default(),
            username: owner.username.clone(),
        }
    }
}
