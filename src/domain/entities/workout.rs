//! 운동(워크아웃) 엔티티
//!
//! MongoDB `workouts` 컬렉션에 저장됩니다. 정확히 한 명의 사용자에게
//! 속하며, 소유권 검사는 `user_id`로 소유자를 조회한 뒤 이메일을
//! 비교하는 방식으로 이루어집니다.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 운동 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub workout_name: String,
    /// 운동 시작일 (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// 소유 사용자
    pub user_id: ObjectId,
}

impl Workout {
    pub fn new(workout_name: String, start_date: Option<NaiveDate>, user_id: ObjectId) -> Self {
        Self {
            id: None,
            workout_name,
            start_date,
            user_id,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
