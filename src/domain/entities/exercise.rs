//! 운동 항목(엑서사이즈) 엔티티
//!
//! MongoDB `exercises` 컬렉션에 저장됩니다. 정확히 하나의 운동(Workout)에
//! 속하며, 소유권은 workout → user → email 순으로 전이적으로 해석됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 운동 항목 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub exercise_name: String,
    /// 세트 수
    pub series: i32,
    /// 반복 횟수
    pub repetitions: i32,
    /// 소속 운동
    pub workout_id: ObjectId,
}

impl Exercise {
    pub fn new(exercise_name: String, series: i32, repetitions: i32, workout_id: ObjectId) -> Self {
        Self {
            id: None,
            exercise_name,
            series,
            repetitions,
            workout_id,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
