//! 운동 항목(엑서사이즈) 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Exercise;

/// 운동 항목 생성/수정 요청
///
/// 수정 시 `series`/`repetitions`는 0 이하를 "값 없음"으로 해석합니다.
/// 따라서 이 엔드포인트로는 카운트를 0으로 되돌릴 수 없습니다.
/// 원래 시스템의 동작을 그대로 유지한 정책입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRequest {
    pub exercise_name: Option<String>,

    #[serde(default)]
    pub series: i32,

    #[serde(default)]
    pub repetitions: i32,

    /// 소속 운동 id (생성 시 필수)
    pub workout_id: Option<String>,
}

/// 운동 항목 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponse {
    pub exercise_id: String,
    pub exercise_name: String,
    pub series: i32,
    pub repetitions: i32,
    pub workout_id: String,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            exercise_id: exercise.id_string().unwrap_or_default(),
            exercise_name: exercise.exercise_name,
            series: exercise.series,
            repetitions: exercise.repetitions,
            workout_id: exercise.workout_id.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_missing_counts_default_to_zero() {
        let json = r#"{"exerciseName":"Squat","workoutId":"507f1f77bcf86cd799439011"}"#;
        let request: ExerciseRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.series, 0);
        assert_eq!(request.repetitions, 0);
    }

    #[test]
    fn test_response_round_trip() {
        let workout_id = ObjectId::new();
        let mut exercise = Exercise::new("Squat".to_string(), 4, 8, workout_id);
        exercise.id = Some(ObjectId::new());

        let response = ExerciseResponse::from(exercise);

        assert_eq!(response.exercise_name, "Squat");
        assert_eq!(response.series, 4);
        assert_eq!(response.repetitions, 8);
        assert_eq!(response.workout_id, workout_id.to_hex());
    }
}
