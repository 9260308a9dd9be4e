//! 운동 항목(엑서사이즈) 서비스
//!
//! 항목의 소유권은 소속 운동을 거쳐 판정합니다
//! (exercise → workout → user). 소유권이 맞지 않으면 404입니다.
//!
//! 수정 시 `series`/`repetitions`의 0 이하 값은 "값 없음"으로 해석되어
//! 기존 값을 유지합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::exercises::{ExerciseRequest, ExerciseResponse};
use crate::domain::entities::Exercise;
use crate::errors::errors::AppError;
use crate::repositories::exercises::ExerciseStore;
use crate::repositories::parse_object_id;
use crate::services::workouts::WorkoutService;
use crate::utils::string_utils::clean_optional_string;

/// 수정 요청을 항목에 반영합니다.
///
/// 비어 있는 이름과 0 이하의 `series`/`repetitions`는 "값 없음"으로
/// 해석하여 기존 값을 유지합니다.
fn apply_update(exercise: &mut Exercise, request: &ExerciseRequest) {
    if let Some(name) = clean_optional_string(request.exercise_name.as_deref()) {
        exercise.exercise_name = name;
    }
    if request.series > 0 {
        exercise.series = request.series;
    }
    if request.repetitions > 0 {
        exercise.repetitions = request.repetitions;
    }
}

/// 운동 항목 관리 서비스
pub struct ExerciseService {
    exercises: Arc<dyn ExerciseStore>,
    workouts: Arc<WorkoutService>,
}

impl ExerciseService {
    pub fn new(exercises: Arc<dyn ExerciseStore>, workouts: Arc<WorkoutService>) -> Self {
        Self { exercises, workouts }
    }

    /// 항목 ID로 엔티티를 조회하고 소속 운동의 소유권을 검사합니다.
    async fn require_owned_exercise(
        &self,
        principal: &AuthenticatedUser,
        id: &ObjectId,
    ) -> Result<Exercise, AppError> {
        let exercise = self.exercises
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("운동 항목을 찾을 수 없습니다".to_string()))?;

        // 소속 운동이 없거나 타인 소유면 항목도 404로 숨긴다
        self.workouts
            .require_owned_workout(principal, &exercise.workout_id)
            .await
            .map_err(|_| AppError::NotFound("운동 항목을 찾을 수 없습니다".to_string()))?;

        Ok(exercise)
    }

    /// 운동 항목 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름 또는 소속 운동 id 없음
    /// * `AppError::NotFound` - 소속 운동이 없거나 타인 소유
    pub async fn create_exercise(
        &self,
        principal: &AuthenticatedUser,
        request: ExerciseRequest,
    ) -> Result<ExerciseResponse, AppError> {
        let workout_id = request.workout_id
            .as_deref()
            .ok_or_else(|| AppError::ValidationError("소속 운동 id는 필수입니다".to_string()))?;
        let workout_id = parse_object_id(workout_id)?;

        self.workouts.require_owned_workout(principal, &workout_id).await?;

        let name = clean_optional_string(request.exercise_name.as_deref())
            .ok_or_else(|| AppError::ValidationError("운동 항목 이름은 필수입니다".to_string()))?;

        let exercise = Exercise::new(name, request.series, request.repetitions, workout_id);
        let created = self.exercises.create(exercise).await?;

        log::info!("운동 항목 생성 완료: {} ({})", created.exercise_name, principal.email);
        Ok(ExerciseResponse::from(created))
    }

    /// 특정 운동의 항목 목록 조회 (생성 순)
    pub async fn exercises_by_workout(
        &self,
        principal: &AuthenticatedUser,
        workout_id: &str,
    ) -> Result<Vec<ExerciseResponse>, AppError> {
        let workout_id = parse_object_id(workout_id)?;
        self.workouts.require_owned_workout(principal, &workout_id).await?;

        let exercises = self.exercises.find_by_workout_id(&workout_id).await?;
        Ok(exercises.into_iter().map(ExerciseResponse::from).collect())
    }

    /// 운동 항목 단건 조회
    pub async fn get_exercise(&self, principal: &AuthenticatedUser, id: &str) -> Result<ExerciseResponse, AppError> {
        let id = parse_object_id(id)?;
        let exercise = self.require_owned_exercise(principal, &id).await?;
        Ok(ExerciseResponse::from(exercise))
    }

    /// 운동 항목 부분 수정
    ///
    /// 비어 있는 이름과 0 이하의 카운트는 변경하지 않습니다. 소속 운동은
    /// 이 엔드포인트로 옮길 수 없습니다.
    pub async fn update_exercise(
        &self,
        principal: &AuthenticatedUser,
        id: &str,
        request: ExerciseRequest,
    ) -> Result<ExerciseResponse, AppError> {
        let id = parse_object_id(id)?;
        let mut exercise = self.require_owned_exercise(principal, &id).await?;

        apply_update(&mut exercise, &request);

        self.exercises.save(&exercise).await?;
        Ok(ExerciseResponse::from(exercise))
    }

    /// 운동 항목 삭제
    pub async fn delete_exercise(&self, principal: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let id = parse_object_id(id)?;
        let exercise = self.require_owned_exercise(principal, &id).await?;

        self.exercises.delete_by_id(&id).await?;
        log::info!("운동 항목 삭제 완료: {} ({})", exercise.exercise_name, principal.email);
        Ok(())
    }

    /// 전체 항목 목록 조회 (생성 순, 인증 불필요)
    pub async fn all_exercises(&self) -> Result<Vec<ExerciseResponse>, AppError> {
        let exercises = self.exercises.find_all().await?;
        Ok(exercises.into_iter().map(ExerciseResponse::from).collect())
    }
}
