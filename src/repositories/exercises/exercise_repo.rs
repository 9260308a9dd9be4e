//! 운동 항목(엑서사이즈) 리포지토리
//!
//! MongoDB `exercises` 컬렉션에 대한 CRUD를 담당합니다.
//! 운동(Workout) 삭제 시 소속 항목 전체를 연쇄 삭제하는 경로도
//! 이 리포지토리를 통합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::Exercise;
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "exercises";

/// 운동 항목 저장소 추상화
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// ID로 운동 항목 조회
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Exercise>, AppError>;

    /// 특정 운동의 모든 항목 조회 (생성 순)
    async fn find_by_workout_id(&self, workout_id: &ObjectId) -> Result<Vec<Exercise>, AppError>;

    /// 전체 항목 조회 (생성 순)
    async fn find_all(&self) -> Result<Vec<Exercise>, AppError>;

    /// 새 운동 항목 저장
    async fn create(&self, exercise: Exercise) -> Result<Exercise, AppError>;

    /// 기존 운동 항목 갱신
    async fn save(&self, exercise: &Exercise) -> Result<(), AppError>;

    /// ID로 운동 항목 삭제. 삭제된 문서가 없으면 `false`.
    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, AppError>;

    /// 특정 운동의 항목 전체 삭제 (연쇄 삭제용)
    async fn delete_by_workout_id(&self, workout_id: &ObjectId) -> Result<u64, AppError>;
}

/// 운동 항목 데이터 액세스 리포지토리
pub struct ExerciseRepository {
    db: Arc<Database>,
}

impl ExerciseRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Exercise> {
        self.db.collection::<Exercise>(COLLECTION_NAME)
    }
}

#[async_trait]
impl ExerciseStore for ExerciseRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Exercise>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_workout_id(&self, workout_id: &ObjectId) -> Result<Vec<Exercise>, AppError> {
        self.collection()
            .find(doc! { "workout_id": workout_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Exercise>, AppError> {
        self.collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut exercise: Exercise) -> Result<Exercise, AppError> {
        let result = self.collection()
            .insert_one(&exercise)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        exercise.id = result.inserted_id.as_object_id();
        Ok(exercise)
    }

    async fn save(&self, exercise: &Exercise) -> Result<(), AppError> {
        let id = exercise.id
            .ok_or_else(|| AppError::InternalError("ID 없는 운동 항목은 갱신할 수 없습니다".to_string()))?;

        self.collection()
            .replace_one(doc! { "_id": id }, exercise)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_by_workout_id(&self, workout_id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection()
            .delete_many(doc! { "workout_id": workout_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
