//! 운동(워크아웃) 리포지토리
//!
//! MongoDB `workouts` 컬렉션에 대한 CRUD와 페이지네이션 조회를 담당합니다.
//! 목록 조회는 `_id` 오름차순으로 정렬합니다. ObjectId는 생성 시각 순으로
//! 증가하므로 결과는 생성 순서와 일치합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::Workout;
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "workouts";

/// 운동 저장소 추상화
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// ID로 운동 조회
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Workout>, AppError>;

    /// 특정 사용자의 모든 운동 조회 (생성 순)
    async fn find_by_user_id(&self, user_id: &ObjectId) -> Result<Vec<Workout>, AppError>;

    /// 새 운동 저장
    async fn create(&self, workout: Workout) -> Result<Workout, AppError>;

    /// 기존 운동 갱신
    async fn save(&self, workout: &Workout) -> Result<(), AppError>;

    /// ID로 운동 삭제. 삭제된 문서가 없으면 `false`.
    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, AppError>;

    /// 특정 사용자의 모든 운동 삭제 (사용자 삭제 시 연쇄 삭제용)
    async fn delete_by_user_id(&self, user_id: &ObjectId) -> Result<u64, AppError>;

    /// 전체 운동 수
    async fn count_all(&self) -> Result<u64, AppError>;

    /// 전체 운동 페이지 조회 (생성 순)
    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Workout>, AppError>;
}

/// 운동 데이터 액세스 리포지토리
pub struct WorkoutRepository {
    db: Arc<Database>,
}

impl WorkoutRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Workout> {
        self.db.collection::<Workout>(COLLECTION_NAME)
    }
}

#[async_trait]
impl WorkoutStore for WorkoutRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Workout>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_user_id(&self, user_id: &ObjectId) -> Result<Vec<Workout>, AppError> {
        self.collection()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut workout: Workout) -> Result<Workout, AppError> {
        let result = self.collection()
            .insert_one(&workout)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        workout.id = result.inserted_id.as_object_id();
        Ok(workout)
    }

    async fn save(&self, workout: &Workout) -> Result<(), AppError> {
        let id = workout.id
            .ok_or_else(|| AppError::InternalError("ID 없는 운동은 갱신할 수 없습니다".to_string()))?;

        self.collection()
            .replace_one(doc! { "_id": id }, workout)
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

    async fn delete_by_user_id(&self, user_id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection()
            .delete_many(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    async fn count_all(&self) -> Result<u64, AppError> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 운동 페이지 조회 (`_id` 오름차순)
    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Workout>, AppError> {
        self.collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
