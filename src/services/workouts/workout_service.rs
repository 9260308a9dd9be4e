//! 운동(워크아웃) 서비스
//!
//! 인증 주체 소유의 운동에 대한 CRUD를 담당합니다. 소유권이 맞지 않는
//! 리소스는 존재 여부를 숨기기 위해 404로 응답합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::workouts::{WorkoutRequest, WorkoutResponse};
use crate::domain::dto::{PageQuery, PageResponse};
use crate::domain::entities::{User, Workout};
use crate::errors::errors::AppError;
use crate::repositories::exercises::ExerciseStore;
use crate::repositories::parse_object_id;
use crate::repositories::users::UserStore;
use crate::repositories::workouts::WorkoutStore;
use crate::services::auth::require_owner;
use crate::utils::string_utils::clean_optional_string;

/// 운동 관리 서비스
pub struct WorkoutService {
    workouts: Arc<dyn WorkoutStore>,
    exercises: Arc<dyn ExerciseStore>,
    users: Arc<dyn UserStore>,
}

impl WorkoutService {
    pub fn new(
        workouts: Arc<dyn WorkoutStore>,
        exercises: Arc<dyn ExerciseStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            workouts,
            exercises,
            users,
        }
    }

    async fn require_principal_user(&self, principal: &AuthenticatedUser) -> Result<User, AppError> {
        self.users
            .find_by_email(&principal.email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", principal.email)))
    }

    /// 운동 ID로 엔티티와 소유자를 함께 조회하고 소유권을 검사합니다.
    ///
    /// 운동이 없거나 소유자가 다르면 동일하게 `NotFound`입니다.
    pub(crate) async fn require_owned_workout(
        &self,
        principal: &AuthenticatedUser,
        id: &ObjectId,
    ) -> Result<(Workout, User), AppError> {
        let not_found = || AppError::NotFound("운동을 찾을 수 없습니다".to_string());

        let workout = self.workouts.find_by_id(id).await?.ok_or_else(not_found)?;
        let owner = self.users
            .find_by_id(&workout.user_id)
            .await?
            .ok_or_else(not_found)?;

        require_owner(principal, &owner.email, "운동")?;
        Ok((workout, owner))
    }

    /// 운동 생성
    ///
    /// 이름은 필수이며, 시작일은 선택입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름 없음
    pub async fn create_workout(
        &self,
        principal: &AuthenticatedUser,
        request: WorkoutRequest,
    ) -> Result<WorkoutResponse, AppError> {
        let owner = self.require_principal_user(principal).await?;
        let owner_id = owner.id
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        let name = clean_optional_string(request.workout_name.as_deref())
            .ok_or_else(|| AppError::ValidationError("운동 이름은 필수입니다".to_string()))?;

        let workout = Workout::new(name, request.start_date, owner_id);
        let created = self.workouts.create(workout).await?;

        log::info!("운동 생성 완료: {} ({})", created.workout_name, owner.email);
        Ok(WorkoutResponse::from_entity(created, &owner))
    }

    /// 내 운동 목록 조회 (생성 순)
    pub async fn my_workouts(&self, principal: &AuthenticatedUser) -> Result<Vec<WorkoutResponse>, AppError> {
        let owner = self.require_principal_user(principal).await?;
        let owner_id = owner.id
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        let workouts = self.workouts.find_by_user_id(&owner_id).await?;
        Ok(workouts
            .into_iter()
            .map(|w| WorkoutResponse::from_entity(w, &owner))
            .collect())
    }

    /// 운동 단건 조회
    pub async fn get_workout(&self, principal: &AuthenticatedUser, id: &str) -> Result<WorkoutResponse, AppError> {
        let id = parse_object_id(id)?;
        let (workout, owner) = self.require_owned_workout(principal, &id).await?;
        Ok(WorkoutResponse::from_entity(workout, &owner))
    }

    /// 운동 부분 수정
    ///
    /// 비어 있는 이름과 누락된 시작일은 변경하지 않습니다.
    pub async fn update_workout(
        &self,
        principal: &AuthenticatedUser,
        id: &str,
        request: WorkoutRequest,
    ) -> Result<WorkoutResponse, AppError> {
        let id = parse_object_id(id)?;
        let (mut workout, owner) = self.require_owned_workout(principal, &id).await?;

        if let Some(name) = clean_optional_string(request.workout_name.as_deref()) {
            workout.workout_name = name;
        }
        if let Some(start_date) = request.start_date {
            workout.start_date = Some(start_date);
        }

        self.workouts.save(&workout).await?;
        Ok(WorkoutResponse::from_entity(workout, &owner))
    }

    /// 운동 삭제
    ///
    /// 소속 운동 항목을 모두 연쇄 삭제합니다.
    pub async fn delete_workout(&self, principal: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let id = parse_object_id(id)?;
        let (workout, owner) = self.require_owned_workout(principal, &id).await?;

        let removed = self.exercises.delete_by_workout_id(&id).await?;
        self.workouts.delete_by_id(&id).await?;

        log::info!("운동 삭제 완료: {} ({}, 항목 {}건 연쇄 삭제)", workout.workout_name, owner.email, removed);
        Ok(())
    }

    /// 전체 운동 페이지 조회 (생성 순)
    ///
    /// 소유자와 무관하게 전체를 대상으로 하며, 각 항목에 소유자 정보를
    /// 채워 반환합니다.
    pub async fn all_workouts(&self, query: &PageQuery) -> Result<PageResponse<WorkoutResponse>, AppError> {
        let page = query.page();
        let size = query.size();

        let total = self.workouts.count_all().await?;
        // 페이지 번호는 호출자 입력이므로 곱셈 오버플로를 포화로 처리
        let skip = page.saturating_mul(size as u64);
        let workouts = self.workouts.find_page(skip, size).await?;

        let mut content = Vec::with_capacity(workouts.len());
        for workout in workouts {
            let owner = self.users
                .find_by_id(&workout.user_id)
                .await?
                .ok_or_else(|| AppError::InternalError("운동의 소유자 레코드가 없습니다".to_string()))?;
            content.push(WorkoutResponse::from_entity(workout, &owner));
        }

        Ok(PageResponse::new(content, page, size, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::entities::Exercise;
    use crate::repositories::testing::{
        InMemoryExerciseStore, InMemoryUserStore, InMemoryWorkoutStore,
    };

    struct Fixture {
        service: WorkoutService,
        users: Arc<InMemoryUserStore>,
        exercises: Arc<InMemoryExerciseStore>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserStore::default());
        let exercises = Arc::new(InMemoryExerciseStore::default());

        let service = WorkoutService::new(
            Arc::new(InMemoryWorkoutStore::default()),
            exercises.clone(),
            users.clone(),
        );

        Fixture {
            service,
            users,
            exercises,
        }
    }

    fn seed_user(f: &Fixture, email: &str) -> AuthenticatedUser {
        f.users.seed(User::new("joao".to_string(), email.to_string(), "hash".to_string()));
        AuthenticatedUser { email: email.to_string() }
    }

    fn named(name: &str) -> WorkoutRequest {
        WorkoutRequest {
            workout_name: Some(name.to_string()),
            start_date: None,
        }
    }

    #[actix_web::test]
    async fn test_delete_workout_cascades_exercises() {
        let f = fixture();
        let principal = seed_user(&f, "a@x.com");

        let created = f.service.create_workout(&principal, named("Leg Day")).await.unwrap();
        let workout_id = ObjectId::parse_str(&created.workout_id).unwrap();
        f.exercises
            .create(Exercise::new("Squat".to_string(), 4, 8, workout_id))
            .await
            .unwrap();
        f.exercises
            .create(Exercise::new("Lunge".to_string(), 3, 12, workout_id))
            .await
            .unwrap();

        f.service.delete_workout(&principal, &created.workout_id).await.unwrap();

        assert!(f.exercises.find_by_workout_id(&workout_id).await.unwrap().is_empty());
        assert!(matches!(
            f.service.get_workout(&principal, &created.workout_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_other_users_workout_is_hidden() {
        let f = fixture();
        let owner = seed_user(&f, "a@x.com");
        let intruder = seed_user(&f, "b@x.com");

        let created = f.service.create_workout(&owner, named("Leg Day")).await.unwrap();

        assert!(matches!(
            f.service.get_workout(&intruder, &created.workout_id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            f.service.delete_workout(&intruder, &created.workout_id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(f.service.get_workout(&owner, &created.workout_id).await.is_ok());
    }

    #[actix_web::test]
    async fn test_all_workouts_with_extreme_page_number() {
        let f = fixture();
        let principal = seed_user(&f, "a@x.com");
        f.service.create_workout(&principal, named("Leg Day")).await.unwrap();

        let query = PageQuery { page: Some(u64::MAX), size: Some(20) };
        let page = f.service.all_workouts(&query).await.unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 1);
    }
}
