//! 사용자 서비스
//!
//! 회원 가입/조회/수정/탈퇴와 비밀번호 관리를 담당하는 비즈니스 로직
//! 계층입니다. 비밀번호는 bcrypt로 해싱하며, 자격 증명에 영향을 주는
//! 변경(탈퇴, 비밀번호/이메일 변경)은 활성 세션을 함께 무효화합니다.

use std::sync::Arc;

use crate::domain::dto::users::{CreateUserRequest, PasswordUpdateRequest, UserResponse, UserUpdateRequest};
use crate::domain::entities::User;
use crate::errors::errors::{AppError, ErrorContext};
use crate::repositories::exercises::ExerciseStore;
use crate::repositories::users::UserStore;
use crate::repositories::workouts::WorkoutStore;
use crate::services::auth::SessionCacheService;
use crate::utils::string_utils::clean_optional_string;

/// 사용자 관리 서비스
pub struct UserService {
    users: Arc<dyn UserStore>,
    workouts: Arc<dyn WorkoutStore>,
    exercises: Arc<dyn ExerciseStore>,
    sessions: Arc<SessionCacheService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        workouts: Arc<dyn WorkoutStore>,
        exercises: Arc<dyn ExerciseStore>,
        sessions: Arc<SessionCacheService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            workouts,
            exercises,
            sessions,
            bcrypt_cost,
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")
    }

    fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash).context("비밀번호 검증 실패")
    }

    /// 회원 가입
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        if self.users.exists_by_email(&request.email).await? {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let password_hash = self.hash_password(&request.password)?;
        let user = User::new(request.username, request.email, password_hash);
        let created = self.users.create(user).await?;

        log::info!("사용자 생성 완료: {}", created.email);
        Ok(UserResponse::from(created))
    }

    /// 이메일로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 없음
    pub async fn get_user(&self, email: &str) -> Result<UserResponse, AppError> {
        let user = self.require_user(email).await?;
        Ok(UserResponse::from(user))
    }

    /// 자격 증명 검사 (로그인용)
    ///
    /// 사용자가 없거나 비밀번호가 틀리면 동일한 401 에러를 반환합니다.
    /// 가입된 이메일인지 여부가 응답으로 드러나지 않게 하기 위함입니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let invalid = || AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string());

        let user = self.users.find_by_email(email).await?.ok_or_else(invalid)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        Ok(user)
    }

    /// 회원 정보 부분 수정
    ///
    /// 비어 있거나 누락된 필드는 변경하지 않습니다. 이메일이 변경되면
    /// 이전 이메일의 캐시와 세션을 무효화합니다 (재로그인 필요).
    /// 비밀번호가 변경되면 세션을 무효화합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 없음
    /// * `AppError::ConflictError` - 변경하려는 이메일이 이미 사용 중
    pub async fn update_user(&self, current_email: &str, request: UserUpdateRequest) -> Result<UserResponse, AppError> {
        let mut user = self.require_user(current_email).await?;
        let previous_email = user.email.clone();

        if let Some(username) = clean_optional_string(request.username.as_deref()) {
            user.username = username;
        }

        let mut credentials_changed = false;

        if let Some(new_email) = clean_optional_string(request.email.as_deref()) {
            if new_email != user.email {
                if self.users.exists_by_email(&new_email).await? {
                    return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
                }
                user.email = new_email;
                credentials_changed = true;
            }
        }

        if let Some(new_password) = clean_optional_string(request.new_password.as_deref()) {
            user.password_hash = self.hash_password(&new_password)?;
            credentials_changed = true;
        }

        user.touch();
        self.users.save(&user).await?;

        if credentials_changed {
            // 토큰 subject가 이전 이메일이므로 기존 세션은 더 이상 유효하지 않다
            self.users.invalidate_cache(&previous_email).await;
            self.sessions.invalidate(&previous_email).await?;
            log::info!("자격 증명 변경으로 세션 무효화: {}", previous_email);
        }

        Ok(UserResponse::from(user))
    }

    /// 비밀번호 변경
    ///
    /// 현재 비밀번호 확인 후 새 비밀번호로 교체하고 세션을 무효화합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 없음
    /// * `AppError::ConflictError` - 현재 비밀번호 불일치
    pub async fn update_password(&self, email: &str, request: PasswordUpdateRequest) -> Result<(), AppError> {
        let mut user = self.require_user(email).await?;

        if !Self::verify_password(&request.old_password, &user.password_hash)? {
            return Err(AppError::ConflictError("현재 비밀번호가 일치하지 않습니다".to_string()));
        }

        user.password_hash = self.hash_password(&request.new_password)?;
        user.touch();
        self.users.save(&user).await?;

        self.sessions.invalidate(email).await?;
        log::info!("비밀번호 변경 완료: {}", email);
        Ok(())
    }

    /// 회원 탈퇴
    ///
    /// 소유한 운동과 그 하위 항목을 모두 연쇄 삭제한 뒤 사용자를
    /// 삭제하고 세션을 무효화합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 없음
    pub async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        let user = self.require_user(email).await?;
        let user_id = user.id
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        for workout in self.workouts.find_by_user_id(&user_id).await? {
            if let Some(workout_id) = workout.id {
                self.exercises.delete_by_workout_id(&workout_id).await?;
            }
        }
        let removed_workouts = self.workouts.delete_by_user_id(&user_id).await?;

        self.users.delete_by_email(email).await?;
        self.sessions.invalidate(email).await?;

        log::info!("사용자 삭제 완료: {} (운동 {}건 연쇄 삭제)", email, removed_workouts);
        Ok(())
    }

    /// 이메일로 사용자 엔티티를 조회합니다. 없으면 `NotFound`.
    pub async fn require_user(&self, email: &str) -> Result<User, AppError> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mongodb::bson::oid::ObjectId;

    use crate::domain::entities::{Exercise, Workout};
    use crate::repositories::testing::{
        InMemoryExerciseStore, InMemorySessionStore, InMemoryUserStore, InMemoryWorkoutStore,
    };

    struct Fixture {
        service: UserService,
        workouts: Arc<InMemoryWorkoutStore>,
        exercises: Arc<InMemoryExerciseStore>,
        sessions: Arc<SessionCacheService>,
    }

    fn fixture() -> Fixture {
        let workouts = Arc::new(InMemoryWorkoutStore::default());
        let exercises = Arc::new(InMemoryExerciseStore::default());
        let sessions = Arc::new(SessionCacheService::new(
            Arc::new(InMemorySessionStore::default()),
            3600,
        ));

        let service = UserService::new(
            Arc::new(InMemoryUserStore::default()),
            workouts.clone(),
            exercises.clone(),
            sessions.clone(),
            4,
        );

        Fixture {
            service,
            workouts,
            exercises,
            sessions,
        }
    }

    fn signup_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: "joao".to_string(),
            email: email.to_string(),
            password: "Password@123".to_string(),
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        // 비용 4는 테스트 전용 최저값
        let hash = bcrypt::hash("password123", 4).unwrap();

        assert!(UserService::verify_password("password123", &hash).unwrap());
        assert!(!UserService::verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let first = bcrypt::hash("password123", 4).unwrap();
        let second = bcrypt::hash("password123", 4).unwrap();

        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn test_duplicate_email_yields_conflict() {
        let f = fixture();

        let first = f.service.create_user(signup_request("a@x.com")).await;
        let second = f.service.create_user(signup_request("a@x.com")).await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_authenticate_rejects_wrong_password() {
        let f = fixture();
        f.service.create_user(signup_request("a@x.com")).await.unwrap();

        assert!(f.service.authenticate("a@x.com", "Password@123").await.is_ok());
        assert!(matches!(
            f.service.authenticate("a@x.com", "wrong-password").await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_user_cascades_workouts_and_exercises() {
        let f = fixture();
        let created = f.service.create_user(signup_request("a@x.com")).await.unwrap();
        let user_id = ObjectId::parse_str(&created.user_id).unwrap();

        let workout = f.workouts
            .create(Workout::new("Leg Day".to_string(), None, user_id))
            .await
            .unwrap();
        let workout_id = workout.id.unwrap();
        f.exercises
            .create(Exercise::new("Squat".to_string(), 4, 8, workout_id))
            .await
            .unwrap();

        f.service.delete_user("a@x.com").await.unwrap();

        assert!(f.workouts.find_by_user_id(&user_id).await.unwrap().is_empty());
        assert!(f.exercises.find_by_workout_id(&workout_id).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_password_change_invalidates_session() {
        let f = fixture();
        f.service.create_user(signup_request("a@x.com")).await.unwrap();
        f.sessions.record_login("a@x.com", "token-a").await.unwrap();

        let request = PasswordUpdateRequest {
            old_password: "Password@123".to_string(),
            new_password: "NewPassword@123".to_string(),
        };
        f.service.update_password("a@x.com", request).await.unwrap();

        assert!(!f.sessions.is_live("a@x.com", "token-a").await.unwrap());
    }

    #[actix_web::test]
    async fn test_wrong_current_password_yields_conflict() {
        let f = fixture();
        f.service.create_user(signup_request("a@x.com")).await.unwrap();

        let request = PasswordUpdateRequest {
            old_password: "wrong-password".to_string(),
            new_password: "NewPassword@123".to_string(),
        };
        let result = f.service.update_password("a@x.com", request).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }
}
