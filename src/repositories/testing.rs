//! 서비스 테스트용 인메모리 저장소 구현
//!
//! MongoDB/Redis 없이 서비스 계층의 동작을 검증하기 위한 저장소
//! 구현입니다. 유니크 이메일 제약과 생성 순 목록처럼 서비스가 의존하는
//! 저장소 계약을 그대로 흉내 냅니다. TTL은 무시합니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::caching::SessionStore;
use crate::domain::entities::{Exercise, User, Workout};
use crate::errors::errors::AppError;

use super::exercises::ExerciseStore;
use super::users::UserStore;
use super::workouts::WorkoutStore;

/// 인메모리 사용자 저장소
///
/// `create`는 유니크 인덱스와 동일하게 중복 이메일을 `ConflictError`로
/// 거부합니다.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// ID가 채워진 사용자를 직접 삽입합니다 (테스트 픽스처용).
    pub fn seed(&self, mut user: User) -> User {
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        self.users.lock().unwrap().push(user.clone());
        user
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        Ok(())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.email != email);
        Ok(users.len() < before)
    }

    async fn invalidate_cache(&self, _email: &str) {}
}

/// 인메모리 운동 저장소 (삽입 순서 = 생성 순서)
#[derive(Default)]
pub struct InMemoryWorkoutStore {
    workouts: Mutex<Vec<Workout>>,
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Workout>, AppError> {
        Ok(self.workouts.lock().unwrap().iter().find(|w| w.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_user_id(&self, user_id: &ObjectId) -> Result<Vec<Workout>, AppError> {
        Ok(self.workouts.lock().unwrap().iter().filter(|w| &w.user_id == user_id).cloned().collect())
    }

    async fn create(&self, mut workout: Workout) -> Result<Workout, AppError> {
        workout.id = Some(ObjectId::new());
        self.workouts.lock().unwrap().push(workout.clone());
        Ok(workout)
    }

    async fn save(&self, workout: &Workout) -> Result<(), AppError> {
        let mut workouts = self.workouts.lock().unwrap();
        if let Some(slot) = workouts.iter_mut().find(|w| w.id == workout.id) {
            *slot = workout.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut workouts = self.workouts.lock().unwrap();
        let before = workouts.len();
        workouts.retain(|w| w.id.as_ref() != Some(id));
        Ok(workouts.len() < before)
    }

    async fn delete_by_user_id(&self, user_id: &ObjectId) -> Result<u64, AppError> {
        let mut workouts = self.workouts.lock().unwrap();
        let before = workouts.len();
        workouts.retain(|w| &w.user_id != user_id);
        Ok((before - workouts.len()) as u64)
    }

    async fn count_all(&self) -> Result<u64, AppError> {
        Ok(self.workouts.lock().unwrap().len() as u64)
    }

    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Workout>, AppError> {
        Ok(self.workouts
            .lock()
            .unwrap()
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// 인메모리 운동 항목 저장소
#[derive(Default)]
pub struct InMemoryExerciseStore {
    exercises: Mutex<Vec<Exercise>>,
}

#[async_trait]
impl ExerciseStore for InMemoryExerciseStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Exercise>, AppError> {
        Ok(self.exercises.lock().unwrap().iter().find(|e| e.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_workout_id(&self, workout_id: &ObjectId) -> Result<Vec<Exercise>, AppError> {
        Ok(self.exercises
            .lock()
            .unwrap()
            .iter()
            .filter(|e| &e.workout_id == workout_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Exercise>, AppError> {
        Ok(self.exercises.lock().unwrap().clone())
    }

    async fn create(&self, mut exercise: Exercise) -> Result<Exercise, AppError> {
        exercise.id = Some(ObjectId::new());
        self.exercises.lock().unwrap().push(exercise.clone());
        Ok(exercise)
    }

    async fn save(&self, exercise: &Exercise) -> Result<(), AppError> {
        let mut exercises = self.exercises.lock().unwrap();
        if let Some(slot) = exercises.iter_mut().find(|e| e.id == exercise.id) {
            *slot = exercise.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut exercises = self.exercises.lock().unwrap();
        let before = exercises.len();
        exercises.retain(|e| e.id.as_ref() != Some(id));
        Ok(exercises.len() < before)
    }

    async fn delete_by_workout_id(&self, workout_id: &ObjectId) -> Result<u64, AppError> {
        let mut exercises = self.exercises.lock().unwrap();
        let before = exercises.len();
        exercises.retain(|e| &e.workout_id != workout_id);
        Ok((before - exercises.len()) as u64)
    }
}

/// 인메모리 세션 저장소 (TTL 무시)
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_value_ex(&self, key: &str, value: &str, _ttl_secs: u64) -> Result<(), AppError> {
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> Result<(), AppError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
