//! Exercise HTTP Handlers
//!
//! 운동 항목(엑서사이즈) CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 전체 목록 조회를 제외한 모든 엔드포인트는 소속 운동의 소유권을
//! 기준으로 접근을 제한합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::exercises::ExerciseRequest;
use crate::errors::errors::AppError;
use crate::services::exercises::ExerciseService;

/// 운동 항목 생성 핸들러
///
/// # Endpoint
/// `POST /exercises`
#[post("")]
pub async fn create_exercise(
    user: AuthenticatedUser,
    payload: web::Json<ExerciseRequest>,
    exercises: web::Data<ExerciseService>,
) -> Result<HttpResponse, AppError> {
    let response = exercises.create_exercise(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 특정 운동의 항목 목록 조회 핸들러
///
/// # Endpoint
/// `GET /exercises/workout/{workoutId}`
#[get("/workout/{workout_id}")]
pub async fn exercises_by_workout(
    user: AuthenticatedUser,
    path: web::Path<String>,
    exercises: web::Data<ExerciseService>,
) -> Result<HttpResponse, AppError> {
    let response = exercises
        .exercises_by_workout(&user, &path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 전체 항목 목록 조회 핸들러 (인증 불필요)
///
/// # Endpoint
/// `GET /exercises/all`
#[get("/all")]
pub async fn all_exercises(
    exercises: web::Data<ExerciseService>,
) -> Result<HttpResponse, AppError> {
    let response = exercises.all_exercises().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 운동 항목 단건 조회 핸들러
///
/// # Endpoint
/// `GET /exercises/{id}`
#[get("/{id}")]
pub async fn get_exercise(
    user: AuthenticatedUser,
    path: web::Path<String>,
    exercises: web::Data<ExerciseService>,
) -> Result<HttpResponse, AppError> {
    let response = exercises.get_exercise(&user, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 운동 항목 수정 핸들러
///
/// `series`/`repetitions`의 0 이하 값은 "값 없음"으로 해석되어 기존
/// 값을 유지합니다.
///
/// # Endpoint
/// `PUT /exercises/{id}`
#[put("/{id}")]
pub async fn update_exercise(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<ExerciseRequest>,
    exercises: web::Data<ExerciseService>,
) -> Result<HttpResponse, AppError> {
    let response = exercises
        .update_exercise(&user, &path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 운동 항목 삭제 핸들러
///
/// # Endpoint
/// `DELETE /exercises/{id}`
#[delete("/{id}")]
pub async fn delete_exercise(
    user: AuthenticatedUser,
    path: web::Path<String>,
    exercises: web::Data<ExerciseService>,
) -> Result<HttpResponse, AppError> {
    exercises.delete_exercise(&user, &path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
