//! Workout HTTP Handlers
//!
//! 운동(워크아웃) CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 전체 목록 조회를 제외한 모든 엔드포인트는 인증 주체 소유의 운동만
//! 다룹니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::workouts::WorkoutRequest;
use crate::domain::dto::PageQuery;
use crate::errors::errors::AppError;
use crate::services::workouts::WorkoutService;

/// 운동 생성 핸들러
///
/// # Endpoint
/// `POST /workouts`
#[post("")]
pub async fn create_workout(
    user: AuthenticatedUser,
    payload: web::Json<WorkoutRequest>,
    workouts: web::Data<WorkoutService>,
) -> Result<HttpResponse, AppError> {
    let response = workouts.create_workout(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 내 운동 목록 조회 핸들러
///
/// # Endpoint
/// `GET /workouts/my-workouts`
#[get("/my-workouts")]
pub async fn my_workouts(
    user: AuthenticatedUser,
    workouts: web::Data<WorkoutService>,
) -> Result<HttpResponse, AppError> {
    let response = workouts.my_workouts(&user).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 전체 운동 페이지 조회 핸들러
///
/// # Endpoint
/// `GET /workouts/all?page=0&size=20`
#[get("/all")]
pub async fn all_workouts(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    workouts: web::Data<WorkoutService>,
) -> Result<HttpResponse, AppError> {
    let response = workouts.all_workouts(&query).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 운동 단건 조회 핸들러
///
/// # Endpoint
/// `GET /workouts/{id}`
#[get("/{id}")]
pub async fn get_workout(
    user: AuthenticatedUser,
    path: web::Path<String>,
    workouts: web::Data<WorkoutService>,
) -> Result<HttpResponse, AppError> {
    let response = workouts.get_workout(&user, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 운동 수정 핸들러
///
/// # Endpoint
/// `PUT /workouts/{id}`
#[put("/{id}")]
pub async fn update_workout(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<WorkoutRequest>,
    workouts: web::Data<WorkoutService>,
) -> Result<HttpResponse, AppError> {
    let response = workouts
        .update_workout(&user, &path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 운동 삭제 핸들러
///
/// 소속 운동 항목을 모두 연쇄 삭제합니다.
///
/// # Endpoint
/// `DELETE /workouts/{id}`
#[delete("/{id}")]
pub async fn delete_workout(
    user: AuthenticatedUser,
    path: web::Path<String>,
    workouts: web::Data<WorkoutService>,
) -> Result<HttpResponse, AppError> {
    workouts.delete_workout(&user, &path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
