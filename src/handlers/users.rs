//! User HTTP Handlers
//!
//! 회원 가입/조회/수정/탈퇴 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - `POST /user` - 회원 가입 (인증 불필요)
//! - `GET /user?email=` - 사용자 조회 (인증 불필요)
//! - `PUT /user` - 회원 정보 수정 (Bearer)
//! - `PUT /user/password` - 비밀번호 변경 (Bearer)
//! - `DELETE /user/{email}` - 회원 탈퇴 (인증 불필요)

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::users::{CreateUserRequest, PasswordUpdateRequest, UserUpdateRequest};
use crate::errors::errors::AppError;
use crate::services::users::UserService;

/// `GET /user` 조회용 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// 회원 가입 핸들러
///
/// # Endpoint
/// `POST /user`
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = users.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /user?email={email}`
#[get("")]
pub async fn get_user(
    query: web::Query<EmailQuery>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = users.get_user(&query.email).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 회원 정보 수정 핸들러
///
/// 인증 주체 자신의 정보만 수정합니다. 비어 있거나 누락된 필드는
/// 변경하지 않습니다.
///
/// # Endpoint
/// `PUT /user`
#[put("")]
pub async fn update_user(
    user: AuthenticatedUser,
    payload: web::Json<UserUpdateRequest>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = users.update_user(&user.email, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 비밀번호 변경 핸들러
///
/// 현재 비밀번호 확인 후 교체하며, 성공 시 세션이 무효화되어
/// 재로그인이 필요합니다.
///
/// # Endpoint
/// `PUT /user/password`
#[put("/password")]
pub async fn update_password(
    user: AuthenticatedUser,
    payload: web::Json<PasswordUpdateRequest>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    users.update_password(&user.email, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Password updated successfully"
    })))
}

/// 회원 탈퇴 핸들러
///
/// 소유한 운동과 그 하위 항목까지 연쇄 삭제합니다.
///
/// # Endpoint
/// `DELETE /user/{email}`
#[delete("/{email}")]
pub async fn delete_user(
    path: web::Path<String>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    users.delete_user(&email).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User deleted successfully"
    })))
}
