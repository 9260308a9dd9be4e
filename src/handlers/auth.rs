//! Authentication HTTP Handlers
//!
//! 로그인/로그아웃/토큰 검증 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰과 Redis 세션 허용 목록을 결합한 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - `POST /user/login` - 로그인 (토큰 발급 + 세션 등록)
//! - `POST /user/logout` - 로그아웃 (세션 무효화)
//! - `POST /user/validate-token` - 토큰 유효성 확인

use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::users::LoginRequest;
use crate::errors::errors::AppError;
use crate::services::auth::{AuthGuard, SessionCacheService, TokenService};
use crate::services::users::UserService;

/// 로그인 핸들러
///
/// 자격 증명 확인 후 JWT 토큰을 발급하고, 세션 허용 목록에 등록합니다.
/// 같은 사용자의 이전 세션은 덮어써집니다 (단일 활성 세션).
///
/// # Endpoint
/// `POST /user/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    users: web::Data<UserService>,
    tokens: web::Data<TokenService>,
    sessions: web::Data<SessionCacheService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = users.authenticate(&payload.email, &payload.password).await?;

    let token = tokens.issue(&user.email)?;
    sessions.record_login(&user.email, &token).await?;

    log::info!("로그인 성공: {}", user.email);

    Ok(HttpResponse::Ok().json(json!({
        "token": format!("Bearer {}", token),
        "type": "Bearer",
        "email": user.email
    })))
}

/// 로그아웃 핸들러
///
/// 세션 허용 목록에서 항목을 제거합니다. 토큰 자체는 철회할 수 없으므로,
/// 이후의 요청은 liveness 검사에서 거부됩니다.
///
/// # Endpoint
/// `POST /user/logout`
#[post("/logout")]
pub async fn logout(
    user: AuthenticatedUser,
    sessions: web::Data<SessionCacheService>,
) -> Result<HttpResponse, AppError> {
    sessions.invalidate(&user.email).await?;

    log::info!("로그아웃: {}", user.email);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Logout successful"
    })))
}

/// 토큰 유효성 확인 핸들러
///
/// 헤더가 없으면 401, 헤더가 있으면 토큰이 무효하더라도 200으로
/// `valid` 플래그를 내려줍니다.
///
/// # Endpoint
/// `POST /user/validate-token`
#[post("/validate-token")]
pub async fn validate_token(
    req: HttpRequest,
    guard: web::Data<AuthGuard>,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 필요합니다".to_string()))?;

    let token = match tokens.extract_bearer_token(header) {
        Ok(token) => token,
        Err(_) => return Ok(HttpResponse::Ok().json(json!({ "valid": false }))),
    };

    if guard.is_token_valid(token).await? {
        // is_token_valid 통과 시 subject 추출은 실패할 수 없다
        let email = tokens.extract_subject(token)?;
        Ok(HttpResponse::Ok().json(json!({ "valid": true, "email": email })))
    } else {
        Ok(HttpResponse::Ok().json(json!({ "valid": false })))
    }
}
