//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자/인증, 운동, 운동 항목 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth
//!
//! 보호 라우트는 스코프 미들웨어가 아니라 핸들러 시그니처의
//! `AuthenticatedUser` 추출기로 선언됩니다. `/user`처럼 같은 경로에
//! 공개 메서드(`POST`, `GET`)와 보호 메서드(`PUT`)가 섞여 있기 때문에
//! 스코프 단위 미들웨어로는 표현할 수 없습니다.
//!
//! # Route Groups
//!
//! ## `/user` - 회원/인증
//! - `POST /user` - 회원 가입 (공개)
//! - `POST /user/login` - 로그인 (공개)
//! - `POST /user/logout` - 로그아웃 (Bearer)
//! - `POST /user/validate-token` - 토큰 검증 (Bearer)
//! - `GET /user?email=` - 사용자 조회 (공개)
//! - `PUT /user` - 정보 수정 (Bearer)
//! - `PUT /user/password` - 비밀번호 변경 (Bearer)
//! - `DELETE /user/{email}` - 회원 탈퇴 (공개)
//!
//! ## `/workouts` - 운동 (모두 Bearer)
//!
//! ## `/exercises` - 운동 항목 (`GET /exercises/all`만 공개)

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_workout_routes(cfg);
    configure_exercise_routes(cfg);
}

/// 사용자/인증 관련 라우트를 설정합니다
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
            .service(handlers::auth::validate_token)
            .service(handlers::users::update_password)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 운동 관련 라우트를 설정합니다
///
/// `/my-workouts`와 `/all`은 `/{id}`보다 먼저 등록해야 경로 매칭이
/// 올바르게 동작합니다.
fn configure_workout_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/workouts")
            .service(handlers::workouts::my_workouts)
            .service(handlers::workouts::all_workouts)
            .service(handlers::workouts::create_workout)
            .service(handlers::workouts::get_workout)
            .service(handlers::workouts::update_workout)
            .service(handlers::workouts::delete_workout),
    );
}

/// 운동 항목 관련 라우트를 설정합니다
fn configure_exercise_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/exercises")
            .service(handlers::exercises::exercises_by_workout)
            .service(handlers::exercises::all_exercises)
            .service(handlers::exercises::create_exercise)
            .service(handlers::exercises::get_exercise)
            .service(handlers::exercises::update_exercise)
            .service(handlers::exercises::delete_exercise),
    );
}

/// 헬스체크 엔드포인트
///
/// 서비스 상태를 확인하는 엔드포인트입니다.
/// 로드밸런서나 모니터링 도구에서 사용됩니다.
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "gym_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis"
        }
    }))
}
