//! 인증된 요청 주체(principal)
//!
//! Bearer 토큰 검증을 통과한 요청의 사용자 이메일을 담는 타입입니다.
//! actix-web `FromRequest` 구현을 통해 핸들러 시그니처에 선언하는 것만으로
//! 인증을 요구할 수 있습니다. 인증 실패 시 핸들러에 진입하기 전에
//! 401 응답이 반환됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! #[get("/my-workouts")]
//! async fn my_workouts(
//!     principal: AuthenticatedUser,
//!     service: web::Data<WorkoutService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let workouts = service.get_user_workouts(&principal.email).await?;
//!     Ok(HttpResponse::Ok().json(workouts))
//! }
//! ```

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::errors::errors::AppError;
use crate::services::auth::AuthGuard;

/// 인증된 요청 주체
///
/// 이메일은 토큰 subject에서 추출된 값이며, 세션 캐시 liveness 검사까지
/// 통과한 상태임이 보장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let guard = req
                .app_data::<web::Data<AuthGuard>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalError("AuthGuard가 애플리케이션에 등록되지 않았습니다".to_string())
                })?;

            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned);

            guard.authenticate(auth_header.as_deref()).await
        })
    }
}
