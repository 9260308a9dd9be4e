//! # Auth Service Module
//!
//! 인증/인가 서비스 모음입니다.
//!
//! - [`token_service`]: JWT 발급/검증
//! - [`session_service`]: Redis 토큰 허용 목록
//! - [`auth_guard`]: 보호 라우트 진입 검사

pub mod auth_guard;
pub mod session_service;
pub mod token_service;

pub use auth_guard::AuthGuard;
pub use session_service::SessionCacheService;
pub use token_service::TokenService;

use crate::domain::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 리소스 소유권 검사
///
/// 인증 주체와 리소스 소유자의 이메일이 다르면 `NotFound`를 반환합니다.
/// 타인 소유 리소스의 존재 여부를 응답으로 구분할 수 없도록, 403이 아닌
/// 404로 통일합니다.
pub fn require_owner(principal: &AuthenticatedUser, owner_email: &str, resource: &str) -> Result<(), AppError> {
    if principal.email == owner_email {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("{}을(를) 찾을 수 없습니다", resource)))
    }
}
