//! 인증 가드
//!
//! Authorization 헤더를 받아 토큰 검증과 세션 확인을 한 번에 수행하는
//! 보호 라우트의 진입 검사기입니다. 핸들러는 이 가드를 거친
//! [`AuthenticatedUser`]만을 신뢰합니다.
//!
//! # 검사 순서
//!
//! 1. 헤더 존재 및 `Bearer ` 접두사 확인
//! 2. 토큰에서 subject(이메일) 추출
//! 3. 서명/만료/subject 검증
//! 4. 세션 캐시 허용 목록 확인
//!
//! 1~3 단계의 실패와 4단계의 "세션 없음"은 모두 401입니다.
//! 4단계에서 캐시 접근 자체가 실패하면 500으로 전파됩니다.

use std::sync::Arc;

use crate::domain::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

use super::session_service::SessionCacheService;
use super::token_service::TokenService;

/// 보호 라우트용 인증 가드
///
/// 토큰 서비스와 세션 서비스를 생성자로 주입받습니다. 전역 상태에
/// 의존하지 않으므로 테스트에서 임의의 구성으로 생성할 수 있습니다.
pub struct AuthGuard {
    tokens: Arc<TokenService>,
    sessions: Arc<SessionCacheService>,
}

impl AuthGuard {
    pub fn new(tokens: Arc<TokenService>, sessions: Arc<SessionCacheService>) -> Self {
        Self { tokens, sessions }
    }

    /// Authorization 헤더로부터 인증된 사용자를 해석합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 헤더 없음, 형식 오류, 서명/만료
    ///   불일치, 또는 활성 세션 아님
    /// * `AppError::RedisError` - 세션 캐시 접근 실패
    pub async fn authenticate(&self, auth_header: Option<&str>) -> Result<AuthenticatedUser, AppError> {
        let header = auth_header
            .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 필요합니다".to_string()))?;

        let token = self.tokens.extract_bearer_token(header)?;
        let email = self.tokens.extract_subject(token)?;

        if !self.tokens.verify(token, &email) {
            return Err(AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()));
        }

        if !self.sessions.is_live(&email, token).await? {
            return Err(AppError::AuthenticationError("만료되었거나 로그아웃된 세션입니다".to_string()));
        }

        Ok(AuthenticatedUser { email })
    }

    /// 토큰 유효성만 확인합니다 (검증 전용 엔드포인트용).
    ///
    /// [`Self::authenticate`]와 같은 검사를 수행하되, 토큰이 무효한 경우
    /// 에러 대신 `false`를 반환합니다. 캐시 접근 실패만 에러입니다.
    pub async fn is_token_valid(&self, token: &str) -> Result<bool, AppError> {
        let email = match self.tokens.extract_subject(token) {
            Ok(email) => email,
            Err(_) => return Ok(false),
        };

        if !self.tokens.verify(token, &email) {
            return Ok(false);
        }

        self.sessions.is_live(&email, token).await
    }
}
