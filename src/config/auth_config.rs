//! 인증 관련 설정
//!
//! JWT 토큰 발급/검증에 필요한 설정값을 환경변수에서 읽어옵니다.
//! 설정값은 서버 시작 시점에 한 번 읽어 `TokenService`와
//! `SessionCacheService` 생성자에 주입됩니다.

use std::env;

/// JWT 토큰 설정
///
/// # 환경 변수
///
/// * `JWT_SECRET` - HMAC-SHA256 서명 비밀키
/// * `JWT_EXPIRATION_HOURS` - 액세스 토큰 수명 (기본값: 1시간)
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 비밀키를 반환합니다.
    ///
    /// 설정되지 않은 경우 개발용 기본값을 사용하며 경고를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 토큰 수명 (시간 단위)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1)
    }

    /// 토큰 수명 (초 단위)
    ///
    /// 세션 캐시 엔트리의 TTL로도 사용됩니다. 토큰과 캐시 엔트리가
    /// 같은 시점에 만료되도록 같은 값을 공유합니다.
    pub fn expiration_secs() -> i64 {
        Self::expiration_hours() * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_secs_matches_hours() {
        // 환경변수 미설정 시 기본값 1시간 = 3600초
        assert_eq!(JwtConfig::expiration_secs(), JwtConfig::expiration_hours() * 3600);
    }
}
