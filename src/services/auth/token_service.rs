//! JWT 토큰 발급/검증 서비스
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! HMAC-SHA256 서명을 사용하며, subject(사용자 이메일)와 발급/만료
//! 시각만을 클레임으로 가지는 단일 액세스 토큰을 다룹니다.
//!
//! 토큰 자체는 발급 후 철회할 수 없습니다. 로그아웃/무효화는
//! [`super::session_service::SessionCacheService`]의 허용 목록으로 구현됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::errors::errors::{AppError, ErrorContext};

/// JWT 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// subject - 사용자 이메일
    pub sub: String,
    /// 발급 시각 (unix timestamp)
    pub iat: i64,
    /// 만료 시각 (unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 발급/검증 서비스
///
/// 비밀키와 토큰 수명을 생성자로 주입받습니다. 운영 환경에서는
/// [`TokenService::from_env`]로 `JwtConfig` 값을 사용하고,
/// 테스트에서는 임의의 값을 직접 주입합니다.
pub struct TokenService {
    secret: String,
    lifetime_secs: i64,
}

impl TokenService {
    pub fn new(secret: String, lifetime_secs: i64) -> Self {
        Self {
            secret,
            lifetime_secs,
        }
    }

    /// 환경변수 기반 설정으로 서비스를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_secs())
    }

    /// 토큰 수명 (초 단위). 세션 캐시 TTL과 공유됩니다.
    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime_secs
    }

    /// subject에 대한 JWT 액세스 토큰 생성
    ///
    /// 만료 시각은 현재 시각 + 설정된 수명입니다. 토큰 발급 자체는
    /// 부수 효과가 없으며, 세션 캐시 등록은 호출자(로그인 핸들러)의
    /// 책임입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.lifetime_secs);

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, &claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    /// 토큰 서명/만료/subject 일치 여부를 검증합니다.
    ///
    /// 서명이 유효하고, 만료되지 않았으며, subject가 `expected_subject`와
    /// 일치할 때만 `true`를 반환합니다. 파싱 불가능한 입력을 포함한
    /// 모든 실패는 `false`입니다.
    ///
    /// 만료 비교는 검증 시점의 벽시계 기준이며 시계 오차 보정(leeway)은
    /// 적용하지 않습니다.
    pub fn verify(&self, token: &str, expected_subject: &str) -> bool {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<TokenClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => token_data.claims.sub == expected_subject,
            Err(_) => false,
        }
    }

    /// 토큰에서 subject(이메일)를 추출합니다.
    ///
    /// 파싱만 수행합니다. 서명/만료 검증은 [`Self::verify`]가 별도로
    /// 담당하므로, 여기서의 실패는 "형식이 잘못된 토큰"만을 의미합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰을 파싱할 수 없음
    pub fn extract_subject(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|token_data| token_data.claims.sub)
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰 형식입니다".to_string()))
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을
    /// 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}
