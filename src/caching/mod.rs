//! 캐시 계층 모듈
//!
//! Redis 기반 캐시 클라이언트와 세션 캐시 저장소 추상화를 제공합니다.
//!
//! 세션 캐시는 전역 싱글톤이 아니라 [`SessionStore`] trait 객체로
//! 서비스에 주입됩니다. 테스트에서는 인메모리 구현으로 대체할 수 있습니다.

pub mod redis;

use async_trait::async_trait;

use crate::errors::errors::AppError;

/// 세션 캐시 저장소 추상화
///
/// 키-값 문자열 저장소에 TTL 기반 쓰기를 지원하는 최소 인터페이스입니다.
/// 운영 환경에서는 [`redis::RedisClient`]가 구현하며, 저장소 장애는
/// `AppError::RedisError`로 전파되어 인증 요청 전체가 실패합니다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 키에 저장된 문자열 값을 조회합니다. 키가 없으면 `None`.
    async fn get_value(&self, key: &str) -> Result<Option<String>, AppError>;

    /// TTL과 함께 문자열 값을 저장합니다. 기존 값은 덮어씁니다.
    async fn set_value_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), AppError>;

    /// 키를 삭제합니다. 키가 없어도 성공으로 처리합니다.
    async fn delete_value(&self, key: &str) -> Result<(), AppError>;
}
