//! 세션 캐시 서비스 (토큰 허용 목록)
//!
//! JWT는 발급 후 철회할 수 없으므로, Redis에 "현재 유효한 토큰"의
//! 허용 목록을 유지합니다. 로그인 시 토큰을 등록하고, 로그아웃/탈퇴/
//! 비밀번호 변경 시 삭제합니다.
//!
//! # 정책
//!
//! - **캐시 키**: `jwt-token:{email}` - 사용자당 키 하나이므로 새 로그인이
//!   이전 세션을 덮어씁니다 (단일 활성 세션).
//! - **TTL**: 토큰 수명과 동일. 키가 만료되면 토큰도 이미 만료된 뒤입니다.
//! - **검증**: 저장된 토큰과 제시된 토큰이 바이트 단위로 일치해야 합니다.
//! - **장애**: Redis 접근 실패는 `RedisError`(500)로 전파합니다.
//!   서명 검증만으로 통과시키는 폴백은 두지 않습니다.

use std::sync::Arc;

use crate::caching::SessionStore;
use crate::errors::errors::AppError;

const SESSION_KEY_PREFIX: &str = "jwt-token:";

/// 토큰 허용 목록 관리 서비스
pub struct SessionCacheService {
    store: Arc<dyn SessionStore>,
    ttl_secs: u64,
}

impl SessionCacheService {
    pub fn new(store: Arc<dyn SessionStore>, ttl_secs: u64) -> Self {
        Self { store, ttl_secs }
    }

    fn session_key(email: &str) -> String {
        format!("{}{}", SESSION_KEY_PREFIX, email)
    }

    /// 로그인 성공 시 토큰을 허용 목록에 등록합니다.
    ///
    /// 같은 이메일의 기존 세션은 덮어써집니다.
    pub async fn record_login(&self, email: &str, token: &str) -> Result<(), AppError> {
        self.store
            .set_value_ex(&Self::session_key(email), token, self.ttl_secs)
            .await
    }

    /// 제시된 토큰이 해당 사용자의 활성 세션인지 확인합니다.
    ///
    /// 저장된 토큰이 없거나 제시된 토큰과 다르면 `false`입니다.
    pub async fn is_live(&self, email: &str, token: &str) -> Result<bool, AppError> {
        let stored = self.store.get_value(&Self::session_key(email)).await?;
        Ok(stored.as_deref() == Some(token))
    }

    /// 해당 사용자의 세션을 무효화합니다.
    ///
    /// 키가 없어도 성공으로 처리합니다 (멱등).
    pub async fn invalidate(&self, email: &str) -> Result<(), AppError> {
        self.store.delete_value(&Self::session_key(email)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    /// TTL을 무시하는 인메모리 세션 저장소
    struct InMemoryStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl InMemoryStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl SessionStore for InMemoryStore {
        async fn get_value(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_value_ex(&self, key: &str, value: &str, _ttl_secs: u64) -> Result<(), AppError> {
            self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn delete_value(&self, key: &str) -> Result<(), AppError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// 항상 실패하는 세션 저장소 (Redis 장애 시나리오)
    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn get_value(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::RedisError("connection refused".to_string()))
        }

        async fn set_value_ex(&self, _key: &str, _value: &str, _ttl_secs: u64) -> Result<(), AppError> {
            Err(AppError::RedisError("connection refused".to_string()))
        }

        async fn delete_value(&self, _key: &str) -> Result<(), AppError> {
            Err(AppError::RedisError("connection refused".to_string()))
        }
    }

    fn service() -> SessionCacheService {
        SessionCacheService::new(Arc::new(InMemoryStore::new()), 3600)
    }

    #[actix_web::test]
    async fn test_record_login_then_is_live() {
        let sessions = service();
        sessions.record_login("test@example.com", "token-a").await.unwrap();

        assert!(sessions.is_live("test@example.com", "token-a").await.unwrap());
    }

    #[actix_web::test]
    async fn test_is_live_without_session() {
        let sessions = service();

        assert!(!sessions.is_live("test@example.com", "token-a").await.unwrap());
    }

    #[actix_web::test]
    async fn test_is_live_rejects_different_token() {
        let sessions = service();
        sessions.record_login("test@example.com", "token-a").await.unwrap();

        assert!(!sessions.is_live("test@example.com", "token-b").await.unwrap());
    }

    #[actix_web::test]
    async fn test_new_login_replaces_previous_session() {
        let sessions = service();
        sessions.record_login("test@example.com", "token-a").await.unwrap();
        sessions.record_login("test@example.com", "token-b").await.unwrap();

        assert!(!sessions.is_live("test@example.com", "token-a").await.unwrap());
        assert!(sessions.is_live("test@example.com", "token-b").await.unwrap());
    }

    #[actix_web::test]
    async fn test_invalidate_kills_session() {
        let sessions = service();
        sessions.record_login("test@example.com", "token-a").await.unwrap();
        sessions.invalidate("test@example.com").await.unwrap();

        assert!(!sessions.is_live("test@example.com", "token-a").await.unwrap());
    }

    #[actix_web::test]
    async fn test_invalidate_is_idempotent() {
        let sessions = service();

        assert!(sessions.invalidate("unknown@example.com").await.is_ok());
    }

    #[actix_web::test]
    async fn test_sessions_are_per_user() {
        let sessions = service();
        sessions.record_login("user1@example.com", "token-1").await.unwrap();
        sessions.record_login("user2@example.com", "token-2").await.unwrap();
        sessions.invalidate("user1@example.com").await.unwrap();

        assert!(!sessions.is_live("user1@example.com", "token-1").await.unwrap());
        assert!(sessions.is_live("user2@example.com", "token-2").await.unwrap());
    }

    #[actix_web::test]
    async fn test_store_failure_propagates_as_redis_error() {
        let sessions = SessionCacheService::new(Arc::new(FailingStore), 3600);

        let result = sessions.is_live("test@example.com", "token-a").await;
        assert!(matches!(result, Err(AppError::RedisError(_))));
    }
}
