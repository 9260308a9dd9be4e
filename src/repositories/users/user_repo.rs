//! 사용자 리포지토리
//!
//! MongoDB `users` 컬렉션에 대한 CRUD와 이메일 기반 read-through 캐시를
//! 담당합니다.
//!
//! # 캐싱 정책
//!
//! - **캐시 키**: `users:{email}`
//! - **TTL**: 600초 (10분)
//! - **읽기**: 캐시 미스 시 MongoDB에서 조회 후 캐시에 저장 (read-through)
//! - **쓰기**: DB 쓰기 성공 후 해당 키 무효화 (invalidate-after-write)
//!
//! 이메일 유니크 검사는 캐시를 거치지 않고 항상 DB를 직접 조회합니다.
//! 캐시가 낡아 있으면 중복 가입을 허용할 수 있기 때문입니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::domain::entities::User;
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "users";
const CACHE_TTL_SECS: usize = 600;

/// 사용자 저장소 추상화
///
/// 운영 환경에서는 [`UserRepository`]가 구현하며, 서비스 테스트에서는
/// 인메모리 구현으로 대체됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 이메일 존재 여부 확인
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// 새 사용자 저장. 중복 이메일은 `ConflictError`.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 기존 사용자 갱신
    async fn save(&self, user: &User) -> Result<(), AppError>;

    /// 이메일로 사용자 삭제. 삭제된 문서가 없으면 `false`.
    async fn delete_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// 이메일 키의 캐시 엔트리를 무효화합니다.
    async fn invalidate_cache(&self, email: &str);
}

/// 쓰기 에러를 도메인 에러로 변환합니다.
///
/// 유니크 인덱스 위반(`E11000`)은 중복 이메일이므로 `ConflictError`(409),
/// 그 외는 `DatabaseError`(500)입니다. `create`와 `save`(이메일 변경이
/// 동시 가입과 경합하는 경우) 양쪽에서 같은 규칙을 적용합니다.
fn translate_write_error(message: String) -> AppError {
    if message.contains("E11000") {
        AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
    } else {
        AppError::DatabaseError(message)
    }
}

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION_NAME)
    }

    fn cache_key(email: &str) -> String {
        format!("users:{}", email)
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    ///
    /// 동시에 같은 이메일로 가입이 들어와도 한쪽은 중복 키 에러를 받아
    /// `ConflictError`로 전파됩니다. 서버 시작 시 한 번 호출합니다.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection()
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// 이메일로 사용자 조회 (read-through 캐시)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = Self::cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분). 캐시 저장 실패는 조회 결과에 영향 없음
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, CACHE_TTL_SECS)
                .await;
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// 소유권 해석(workout → user) 경로에서 사용됩니다. 캐시하지 않습니다.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일 존재 여부 확인 (캐시 미사용, 항상 DB 직접 조회)
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let count = self.collection()
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// 새 사용자 저장
    ///
    /// 유니크 인덱스 위반(중복 이메일)은 `ConflictError`로 변환됩니다.
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| translate_write_error(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// 기존 사용자 갱신
    ///
    /// 이메일 변경이 동시 가입과 경합하면 유니크 인덱스 위반이 여기서도
    /// 발생할 수 있으므로 `create`와 같은 에러 변환을 적용합니다.
    /// DB 쓰기 성공 후 현재 이메일 키를 무효화합니다. 이메일이 변경된
    /// 경우 호출자가 이전 이메일 키를 `invalidate_cache`로 함께
    /// 무효화해야 합니다.
    async fn save(&self, user: &User) -> Result<(), AppError> {
        let id = user.id
            .ok_or_else(|| AppError::InternalError("ID 없는 사용자는 갱신할 수 없습니다".to_string()))?;

        self.collection()
            .replace_one(doc! { "_id": id }, user)
            .await
            .map_err(|e| translate_write_error(e.to_string()))?;

        self.invalidate_cache(&user.email).await;
        Ok(())
    }

    /// 이메일로 사용자 삭제
    ///
    /// 삭제 성공 후 캐시를 무효화합니다. 삭제된 문서가 없으면 `false`.
    async fn delete_by_email(&self, email: &str) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.invalidate_cache(email).await;
        Ok(result.deleted_count > 0)
    }

    /// 이메일 키의 캐시 엔트리를 무효화합니다.
    ///
    /// 캐시 삭제 실패는 로그만 남깁니다. TTL이 있으므로 결국 만료됩니다.
    async fn invalidate_cache(&self, email: &str) {
        if let Err(e) = self.redis.del(&Self::cache_key(email)).await {
            log::warn!("사용자 캐시 무효화 실패 ({}): {}", email, e);
        }
    }
}
