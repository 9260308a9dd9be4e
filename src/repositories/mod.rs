//! # Repository Layer Module
//!
//! 데이터 액세스 계층입니다. MongoDB 컬렉션별로 리포지토리를 나누고,
//! 조회 빈도가 높은 사용자 조회에는 Redis read-through 캐시를 적용합니다.
//!
//! 모든 리포지토리는 `Arc<Database>`(필요 시 `Arc<RedisClient>`)를
//! 생성자로 주입받습니다.

pub mod users;
pub mod workouts;
pub mod exercises;

#[cfg(test)]
pub mod testing;

use mongodb::bson::oid::ObjectId;

use crate::errors::errors::AppError;

/// 경로/요청에서 받은 id 문자열을 ObjectId로 변환합니다.
///
/// 24자리 16진수가 아닌 입력은 400으로 처리됩니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}
