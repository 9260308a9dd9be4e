//! 사용자 엔티티
//!
//! MongoDB `users` 컬렉션에 저장되는 사용자 계정 정보입니다.
//! 비밀번호는 항상 bcrypt 해시로만 저장되며 평문은 영속화되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 계정 엔티티
///
/// 이메일은 시스템 전체에서 유니크하며, 인증 주체(principal)를
/// 식별하는 키로 사용됩니다. 운동(Workout)은 `user_id` 역참조로
/// 이 사용자에 소속됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 엔티티를 생성합니다.
    ///
    /// `password_hash`는 이미 해싱된 값이어야 합니다.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// ObjectId를 16진수 문자열로 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 수정 시각을 현재로 갱신합니다.
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.email, "tester@example.com");
    }

    #[test]
    fn test_id_string_is_hex() {
        let mut user = User::new(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );
        let oid = ObjectId::new();
        user.id = Some(oid);

        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }
}
