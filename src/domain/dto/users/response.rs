//! 사용자 관련 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// 사용자 조회/생성 응답
///
/// 비밀번호 해시 등 민감 정보는 엔티티 → DTO 변환 과정에서 제거됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id_string().unwrap_or_default(),
            username: user.username,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_strips_password_hash() {
        let mut user = User::new(
            "joao".to_string(),
            "joao@gym.com".to_string(),
            "$2b$04$secret-hash".to_string(),
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user.clone());
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("joao@gym.com"));
        assert!(json.contains("userId"));
        assert!(!json.contains("secret-hash"));
    }
}
