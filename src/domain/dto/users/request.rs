//! 사용자 관련 요청 DTO
//!
//! `validator` derive로 필드 제약을 선언하고, 핸들러에서 `validate()`
//! 실패 시 400으로 변환됩니다. 와이어 포맷은 camelCase입니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "사용자명은 필수입니다"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 사용자 부분 수정 요청
///
/// 모든 필드가 선택 사항입니다. 값이 없거나 공백뿐인 필드는
/// "변경하지 않음"으로 해석됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub username: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: Option<String>,
}

/// 비밀번호 변경 요청
///
/// 현재 비밀번호 재검증에 성공해야 새 비밀번호가 적용되며,
/// 성공 시 현재 세션이 무효화되어 재로그인이 필요합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdateRequest {
    #[validate(length(min = 1, message = "현재 비밀번호는 필수입니다"))]
    pub old_password: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,
}
