//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 엔티티와 API 계약을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 핵심 비즈니스 객체 (User / Workout / Exercise)
//! ├── dto       - 데이터 전송 객체 (Request/Response, camelCase 와이어 포맷)
//! └── auth      - 인증된 요청 주체 (AuthenticatedUser)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! ## 소유권 모델
//!
//! 모든 Workout은 정확히 한 명의 User에, 모든 Exercise는 정확히 하나의
//! Workout에 속합니다. 소유권 검사는 항상 최종 소유 사용자의 이메일과
//! 인증 주체의 이메일을 비교하는 방식으로 전이적으로 해석됩니다.

pub mod entities;
pub mod dto;
pub mod auth;

pub use auth::AuthenticatedUser;
