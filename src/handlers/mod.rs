//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 파싱/유효성 검사와 응답 직렬화만 담당하고, 비즈니스 로직은
//! 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                    ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 보호 엔드포인트는 [`crate::domain::auth::AuthenticatedUser`] 추출기를
//! 파라미터로 받는 것으로 선언됩니다. 추출기가 실패하면 핸들러 본문은
//! 실행되지 않고 401이 반환됩니다.

pub mod auth;
pub mod exercises;
pub mod users;
pub mod workouts;
