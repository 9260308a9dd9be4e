//! 짐 서비스 백엔드
//!
//! Rust 기반의 헬스 트레이닝 기록 관리 서비스입니다.
//! 사용자가 운동(워크아웃)과 그 하위 운동 항목(엑서사이즈)을 기록하고,
//! JWT 토큰과 Redis 세션 허용 목록을 결합한 인증으로 보호합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 생성, 프로필 관리, 비밀번호 변경, 계정 삭제
//! - **JWT 인증**: 액세스 토큰 발급/검증, 단일 활성 세션
//! - **세션 허용 목록**: Redis TTL 기반 로그아웃/강제 무효화
//! - **운동 기록**: 소유권 범위의 운동/항목 CRUD, 페이지네이션
//! - **MongoDB**: 데이터 영구 저장
//! - **Redis**: 캐싱 및 세션 관리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 서비스는 생성자 주입으로 조립되어 `actix_web::web::Data`로
//! 핸들러에 전달됩니다. 전역 싱글톤은 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gym_service_backend::services::auth::{AuthGuard, SessionCacheService, TokenService};
//!
//! let tokens = Arc::new(TokenService::from_env());
//! let sessions = Arc::new(SessionCacheService::new(store, tokens.lifetime_secs() as u64));
//! let guard = AuthGuard::new(tokens, sessions);
//! ```

pub mod caching;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
