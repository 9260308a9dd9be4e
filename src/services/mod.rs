//! # Service Layer Module
//!
//! 비즈니스 로직 계층입니다. 리포지토리와 인증 구성 요소를 생성자로
//! 주입받으며, 전역 상태에 의존하지 않습니다.
//!
//! - [`auth`]: 토큰 발급/검증, 세션 허용 목록, 인증 가드
//! - [`users`]: 회원 가입/조회/수정/탈퇴, 비밀번호 관리
//! - [`workouts`]: 운동 CRUD와 페이지네이션
//! - [`exercises`]: 운동 항목 CRUD

pub mod auth;
pub mod exercises;
pub mod users;
pub mod workouts;
