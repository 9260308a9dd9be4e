//! # Utils Module
//!
//! 계층에 속하지 않는 범용 유틸리티 모음입니다.

pub mod string_utils;
