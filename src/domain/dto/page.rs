//! 페이지네이션 DTO
//!
//! Spring Data의 `Page` 응답 형태를 그대로 따릅니다.

use serde::{Deserialize, Serialize};

/// 페이지네이션 쿼리 파라미터 (`?page=0&size=20`)
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<i64>,
}

impl PageQuery {
    pub const DEFAULT_SIZE: i64 = 20;

    /// 0부터 시작하는 페이지 번호
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    /// 페이지 크기 (기본값 20, 1 미만은 기본값으로 대체)
    pub fn size(&self) -> i64 {
        match self.size {
            Some(size) if size >= 1 => size,
            _ => Self::DEFAULT_SIZE,
        }
    }
}

/// 페이지네이션 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: i64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    pub fn new(content: Vec<T>, page: u64, size: i64, total_elements: u64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size as u64 - 1) / size as u64
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}
