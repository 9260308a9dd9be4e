//! 문자열 유틸리티
//!
//! 부분 수정(PUT) 요청의 "비어 있으면 변경 없음" 규칙을 한곳에서
//! 처리합니다.

/// 선택적 문자열을 정리합니다.
///
/// 앞뒤 공백을 제거하고, 결과가 빈 문자열이면 `None`을 반환합니다.
/// 부분 수정 요청에서 "값 없음"과 "빈 값"을 동일하게 취급하기 위한
/// 정규화입니다.
pub fn clean_optional_string(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
