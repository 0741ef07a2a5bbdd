//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 요청 문자열 검증과 정리
//! - [`display_terminal`] - 기동 단계 터미널 출력

pub mod string_utils;
pub mod display_terminal;
