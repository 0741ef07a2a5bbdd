//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 저장소 트레이트 객체를 생성자로 주입받습니다.
//! 조립은 [`AppContext`](crate::core::AppContext)에서 한 번만 이루어집니다.
//!
//! - [`auth`] - 비밀번호 해싱, 토큰 발급/검증, 인증 게이트, 세션 생명주기
//! - [`users`] - 자격 증명 저장소 (회원가입, 사용자 조회)
//! - [`shopping`] - 쇼핑 리스트와 항목 관리
//! - [`products`] - 상품 카탈로그

pub mod auth;
pub mod users;
pub mod shopping;
pub mod products;
