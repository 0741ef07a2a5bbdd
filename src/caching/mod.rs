//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 JSON 기반 직렬화를 제공합니다.
//! 현재는 폐기 토큰 원장의 read-through 캐시로 사용됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 미설정 시 캐시 비활성화
//! ```

pub mod redis;
