//! 사용자 인증 관련 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::CredentialsRequest;
pub use response::{LoginResponse, MeResponse, MessageResponse};
