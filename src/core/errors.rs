//! # Application Error Handling
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 에러는 핸들러 경계에서 `ResponseError` 구현을 통해
//! 상태 코드와 `{"error": "..."}` 형식의 JSON 응답으로 변환됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `InvalidCredentials` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | 그 외 | 500 Internal Server Error |
//!
//! ## 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn create_user(data: UserData) -> Result<User, AppError> {
//!     if data.username.trim().is_empty() {
//!         return Err(AppError::ValidationError("username is required".to_string()));
//!     }
//!     repo.insert(user).await
//! }
//! ```

use thiserror::Error;

/// 로그인 실패 시 사용하는 고정 메시지
///
/// 존재하지 않는 사용자와 잘못된 비밀번호를 구분하지 않습니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid username or password";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류입니다. 500으로 응답됩니다.
    ///
    /// ```rust,ignore
    /// collection.insert_one(&user).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 길이 제한 위반, 잘못된 ID 형식 등
    /// 클라이언트가 수정할 수 있는 오류입니다. 400으로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 다른 사용자가 소유한 쇼핑 리스트에 대한 접근도 이 에러로 응답하여
    /// 리소스 존재 여부를 노출하지 않습니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (중복 사용자명 등)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// 토큰이 없거나, 유효하지 않거나, 만료되었거나, 폐기된 경우입니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 로그인 자격 증명 불일치
    ///
    /// 사용자가 존재하지 않는 경우와 비밀번호가 틀린 경우 모두 동일한
    /// 메시지와 상태 코드로 응답합니다.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에만 상세 내용을 남기고,
    /// 클라이언트에는 일반화된 메시지를 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("❌ 요청 처리 중 내부 오류: {}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("password hashing failed")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("username is required".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("shopping list not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("username already exists".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_errors_share_unauthorized_status() {
        let token_error = AppError::AuthenticationError("token has been revoked".to_string());
        let login_error = AppError::InvalidCredentials;

        assert_eq!(token_error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(login_error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(login_error.to_string(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_internal_error_body_hides_details() {
        let error = AppError::DatabaseError("mongodb://admin:secret@db".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "internal server error");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
