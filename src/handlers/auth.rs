//! 인증 HTTP 핸들러
//!
//! - `POST /v1/auth/register` - 회원가입
//! - `POST /v1/auth/login` - 로그인 (액세스 토큰 발급)
//! - `POST /v1/auth/logout` - 현재 토큰 폐기 (인증 필요)
//! - `GET /v1/me` - 현재 인증 정보 조회 (인증 필요)
use actix_web::{get, post, web, HttpResponse};
use crate::{
    core::AppError,
    domain::{
        dto::{CredentialsRequest, LoginResponse, MeResponse, MessageResponse},
        models::AuthenticatedUser,
    },
    middlewares::AuthMiddleware,
    services::auth::SessionService,
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /v1/auth/register`
#[post("/register")]
pub async fn register(
    sessions: web::Data<SessionService>,
    payload: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, AppError> {
    sessions.register(payload.username(), payload.password()).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("user created")))
}

/// 로그인 핸들러
///
/// 존재하지 않는 사용자와 잘못된 비밀번호는 같은 401 응답을 받습니다.
///
/// # Endpoint
/// `POST /v1/auth/login`
#[post("/login")]
pub async fn login(
    sessions: web::Data<SessionService>,
    payload: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, AppError> {
    let issued = sessions.login(payload.username(), payload.password()).await?;

    Ok(HttpResponse::Ok().json(LoginResponse::from(issued)))
}

/// 로그아웃 핸들러. 요청에 사용된 토큰만 폐기합니다.
///
/// 이 리소스에만 인증 미들웨어가 적용됩니다.
///
/// # Endpoint
/// `POST /v1/auth/logout`
#[post("/logout", wrap = "AuthMiddleware::new()")]
pub async fn logout(
    sessions: web::Data<SessionService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    sessions.logout(&user.jti).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("token revoked")))
}

/// # Endpoint
/// `GET /v1/me`
#[get("")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MeResponse::from(user)))
}
