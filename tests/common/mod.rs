#![allow(dead_code, unused_macros, unused_imports)]

use actix_web::test::TestRequest;
use chrono::Duration;
use serde_json::json;
use shopping_list_service::core::AppContext;
use shopping_list_service::services::auth::{PasswordHasher, TokenService};

pub const SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// 메모리 저장소와 최소 bcrypt cost로 구성된 컨텍스트
pub fn context() -> AppContext {
    AppContext::in_memory(
        PasswordHasher::new(4).unwrap(),
        TokenService::new(SECRET, Duration::minutes(15)),
    )
}

pub fn credentials(uri: &str, username: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri(uri)
        .set_json(json!({ "username": username, "password": password }))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

macro_rules! init_app {
    ($context:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| $context.configure(cfg))
                .configure(shopping_list_service::routes::configure_all_routes),
        )
        .await
    };
}

/// 회원가입 후 로그인하여 토큰 문자열을 반환합니다
macro_rules! register_and_login {
    ($app:expr, $username:expr, $password:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            crate::common::credentials("/v1/auth/register", $username, $password).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = actix_web::test::call_and_read_body_json(
            &$app,
            crate::common::credentials("/v1/auth/login", $username, $password).to_request(),
        )
        .await;
        body["token"].as_str().unwrap().to_string()
    }};
}

pub(crate) use init_app;
pub(crate) use register_and_login;
