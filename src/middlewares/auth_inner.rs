//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::services::auth::{AuthGate, GateError};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let result = match req.app_data::<web::Data<AuthGate>>() {
                Some(gate) => {
                    // ASCII가 아닌 헤더 값은 형식 오류로 처리되도록 빈 문자열로 넘긴다
                    let header = req
                        .headers()
                        .get(AUTHORIZATION)
                        .map(|value| value.to_str().unwrap_or(""));
                    gate.authorize(header).await
                }
                None => Err(GateError::Internal(AppError::InternalError(
                    "auth gate is not configured".to_string(),
                ))),
            };

            match result {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 {}", user.username);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    if let GateError::Rejected(rejection) = &err {
                        log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), rejection.code());
                    }
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
