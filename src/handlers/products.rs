//! 상품 카탈로그 HTTP 핸들러
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppError,
    domain::dto::CreateProductRequest,
    services::products::ProductService,
};

/// # Endpoint
/// `POST /v1/products`
#[post("")]
pub async fn create_product(
    service: web::Data<ProductService>,
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let product = service.create(&payload.name, &payload.unit).await?;
    Ok(HttpResponse::Created().json(product))
}

/// # Endpoint
/// `GET /v1/products`
#[get("")]
pub async fn list_products(
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list().await?))
}
