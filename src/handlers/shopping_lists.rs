//! 쇼핑 리스트 HTTP 핸들러
//!
//! 모든 엔드포인트는 `/v1/shopping-lists` 스코프 아래에 있으며 인증이 필요합니다.
use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppError,
    domain::{
        dto::{AddListItemRequest, CreateShoppingListRequest, MessageResponse},
        models::AuthenticatedUser,
    },
    services::shopping::ShoppingListService,
};

/// # Endpoint
/// `POST /v1/shopping-lists`
#[post("")]
pub async fn create_shopping_list(
    service: web::Data<ShoppingListService>,
    user: AuthenticatedUser,
    payload: web::Json<CreateShoppingListRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let list = service.create(&user.username, &payload.name).await?;
    Ok(HttpResponse::Created().json(list))
}

/// # Endpoint
/// `GET /v1/shopping-lists`
#[get("")]
pub async fn list_shopping_lists(
    service: web::Data<ShoppingListService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let lists = service.list(&user.username).await?;
    Ok(HttpResponse::Ok().json(lists))
}

/// 리스트와 내장 항목을 삭제합니다.
///
/// # Endpoint
/// `DELETE /v1/shopping-lists/{list_id}`
#[delete("/{list_id}")]
pub async fn delete_shopping_list(
    service: web::Data<ShoppingListService>,
    user: AuthenticatedUser,
    list_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&user.username, &list_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("shopping list deleted")))
}

/// 리스트 전체를 구매 완료 처리합니다.
///
/// # Endpoint
/// `PATCH /v1/shopping-lists/{list_id}`
#[patch("/{list_id}")]
pub async fn complete_shopping_list(
    service: web::Data<ShoppingListService>,
    user: AuthenticatedUser,
    list_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list = service.mark_completed(&user.username, &list_id).await?;
    Ok(HttpResponse::Ok().json(list))
}

/// # Endpoint
/// `POST /v1/shopping-lists/{list_id}/items`
#[post("/{list_id}/items")]
pub async fn add_list_item(
    service: web::Data<ShoppingListService>,
    user: AuthenticatedUser,
    list_id: web::Path<String>,
    payload: web::Json<AddListItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let list = service
        .add_item(&user.username, &list_id, &payload.product_id, payload.quantity)
        .await?;
    Ok(HttpResponse::Created().json(list))
}

/// # Endpoint
/// `DELETE /v1/shopping-lists/{list_id}/items/{product_id}`
#[delete("/{list_id}/items/{product_id}")]
pub async fn remove_list_item(
    service: web::Data<ShoppingListService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (list_id, product_id) = path.into_inner();

    service.remove_item(&user.username, &list_id, &product_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("item removed from shopping list")))
}

/// 항목 하나를 구매 처리합니다.
///
/// # Endpoint
/// `PATCH /v1/shopping-lists/{list_id}/items/{product_id}`
#[patch("/{list_id}/items/{product_id}")]
pub async fn purchase_list_item(
    service: web::Data<ShoppingListService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (list_id, product_id) = path.into_inner();

    let list = service
        .mark_item_purchased(&user.username, &list_id, &product_id)
        .await?;
    Ok(HttpResponse::Ok().json(list))
}
