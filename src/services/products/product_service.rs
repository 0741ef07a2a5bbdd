//! 상품 카탈로그 서비스

use std::sync::Arc;
use log::info;
use crate::{
    core::AppResult,
    domain::{dto::ProductResponse, entities::Product},
    repositories::ProductRepository,
    utils::string_utils::validate_required_string,
};

pub struct ProductService {
    products: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn create(&self, name: &str, unit: &str) -> AppResult<ProductResponse> {
        let name = validate_required_string(name, "name")?;
        let unit = validate_required_string(unit, "unit")?;

        let product = self.products.insert(Product::new(name, unit)).await?;
        info!("📦 상품 등록: {} ({})", product.name, product.unit);

        Ok(product.into())
    }

    /// 카탈로그 전체를 이름순으로 반환합니다.
    pub async fn list(&self) -> AppResult<Vec<ProductResponse>> {
        Ok(self.products
            .find_all()
            .await?
            .into_iter()
            .map(ProductResponse::from)
            .collect())
    }
}
