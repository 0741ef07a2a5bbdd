use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_trimmed_string;

/// 쇼핑 리스트 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShoppingListRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
}

/// 리스트에 상품 추가 요청
#[derive(Debug, Deserialize, Validate)]
pub struct AddListItemRequest {
    #[validate(length(equal = 24, message = "product_id must be a 24 character hex id"))]
    pub product_id: String,

    #[validate(range(min = 1, max = 10000, message = "quantity must be between 1 and 10000"))]
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_name_length_is_validated() {
        let empty = CreateShoppingListRequest { name: String::new() };
        let long = CreateShoppingListRequest { name: "x".repeat(101) };
        let ok = CreateShoppingListRequest { name: "groceries".to_string() };

        assert!(empty.validate().is_err());
        assert!(long.validate().is_err());
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_list_name_limit_applies_after_trimming() {
        let padded = format!("  {}  ", "x".repeat(100));
        let request: CreateShoppingListRequest =
            serde_json::from_value(serde_json::json!({ "name": padded })).unwrap();

        assert_eq!(request.name.len(), 100);
        assert!(request.validate().is_ok());

        let blank: CreateShoppingListRequest =
            serde_json::from_value(serde_json::json!({ "name": "   " })).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_quantity_range_is_validated() {
        let product_id = "65f1c0a2b3d4e5f60718293a".to_string();
        let zero = AddListItemRequest { product_id: product_id.clone(), quantity: 0 };
        let too_many = AddListItemRequest { product_id: product_id.clone(), quantity: 10_001 };
        let ok = AddListItemRequest { product_id, quantity: 3 };

        assert!(zero.validate().is_err());
        assert!(too_many.validate().is_err());
        assert!(ok.validate().is_ok());
    }
}
