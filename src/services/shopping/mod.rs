pub mod shopping_list_service;

pub use shopping_list_service::ShoppingListService;
