pub mod shopping_list_repo;
