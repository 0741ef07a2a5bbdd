pub mod shopping_list;
