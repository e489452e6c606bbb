pub mod auth_dto;
pub mod form_dto;
pub mod order_dto;
pub mod product_dto;
