pub mod checkout_dto;
pub mod order_dto;
pub mod providers;

pub use checkout_dto::*;
pub use order_dto::*;
pub use providers::*;
