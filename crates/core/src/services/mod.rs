pub mod caption;
pub mod catalog_service;
pub mod checkout_service;
pub mod refund_service;
pub mod report_service;
