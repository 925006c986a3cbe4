pub mod enum_types;
pub mod order;
pub mod product;

pub use enum_types::*;
pub use order::*;
pub use product::*;
