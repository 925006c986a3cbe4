pub mod paypal;

pub use paypal::PayPalClient;
