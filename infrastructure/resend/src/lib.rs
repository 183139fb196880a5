pub mod client;
pub mod order_email;
