pub mod interface;
pub mod client;
pub mod error;
pub mod factory;

pub use interface::{TranslateInterface, TranslateRequest, TranslateResponse};
pub use client::LibreTranslateClient;
pub use error::TranslateError;
pub use factory::TranslateFactory;
