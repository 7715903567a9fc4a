pub mod codec;
pub mod currency;
pub mod decimal;
