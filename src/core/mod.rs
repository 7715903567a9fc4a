pub mod currency;
pub mod format;
pub mod locale;
