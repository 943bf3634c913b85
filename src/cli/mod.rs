pub mod export;
pub mod rates;
pub mod ui;
