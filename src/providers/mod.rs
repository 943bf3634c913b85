pub mod kurs_pajak;

pub use kurs_pajak::KursPajakProvider;
