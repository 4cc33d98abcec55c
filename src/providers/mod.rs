//! Market-data provider implementations

pub mod messari;

pub use messari::MessariProvider;
