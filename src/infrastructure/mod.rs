//! 基础设施层

pub mod logger;
pub mod memory;

#[cfg(feature = "database")]
pub mod database;
#[cfg(feature = "database")]
pub mod persistence;
