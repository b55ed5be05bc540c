//! Business logic services

pub mod export;
pub mod projection;
