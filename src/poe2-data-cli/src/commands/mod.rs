//! Command handlers

pub mod community;
pub mod extract;
