// src/utils/mod.rs

pub mod prompt;
pub mod rating;
