// src/handlers/mod.rs

pub mod feedback;
pub mod practice;
pub mod prompt;
