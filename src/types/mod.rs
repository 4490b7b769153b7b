// src/types/mod.rs

pub mod family;
pub mod gemini;
pub mod history;
pub mod openai;

pub use family::*;
pub use gemini::*;
pub use history::*;
pub use openai::*;
