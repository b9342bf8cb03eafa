// src/core/mod.rs
pub mod html;
pub mod net;
