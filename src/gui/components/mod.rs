// src/gui/components/mod.rs
pub mod form;
pub mod notice;
