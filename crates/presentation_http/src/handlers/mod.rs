//! HTTP request handlers

pub mod common;
pub mod datetime;
pub mod health;
pub mod speak;
pub mod transcribe;
pub mod weather;
