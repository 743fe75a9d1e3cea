//! jotpad - A personal blog backend
//!
//! This library provides the content store, the query helpers and the HTTP
//! API behind the jotpad blog.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
