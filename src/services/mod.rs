// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod store_service;


pub use store_service::StoreService;
