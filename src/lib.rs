pub mod audit;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod render;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod storefront;
