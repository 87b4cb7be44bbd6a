//! Todo Frontend
//!
//! Leptos client for the todo REST API.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod controller;
pub mod logging;
pub mod models;
pub mod notify;
pub mod view;
