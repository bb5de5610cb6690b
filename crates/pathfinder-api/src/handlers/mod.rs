//! HTTP handlers

pub mod home;
pub mod menu_api;
pub mod auth;
pub mod account;
pub mod health;
