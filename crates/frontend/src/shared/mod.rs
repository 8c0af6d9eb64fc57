pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod modal;
pub mod response_classifier;
pub mod retry;
