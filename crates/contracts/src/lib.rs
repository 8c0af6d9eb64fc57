//! Types shared between the explorer frontend and the backend API

pub mod domain;
pub mod enums;
pub mod system;
