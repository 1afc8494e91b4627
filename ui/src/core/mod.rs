//! Platform-agnostic state and the thin browser layer beneath the components.

pub mod config;
pub mod navigation;
pub mod platform;
pub mod preferences;
pub mod state;
pub mod storage;
pub mod submit;
pub mod subscribe;
pub mod timing;
