pub mod api;
pub mod chat;
pub mod config;
pub mod consts;
pub mod error;
pub mod image_io;
pub mod render;
pub mod zoom;
