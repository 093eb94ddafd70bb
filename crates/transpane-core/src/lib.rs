pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod region;
pub mod scene;
pub mod session;
pub mod text_fit;
pub mod viewport;
pub mod viewer;
