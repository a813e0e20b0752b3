pub mod core;
pub mod vacancy;
pub mod web;

pub use web::start_web_server;
