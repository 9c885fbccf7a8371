pub mod config;
pub mod logging;

pub mod generator;
pub mod project;
pub mod routes;
pub mod url_model;
