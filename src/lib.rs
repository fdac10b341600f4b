pub mod catalog;
pub mod cli;
pub mod configuration;
pub mod flows;
pub mod forms;
pub mod helpers;
pub mod models;
pub mod providers;
pub mod routes;
pub mod startup;
pub mod telemetry;
