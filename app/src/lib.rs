pub mod controllers;
pub mod migrations;
pub mod models;
pub mod requests;
pub mod routes;
