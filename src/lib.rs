pub mod acceptance;
pub mod config;
pub mod driver_api;
pub mod dtos;
pub mod location_reporting;
pub mod navigation;
pub mod rest;
pub mod result;
pub mod telemetry;
