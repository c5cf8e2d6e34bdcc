//! Power-status reports submitted from the map client.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/locations` | No | List all reports in submission order |
//! | POST | `/locations` | No | Submit a report |
//! | GET | `/locations/{id}` | No | Fetch one report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::ReportService;
