//! Core library exports for the catalog service.
//!
//! The `data` feature exposes the persistence and domain layer (`db`,
//! `domain`, `models`, `repository`, `schema`). The `server` feature adds the
//! request forms, services, DTOs and actix-web routes on top of it.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod validation;
