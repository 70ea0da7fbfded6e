//! Backend for the workplace-health ROI report.
//!
//! Survey forms (A through J) land as JSON documents in a per-user store;
//! the aggregation pipeline in [`services::report`] reconciles them into one
//! report object that the web views and the PDF exporter consume. See
//! `DESIGN.md` for the precedence rules between forms.

pub mod db;
pub mod domain;
pub mod dto;
pub mod format;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
