//! Portfolio Store - aggregated content cache for a personal portfolio site
//!
//! This crate loads the independently-fetchable content sections of a
//! portfolio (biography, projects, education, skills, ...), tracks their
//! loading and error state per section, and exposes one composite snapshot
//! plus change notifications to the UI layer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
