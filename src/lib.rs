// src/lib.rs
//! Dumpview - a terminal browser for stored card-dump files.
//!
//! This library provides the browsing/loading core (path state, directory
//! listing, guarded loads into the active tag buffer) plus the TUI shell.

pub mod app;
pub mod browse;
pub mod config;
pub mod fs;
pub mod tag;
pub mod ui;
