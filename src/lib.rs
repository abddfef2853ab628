//! # Taskpad
//!
//! A small web application that keeps a per-session task list. Each browser
//! session gets its own ordered list: the list page renders whatever that
//! session has submitted so far, and the add page validates a two-field form
//! (task text plus a bounded priority) before appending to the session.
//!
//! ## Usage
//!
//! ```bash
//! taskpad serve [--host 127.0.0.1] [-p 8080] [-c taskpad.toml]
//! ```
//!
//! ## Modules
//!
//! - `config` - Server and session configuration with TOML loading
//! - `error` - Crate-wide error type and `Result` alias
//! - `forms` - Pure form validation for task submissions
//! - `session` - In-memory session store and cookie resolution middleware
//! - `web` - Axum router, view handlers, and embedded Tera templates
pub mod config;
pub mod error;
pub mod forms;
pub mod session;
pub mod web;
