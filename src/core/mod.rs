//! # Core Application Logic
//!
//! This module contains the storefront's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (static)     │
//!                    │  • Cart (reducer)       │
//!                    │  • Navigation           │
//!                    │  • update() (dispatch)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`cart`]: Line items and the pure cart reducer
//! - [`navigation`]: The three-page navigation state
//! - [`catalog`]: The fixed product table
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod money;
pub mod navigation;
pub mod state;
