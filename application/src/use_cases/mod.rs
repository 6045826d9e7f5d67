//! Use cases (application services)
//!
//! - [`action`]: one generic async action, instantiated per flow
//! - [`page_controller`]: the page: range input plus both actions

pub mod action;
pub mod page_controller;
