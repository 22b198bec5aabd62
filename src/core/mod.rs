//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Flow data model (FlowEdge, SalesSummaryRow)
//! - Reporting period tags
//! - Path layout for tables and the dashboard
//! - CSV table export/import
//! - Report rendering for the console

pub mod model;
pub mod paths;
pub mod period;
pub mod render;
pub mod table;
