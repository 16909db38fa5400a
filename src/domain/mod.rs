//! Core domain models for secwatch
//!
//! This module contains the fundamental types used throughout the
//! application:
//! - Update item descriptors for the component catalog
//! - Report rows and the overall inspection report

mod report;
mod update_item;

pub use report::{InspectionReport, ReportRow};
pub use update_item::UpdateItem;
