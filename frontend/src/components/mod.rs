//! UI Components for the PYQ Analyzer application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with analysis service status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF selection and submission
//! - [`ResultsSection`] - Summary counters and filtered question list
//! - [`QuestionCard`] - One ranked question group with its variants

mod header;
mod hero;
mod upload;
mod results;
mod question_card;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use results::*;
pub use question_card::*;
pub use footer::*;
