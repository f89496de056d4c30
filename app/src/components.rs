//! Reusable UI pieces shared by the pages of the visualization.
//!
//! Each sub-module defines one element: the error boundary wrapper and the
//! fallbacks it shows, the route-level error page, and the loading indicator.

pub mod error_boundary;
pub mod error_template;
pub mod indicator_error;
pub mod loader;
