//! Display model implementations for table and JSON output
//!
//! Display models transform audit types into CLI-friendly formats
//! with appropriate column names and serialization.

mod assignment;
mod org;

pub use assignment::AssignmentDisplay;
pub use org::OrgDisplay;
