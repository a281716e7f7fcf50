pub mod charts;
pub mod insights;
pub mod panels;
pub mod tables;
pub mod walkthrough;
