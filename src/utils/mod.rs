pub mod file_operations;
pub mod generation;
pub mod jira;
pub mod parser;

pub use file_operations::*;
pub use generation::generate_test_cases;
pub use jira::fetch_ticket;
pub use parser::{BestEffortParser, TestCaseParser};
