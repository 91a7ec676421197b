pub mod test_case;
pub mod ticket;

pub use test_case::*;
pub use ticket::*;
