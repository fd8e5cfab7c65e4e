pub mod members;
pub mod prs;
