pub mod collaboration;
pub mod review;
