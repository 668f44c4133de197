pub mod filter;
pub mod regex;
