pub mod filter;
pub mod group;
