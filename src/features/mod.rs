pub mod portal;
pub mod reports;
