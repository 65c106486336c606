pub mod batch;
pub mod demo;
pub mod score;
