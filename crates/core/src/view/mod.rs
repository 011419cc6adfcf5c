pub mod chart;
pub mod info;
