pub mod chart;
pub mod expense;
