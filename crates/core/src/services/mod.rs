pub mod budget_service;
pub mod chart_service;
