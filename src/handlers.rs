pub mod dashboard;
pub mod forecast;
pub mod health;
pub mod series;
pub mod session;
pub mod statistics;
