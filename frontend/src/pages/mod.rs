pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod leave;
pub mod login;
pub mod payroll;
pub mod profile;
pub mod register;
pub mod reports;
pub mod weekly_requests;
