//! Business operations: each one a typed invocation of a database routine.

pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod evaluations;
pub mod recruitment;
pub mod reports;
pub mod training;
