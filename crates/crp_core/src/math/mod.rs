//! Numerical routines shared by the aggregation engine.

pub mod poisson;
