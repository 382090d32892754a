//! Unit tests for csvgrid.

mod coerce_tests;
mod grid_tests;
