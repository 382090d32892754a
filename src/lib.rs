//! Delimited-text import into a grid of role-tagged cells.
//!
//! [`data::CsvImporter`] reads a file into a [`grid::GridStore`], coercing
//! each field's edit value to a number when the whole field is a float
//! literal. Display collaborators read the result through [`grid::ItemModel`].

pub mod constants;
pub mod data;
pub mod grid;
pub mod logging;
pub mod settings;
pub mod table_view;
pub mod types;
