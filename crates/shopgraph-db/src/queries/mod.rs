//! Table scans against the relational source.
//!
//! Each scan is a single unparameterized `SELECT` over one table. Column types
//! are coerced in SQL so the rows decode the same way regardless of whether the
//! source declares ids as integers or text.

pub mod customers;
pub mod catalog;
pub mod orders;
pub mod events;
