// src/lib.rs

//! Substitute date and time tokens inside delimited placeholders of a
//! template string.
//!
//! A template like `"It is {h:mm A} on the {Do} day of {MMMM YYYY}"` is
//! rendered against a date to `"It is 1:37 PM on the 17th day of November
//! 2001"`. The token catalog is fixed (35 codes covering month, quarter,
//! day-of-year, day-of-month, day-of-week, week-of-year, year, meridiem,
//! hour, minute, and second forms); the placeholder delimiters are
//! configurable per [`Templater`] instance.
//!
//! The most relevant items are:
//! - [`Templater`] with operations [`render`], [`strip`], [`fuzzy_equals`],
//!   and [`set_config`]
//! - [`token_catalog`] returning the ordered [`Token`] catalog for a date
//!
//! [`Templater`]: crate::templater::templater::Templater
//! [`render`]: crate::templater::templater::Templater::render
//! [`strip`]: crate::templater::templater::Templater::strip
//! [`fuzzy_equals`]: crate::templater::templater::Templater::fuzzy_equals
//! [`set_config`]: crate::templater::templater::Templater::set_config
//! [`token_catalog`]: crate::data::token::token_catalog
//! [`Token`]: crate::data::token::Token

pub mod common;
pub mod data;
pub mod templater;
#[cfg(test)]
pub mod tests;
