// src/data/mod.rs

//! The `data` module is the date-derived data of templating: the datetime
//! aliases and derivation helpers, and the [`Token`] catalog.
//!
//! ## Definitions of data
//!
//! ### Token
//!
//! A "token" is a short literal code (e.g. `MMMM`, `hh`) paired with a value
//! computed from a date snapshot, plus a human description and an example.
//! The full set of tokens for one date is the "catalog", an ordered sequence
//! regenerated fresh on every call; see [`TOKEN_CATALOG`].
//!
//! ### Placeholder
//!
//! A "placeholder" is a region of a template string bounded by the
//! configured open and close tags. Token codes inside a placeholder are
//! substituted by the [`Templater`]; the catalog itself knows nothing of
//! placeholders.
//!
//! [`Token`]: crate::data::token::Token
//! [`TOKEN_CATALOG`]: crate::data::token::TOKEN_CATALOG
//! [`Templater`]: crate::templater::templater::Templater

pub mod datetime;
pub mod token;
