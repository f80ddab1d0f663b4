//! Strip legal-form terms ("Ltd", "Oy", "GmbH", "filial i Finland") from
//! company names and return the base name.

pub mod clean;
pub mod config;
pub mod error;
pub mod finnish;
pub mod normalize;
pub mod scanner;
pub mod termdata;
pub mod terms;

pub use clean::{Cleaner, basename, basename_in};
pub use cleanco_types::{BatchReport, CleanedName, MatchFlags};
pub use config::Config;
pub use error::{Error, Result};
pub use terms::{CountryScope, TermTable};
