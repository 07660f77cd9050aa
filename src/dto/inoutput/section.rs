//!
//! Seating sections of the train
//!

use crate::error::Error;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Section {
    A,
    B,
}

impl Section {
    ///
    /// Parse section code received from the client.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - code is not exactly "A" or "B"
    ///
    pub fn parse(code: &str) -> Result<Self, Error> {
        code.parse()
            .map_err(|_| Error::Validation("invalid section, must be either A or B"))
    }
}
