// SPDX-License-Identifier: MIT
//
// QRANode: Client for the ANU Quantum Random Numbers API
//
// https://github.com/yourusername/qranode

//! Request parameters and their validation
//!
//! [`RequestOptions`] holds what the caller asked for, loosely typed so that
//! malformed numbers (NaN, infinities, fractions) can be reported precisely.
//! [`RequestOptions::validate`] turns it into a [`ValidatedRequest`], which is
//! the only thing the client ever puts on the wire.

use crate::{Error, Result, AMOUNT_LIMIT, BLOCK_SIZE_LIMIT, VALID_TYPES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric encoding requested from the upstream API
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Integers between 0 and 255
    Uint8,
    /// Integers between 0 and 65535
    Uint16,
    /// Hexadecimal chunks between `00` and `ff`
    Hex8,
    /// Hexadecimal chunks between `0000` and `ffff`
    Hex16,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Uint8 => "uint8",
            DataType::Uint16 => "uint16",
            DataType::Hex8 => "hex8",
            DataType::Hex16 => "hex16",
        }
    }

    /// Hex types are the only ones that take a block size
    pub fn is_hex(&self) -> bool {
        matches!(self, DataType::Hex8 | DataType::Hex16)
    }
}

impl Default for DataType {
    fn default() -> Self {
        Self::Uint8
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uint8" => Ok(DataType::Uint8),
            "uint16" => Ok(DataType::Uint16),
            "hex8" => Ok(DataType::Hex8),
            "hex16" => Ok(DataType::Hex16),
            _ => Err(invalid_data_type()),
        }
    }
}

fn invalid_data_type() -> Error {
    Error::InvalidParameter(format!(
        "The 'dataType' argument must be one of these: {}",
        VALID_TYPES.join(", ")
    ))
}

/// Options for a single random number request
///
/// Field names follow the upstream client convention (`dataType`, `amount`,
/// `blockSize`) when deserialized.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    /// One of `uint8`, `uint16`, `hex8`, `hex16`, case-insensitive
    #[serde(default = "default_data_type")]
    pub data_type: String,

    /// How many values to return (1-1024)
    #[serde(default = "default_amount")]
    pub amount: f64,

    /// Chunks per hex block (1-10); ignored for integer types
    #[serde(default = "default_block_size")]
    pub block_size: f64,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            data_type: default_data_type(),
            amount: default_amount(),
            block_size: default_block_size(),
        }
    }
}

impl RequestOptions {
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            ..Default::default()
        }
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn block_size(mut self, block_size: f64) -> Self {
        self.block_size = block_size;
        self
    }

    /// Validate the options, failing on the first violation
    ///
    /// Order: data type, amount, then block size (hex types only).
    pub fn validate(&self) -> Result<ValidatedRequest> {
        if self.data_type.is_empty() {
            return Err(invalid_data_type());
        }
        let data_type: DataType = self.data_type.parse()?;

        let amount = bounded_integer("amount", self.amount, AMOUNT_LIMIT.into())?;

        let block_size = if data_type.is_hex() {
            let size = bounded_integer("blockSize", self.block_size, BLOCK_SIZE_LIMIT.into())?;
            Some(size as u8)
        } else {
            None
        };

        Ok(ValidatedRequest {
            data_type,
            amount: amount as u16,
            block_size,
        })
    }
}

/// Check that `value` is a positive integer no larger than `limit`
///
/// Zero, NaN, infinities and fractions are malformed; any other integer
/// outside `1..=limit` is out of range.
fn bounded_integer(name: &str, value: f64, limit: u32) -> Result<u32> {
    if value == 0.0 || !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::InvalidParameter(format!(
            "The '{}' argument needs to be a positive integer.",
            name
        )));
    }
    if value < 1.0 || value > f64::from(limit) {
        return Err(Error::OutOfRange(format!(
            "The '{}' argument is outside the range 1-{}, inclusive.",
            name, limit
        )));
    }
    Ok(value as u32)
}

fn default_data_type() -> String {
    DataType::default().as_str().to_string()
}

fn default_amount() -> f64 {
    1.0
}

fn default_block_size() -> f64 {
    1.0
}

/// A request that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub data_type: DataType,
    pub amount: u16,
    /// Present only for hex data types
    pub block_size: Option<u8>,
}

impl ValidatedRequest {
    /// Query parameters in wire order: `type`, `length`, then `size` if any
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("type", self.data_type.to_string()),
            ("length", self.amount.to_string()),
        ];
        if let Some(size) = self.block_size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}
