//! Input loader for forecast-solution documents.
//!
//! A document carries one or more alternative solutions; only the first is
//! read. Unknown fields (`statistics`, per-block `when`, ...) are ignored.

use crate::{
    error::{GenError, GenResult},
    types::DateKey,
};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// One forecast row as produced by the forecasting tool.
/// `block` stays a raw name here; it is resolved when windows are built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastBlock {
    pub date: DateKey,
    pub block: String,
    pub forecast: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDocument {
    pub solutions: Vec<Vec<ForecastBlock>>,
}

impl ForecastDocument {
    pub fn from_json(content: &str) -> GenResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| GenError::invalid_input(format!("cannot decode forecast document: {e}")))
    }

    pub fn from_reader<R: Read>(reader: R) -> GenResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| GenError::invalid_input(format!("cannot decode forecast document: {e}")))
    }

    /// The chosen alternative. A document without any is malformed.
    pub fn first_solution(&self) -> GenResult<&[ForecastBlock]> {
        self.solutions
            .first()
            .map(Vec::as_slice)
            .ok_or_else(|| GenError::invalid_input("document contains no solutions"))
    }

    /// Blocks of the first solution whose date equals `target_date` exactly,
    /// in document order. No match is not an error.
    pub fn blocks_for_date(&self, target_date: &str) -> GenResult<Vec<ForecastBlock>> {
        let blocks: Vec<ForecastBlock> = self
            .first_solution()?
            .iter()
            .filter(|b| b.date == target_date)
            .cloned()
            .collect();
        if blocks.is_empty() {
            log::warn!("no forecast blocks match date {target_date}");
        }
        Ok(blocks)
    }
}
