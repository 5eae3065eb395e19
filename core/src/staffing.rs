//! Staffing window builder: forecast blocks -> required headcount windows.

use crate::{
    block::Block,
    clock::{ReferenceClock, Timestamp},
    error::{GenError, GenResult},
    forecast::ForecastBlock,
    types::Headcount,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequiredWorkerWindow {
    pub start: Timestamp,
    pub end: Timestamp,
    pub count: Headcount,
}

/// Windows in input order, plus the distinct dates they cover in
/// first-occurrence order. The dates seed the worker pool simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffingPlan {
    pub windows: Vec<RequiredWorkerWindow>,
    pub dates: Vec<NaiveDate>,
}

pub fn parse_date(raw: &str) -> GenResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| GenError::invalid_input(format!("bad block date '{raw}': {e}")))
}

pub fn build_window(
    block: &ForecastBlock,
    clock: &ReferenceClock,
) -> GenResult<RequiredWorkerWindow> {
    let kind: Block = block.block.parse()?;
    let date = parse_date(&block.date)?;
    Ok(RequiredWorkerWindow {
        start: clock.at(date, kind.start_time())?,
        end: clock.at(date, kind.end_time())?,
        count: kind.headcount(block.forecast),
    })
}

/// Fails on the first unknown block name; nothing partial is returned.
pub fn build_windows(blocks: &[ForecastBlock], clock: &ReferenceClock) -> GenResult<StaffingPlan> {
    let mut plan = StaffingPlan::default();
    for block in blocks {
        let window = build_window(block, clock)?;
        let date = window.start.date_naive();
        if !plan.dates.contains(&date) {
            plan.dates.push(date);
        }
        log::debug!(
            "window {} {}: {} -> {} workers",
            block.date,
            block.block,
            block.forecast,
            window.count
        );
        plan.windows.push(window);
    }
    Ok(plan)
}
