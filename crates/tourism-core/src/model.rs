//! Records served by the API.
//!
//! Field declaration order is the JSON key order. All string fields borrow
//! `'static` data so the whole dataset can live in `static` items.

use serde::Serialize;

/// Visitor counts for one calendar month (`YYYY-MM`).
///
/// `month` is not unique across a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyVisitors {
    pub month: &'static str,
    pub visitors: u64,
    pub domestic: u64,
    pub international: u64,
    /// Omitted from JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_stay_days: Option<f64>,
}

/// Share of visitors in one age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeGroupShare {
    pub group: &'static str,
    pub percentage: u32,
}

/// Share of visitors travelling for one purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurposeShare {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub percentage: u32,
}

/// Percentage breakdowns of the visitor population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitorDemographics {
    pub age_groups: &'static [AgeGroupShare],
    pub purpose: &'static [PurposeShare],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Destination {
    pub name: &'static str,
    pub visitors: u64,
    /// 0.0 ..= 5.0
    pub rating: f64,
}

/// Body of the liveness probe at `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}
