//! Built-in sample dataset.
//!
//! Everything here is `static`: built at compile time, shared read-only by
//! every request task, never mutated.
//!
//! The trailing `2023-01` / `2023-02` visitor records repeat earlier months
//! without `avg_stay_days`. They are served verbatim.

use crate::model::{
    AgeGroupShare, Destination, MonthlyVisitors, PurposeShare, StatusMessage, VisitorDemographics,
};

pub static STATUS: StatusMessage = StatusMessage {
    message: "Tourism API is running",
};

pub static MONTHLY_VISITORS: &[MonthlyVisitors] = &[
    MonthlyVisitors {
        month: "2023-01",
        visitors: 45_000,
        domestic: 30_000,
        international: 15_000,
        avg_stay_days: Some(4.2),
    },
    MonthlyVisitors {
        month: "2023-02",
        visitors: 48_000,
        domestic: 32_000,
        international: 16_000,
        avg_stay_days: Some(4.5),
    },
    MonthlyVisitors {
        month: "2023-03",
        visitors: 52_000,
        domestic: 35_000,
        international: 17_000,
        avg_stay_days: Some(4.8),
    },
    MonthlyVisitors {
        month: "2023-04",
        visitors: 55_000,
        domestic: 37_000,
        international: 18_000,
        avg_stay_days: Some(5.0),
    },
    MonthlyVisitors {
        month: "2023-05",
        visitors: 60_000,
        domestic: 40_000,
        international: 20_000,
        avg_stay_days: Some(5.2),
    },
    MonthlyVisitors {
        month: "2023-06",
        visitors: 75_000,
        domestic: 50_000,
        international: 25_000,
        avg_stay_days: Some(5.5),
    },
    MonthlyVisitors {
        month: "2023-01",
        visitors: 45_000,
        domestic: 30_000,
        international: 15_000,
        avg_stay_days: None,
    },
    MonthlyVisitors {
        month: "2023-02",
        visitors: 48_000,
        domestic: 32_000,
        international: 16_000,
        avg_stay_days: None,
    },
];

pub static DEMOGRAPHICS: VisitorDemographics = VisitorDemographics {
    age_groups: &[
        AgeGroupShare { group: "18-24", percentage: 15 },
        AgeGroupShare { group: "25-34", percentage: 30 },
        AgeGroupShare { group: "35-44", percentage: 25 },
        AgeGroupShare { group: "45-54", percentage: 20 },
        AgeGroupShare { group: "55+", percentage: 10 },
    ],
    purpose: &[
        PurposeShare { kind: "Leisure", percentage: 65 },
        PurposeShare { kind: "Business", percentage: 15 },
        PurposeShare { kind: "Family Visit", percentage: 12 },
        PurposeShare { kind: "Education", percentage: 8 },
    ],
};

pub static POPULAR_DESTINATIONS: &[Destination] = &[
    Destination { name: "Banff National Park", visitors: 120_000, rating: 4.8 },
    Destination { name: "Lake Louise", visitors: 90_000, rating: 4.9 },
    Destination { name: "Jasper National Park", visitors: 85_000, rating: 4.7 },
];
