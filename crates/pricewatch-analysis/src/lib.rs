//! Cross-retailer price-spread analysis.

mod engine;

pub use engine::{
    measure_spread, run_analysis, AnalysisError, AnalysisSummary, Spread, SpreadMeasurement,
    DISCREPANCY_THRESHOLD_PCT,
};
