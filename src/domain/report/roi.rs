//! Indicative ROI projection.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{EmployeeCountBucket, RevenueBucket};
use crate::domain::maturity::MaturityLevel;

/// Expected efficiency gain and payback for the company's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiProjection {
    /// Lower bound of the expected efficiency gain, in percent.
    pub efficiency_gain_min: u8,
    /// Upper bound of the expected efficiency gain, in percent.
    pub efficiency_gain_max: u8,
    pub payback_months: u8,
    pub value_statement: String,
}

impl RoiProjection {
    /// Projects ROI from maturity level and company size.
    ///
    /// Higher maturity means larger gains and faster payback; larger
    /// organizations need longer to roll changes out.
    pub fn project(
        level: MaturityLevel,
        employees: EmployeeCountBucket,
        revenue: RevenueBucket,
    ) -> Self {
        let (min, max) = match level {
            MaturityLevel::AiPreparing => (5, 10),
            MaturityLevel::AiAdopting => (10, 15),
            MaturityLevel::AiGrowing => (15, 20),
            MaturityLevel::AiMaturing => (20, 30),
            MaturityLevel::AiLeading => (25, 35),
        };
        let rollout_months: u8 = match employees {
            EmployeeCountBucket::UpTo10 => 6,
            EmployeeCountBucket::UpTo50 => 8,
            EmployeeCountBucket::UpTo300 | EmployeeCountBucket::Unknown => 10,
            EmployeeCountBucket::UpTo1000 => 12,
            EmployeeCountBucket::Over1000 => 15,
        };
        // Two extra months per level below the top tier.
        let readiness_months = (4 - level.rank() as u8) * 2;

        Self {
            efficiency_gain_min: min,
            efficiency_gain_max: max,
            payback_months: rollout_months + readiness_months,
            value_statement: value_statement(revenue, min, max),
        }
    }
}

fn value_statement(revenue: RevenueBucket, min: u8, max: u8) -> String {
    // Representative annual revenue per bucket, in thousands of USD.
    let representative_k: u32 = match revenue {
        RevenueBucket::Under1M => 500,
        RevenueBucket::From1MTo10M => 5_000,
        RevenueBucket::From10MTo100M => 50_000,
        RevenueBucket::Over100M => 200_000,
        RevenueBucket::Unknown => {
            return format!(
                "A {}-{}% efficiency gain on AI-supported processes typically outweighs tooling and training costs within the payback period",
                min, max
            )
        }
    };
    let per_point_k = representative_k / 100;
    format!(
        "For a company with {}, each point of efficiency gain is worth roughly {} per year, so a {}-{}% gain is worth {} to {}",
        revenue.label(),
        format_k(per_point_k),
        min,
        max,
        format_k(per_point_k * u32::from(min)),
        format_k(per_point_k * u32::from(max)),
    )
}

fn format_k(thousands: u32) -> String {
    if thousands >= 1_000 {
        let millions = f64::from(thousands) / 1_000.0;
        format!("${:.1}M", millions)
    } else {
        format!("${}K", thousands)
    }
}
