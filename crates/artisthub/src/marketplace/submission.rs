use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for onboarding submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Review status of a prospective artist's application. The status is the only
/// field the dashboard ever mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// An application awaiting (or past) manager review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSubmission {
    pub id: SubmissionId,
    pub name: String,
    pub categories: Vec<String>,
    pub location: String,
    pub fee_range: String,
    pub submitted_at: NaiveDate,
    pub status: SubmissionStatus,
}

/// Completed onboarding form data sent to the gateway. Validation happens
/// caller-side; the gateway accepts any payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub name: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub location: String,
}

/// Acknowledgement returned for a successful application submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub success: bool,
    pub message: String,
}

struct SubmissionSeed {
    id: &'static str,
    name: &'static str,
    categories: &'static [&'static str],
    location: &'static str,
    fee_range: &'static str,
    submitted_at: (i32, u32, u32),
    status: SubmissionStatus,
}

const SUBMISSION_SEEDS: &[SubmissionSeed] = &[
    SubmissionSeed {
        id: "1",
        name: "Michael Brown",
        categories: &["Singers", "Rock"],
        location: "Austin, TX",
        fee_range: "$400-800",
        submitted_at: (2024, 1, 15),
        status: SubmissionStatus::Pending,
    },
    SubmissionSeed {
        id: "2",
        name: "Lisa Wang",
        categories: &["Dancers", "Ballet"],
        location: "Boston, MA",
        fee_range: "$500-1000",
        submitted_at: (2024, 1, 14),
        status: SubmissionStatus::Approved,
    },
    SubmissionSeed {
        id: "3",
        name: "Carlos Mendez",
        categories: &["DJs", "Latin"],
        location: "Phoenix, AZ",
        fee_range: "$300-600",
        submitted_at: (2024, 1, 13),
        status: SubmissionStatus::Pending,
    },
    SubmissionSeed {
        id: "4",
        name: "Dr. Rachel Green",
        categories: &["Speakers", "Technology"],
        location: "Portland, OR",
        fee_range: "$1500-3000",
        submitted_at: (2024, 1, 12),
        status: SubmissionStatus::Approved,
    },
];

/// The static submission list, in insertion order.
pub fn seed_submissions() -> Vec<ArtistSubmission> {
    SUBMISSION_SEEDS
        .iter()
        .map(|seed| {
            let (year, month, day) = seed.submitted_at;
            ArtistSubmission {
                id: SubmissionId(seed.id.to_string()),
                name: seed.name.to_string(),
                categories: seed.categories.iter().map(|s| s.to_string()).collect(),
                location: seed.location.to_string(),
                fee_range: seed.fee_range.to_string(),
                submitted_at: NaiveDate::from_ymd_opt(year, month, day)
                    .unwrap_or(NaiveDate::MIN),
                status: seed.status,
            }
        })
        .collect()
}
