use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// A job listing for the simple job postings batch-create operation.
///
/// Every field is caller supplied. `Default` gives empty values so that
/// callers can use struct update syntax for the fields they care about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// URN of the organization the job belongs to.
    pub integration_context: String,

    pub company_apply_url: String,

    pub description: String,

    /// URN of the employment status, e.g.
    /// `urn:li:employmentStatus:FULL_TIME`.
    pub employment_status: String,

    /// The id of the posting in the partner's own system.
    pub external_job_posting_id: String,

    /// Posting time in milliseconds since the epoch.
    pub listed_at: i64,

    pub job_posting_operation_type: JobPostingOperationType,

    pub title: String,

    pub location: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub workplace_types: Vec<String>,
}

/// The payload of the batch-create operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPostingBatch {
    pub elements: Vec<JobPosting>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPostingOperationType {
    #[default]
    Create,
    Update,
    Renew,
    Close,
}
