use serde::{Serialize, Deserialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One province's tally. `province_name` is unique across the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ElectionRecord {
    pub id: Uuid,
    pub province_name: String,
    pub candidate_one_votes: i64,
    pub candidate_two_votes: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Submitted body of the create and update forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(rocket::FromForm))]
#[serde(rename_all = "camelCase")]
pub struct ElectionForm {
    #[cfg_attr(feature = "backend", field(name = "provinceName"))]
    pub province_name: String,
    #[cfg_attr(feature = "backend", field(name = "candidateOneVotes"))]
    pub candidate_one_votes: i64,
    #[cfg_attr(feature = "backend", field(name = "candidateTwoVotes"))]
    pub candidate_two_votes: i64,
}

impl ElectionRecord {
    pub fn new(form: &ElectionForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            province_name: form.province_name.clone(),
            candidate_one_votes: form.candidate_one_votes,
            candidate_two_votes: form.candidate_two_votes,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Overwrites the mutable fields. `id` and `created_at` are left alone.
    pub fn apply(&mut self, form: &ElectionForm) {
        self.province_name = form.province_name.clone();
        self.candidate_one_votes = form.candidate_one_votes;
        self.candidate_two_votes = form.candidate_two_votes;
    }
}

impl ElectionForm {
    pub fn new(province_name: impl Into<String>, candidate_one_votes: i64, candidate_two_votes: i64) -> Self {
        Self {
            province_name: province_name.into(),
            candidate_one_votes,
            candidate_two_votes,
        }
    }
}
