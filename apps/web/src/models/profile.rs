//! Upstream profile record — the raw, partially-populated JSON shape.
//!
//! Every field is optional and deserialization is lenient: a missing field is
//! empty, a field of the wrong shape degrades to its default, and a malformed
//! element inside a sequence is dropped while the rest survive. The projector
//! must be able to complete for any structurally valid-but-sparse record.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError, VecSkipError};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub first_name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub last_name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub headline: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub industry: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub location: Option<Location>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub image: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub summary: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub job_experience: Vec<JobExperience>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub education: Vec<Education>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub skills: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub languages: Vec<Language>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub projects: Vec<Project>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub research_papers: Vec<ResearchPaper>,
    /// Platform name -> URL. `BTreeMap` keeps iteration order deterministic.
    #[serde_as(deserialize_as = "DefaultOnError<BTreeMap<_, DefaultOnError>>")]
    pub social_media: BTreeMap<String, String>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub freelance_services: Vec<FreelanceService>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub clients: Vec<Client>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub articles: Vec<Article>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub gallery: Vec<GalleryItem>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub certifications: Vec<Certification>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub awards: Vec<Award>,
    /// Channel name ("email", "phone", ...) -> value.
    #[serde_as(deserialize_as = "DefaultOnError<BTreeMap<_, DefaultOnError>>")]
    pub contact_info: BTreeMap<String, String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub address: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobExperience {
    pub company: Option<Company>,
    pub employment_type: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub positions: Vec<Position>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub function: Option<String>,
    pub tenure: Option<Tenure>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tenure {
    pub start: Option<TenureDate>,
    pub end: Option<TenureDate>,
}

/// A month/year pair. Upstream records have carried these both as strings
/// ("3", "2019") and as numbers (3, 2019), so both shapes are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenureDate {
    #[serde(deserialize_with = "string_or_number")]
    pub month: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub company: Option<Company>,
    pub subject: Option<String>,
    pub tenure: Option<Tenure>,
    pub course_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: Option<String>,
    pub proficiency: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchPaper {
    pub title: Option<String>,
    pub publication: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreelanceService {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ongoing: Option<bool>,
    #[serde(deserialize_with = "string_or_number")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub title: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub image_url: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub title: Option<String>,
    pub issuer: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year: Option<String>,
    pub description: Option<String>,
}

/// Accepts a JSON string or number as `Some(String)`; anything else
/// (null, objects, arrays, booleans) degrades to `None`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
