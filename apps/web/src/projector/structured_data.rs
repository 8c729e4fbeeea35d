//! Structured-data projection — the schema.org `ProfilePage` object embedded
//! in the page head for search engines. Every absent source field is omitted
//! from the output, never serialized as null or an empty string.

use serde::Serialize;

use crate::models::profile::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub page_type: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub entity_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub works_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub knows_language: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub knows_about: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alumni_of: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub entity_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

pub fn to_structured_data(record: &ProfileRecord) -> StructuredData {
    let name = match (
        nonempty(record.first_name.as_deref()),
        nonempty(record.last_name.as_deref()),
    ) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
        (None, None) => None,
    };
    let headline = nonempty(record.headline.as_deref()).map(String::from);

    StructuredData {
        context: "https://schema.org",
        page_type: "ProfilePage",
        main_entity: Person {
            entity_type: "Person",
            name,
            job_title: headline.clone(),
            headline,
            image: nonempty(record.image.as_deref()).map(String::from),
            works_for: record
                .job_experience
                .first()
                .and_then(|job| job.company.as_ref())
                .and_then(|company| nonempty(company.name.as_deref()))
                .map(String::from),
            description: nonempty(record.summary.as_deref()).map(String::from),
            knows_language: record
                .languages
                .iter()
                .filter_map(|lang| nonempty(lang.language.as_deref()))
                .map(String::from)
                .collect(),
            knows_about: record
                .skills
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect(),
            alumni_of: record
                .education
                .iter()
                .filter_map(|edu| edu.company.as_ref())
                .filter_map(|company| nonempty(company.name.as_deref()))
                .map(String::from)
                .collect(),
            address: postal_address(record),
        },
    }
}

fn postal_address(record: &ProfileRecord) -> Option<PostalAddress> {
    let location = record.location.as_ref()?;
    let locality = nonempty(location.address.as_deref()).map(String::from);
    let country = nonempty(location.country_code.as_deref()).map(String::from);
    if locality.is_none() && country.is_none() {
        return None;
    }
    Some(PostalAddress {
        entity_type: "PostalAddress",
        address_locality: locality,
        address_country: country,
    })
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
