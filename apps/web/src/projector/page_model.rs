//! Page model — the derived, render-ready projection of a profile record.
//!
//! Immutable once computed, recomputed on every request, never cached. Every
//! accessor degrades to a blank display value; projecting a record with every
//! optional field absent must always succeed.

use chrono::{DateTime, Datelike, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::models::profile::ProfileRecord;
use crate::projector::format::{
    client_status, format_education_tenure, format_tenure, initials, proficiency_percent,
};
use crate::projector::sections::{social_visible, visible_sections, Section, SECTIONS};
use crate::projector::ProjectorOptions;

/// A renderable image reference: either a same-origin proxy URL for a remote
/// image, or the initials fallback glyph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageRef {
    Proxied { url: String },
    Initials { text: String },
}

/// Routes a remote image URL through the same-origin proxy endpoint. Remote
/// hosts may block hot-linking or require a browser user agent, so pages must
/// never embed the upstream URL directly.
pub fn proxy_url(remote: &str) -> String {
    format!(
        "/api/proxy-image?url={}",
        utf8_percent_encode(remote, NON_ALPHANUMERIC)
    )
}

pub fn resolve_image(remote: Option<&str>, initials: &str) -> ImageRef {
    match remote.filter(|u| !u.is_empty()) {
        Some(url) => ImageRef::Proxied {
            url: proxy_url(url),
        },
        None => ImageRef::Initials {
            text: initials.to_string(),
        },
    }
}

fn proxied(remote: Option<&str>) -> Option<String> {
    remote.filter(|u| !u.is_empty()).map(proxy_url)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

/// One visibility flag per section, computed once from the declarative table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionFlags {
    pub about: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub languages: bool,
    pub projects: bool,
    pub research: bool,
    pub services: bool,
    pub clients: bool,
    pub articles: bool,
    pub gallery: bool,
    pub certifications: bool,
    pub awards: bool,
    pub contact: bool,
    pub social: bool,
}

impl SectionFlags {
    fn compute(record: &ProfileRecord, opts: &ProjectorOptions) -> Self {
        let mut flags = SectionFlags {
            social: social_visible(record),
            ..SectionFlags::default()
        };
        for spec in SECTIONS {
            let visible = (spec.visible)(record, opts);
            match spec.section {
                Section::About => flags.about = visible,
                Section::Experience => flags.experience = visible,
                Section::Education => flags.education = visible,
                Section::Skills => flags.skills = visible,
                Section::Languages => flags.languages = visible,
                Section::Projects => flags.projects = visible,
                Section::Research => flags.research = visible,
                Section::Services => flags.services = visible,
                Section::Clients => flags.clients = visible,
                Section::Articles => flags.articles = visible,
                Section::Gallery => flags.gallery = visible,
                Section::Certifications => flags.certifications = visible,
                Section::Awards => flags.awards = visible,
                Section::Contact => flags.contact = visible,
            }
        }
        flags
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Raw upstream image URL for social-preview cards, if any.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionView {
    pub title: String,
    pub tenure_label: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyView {
    pub name: String,
    pub employment_type: String,
    pub logo: Option<String>,
    pub positions: Vec<PositionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub school: String,
    pub logo: Option<String>,
    pub subject: String,
    pub tenure_label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageView {
    pub name: String,
    pub proficiency: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchView {
    pub title: String,
    pub publication: String,
    pub year: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientView {
    pub name: String,
    pub description: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleView {
    pub title: String,
    pub url: String,
    pub published_at: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView {
    pub image: Option<String>,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationView {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardView {
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEntry {
    pub channel: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub year: i32,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    pub meta: PageMeta,
    pub full_name: String,
    pub initials: String,
    pub headline: String,
    pub industry: String,
    pub location_label: String,
    pub avatar: ImageRef,
    pub nav_links: Vec<NavLink>,
    pub visibility: SectionFlags,
    pub show_proficiency_meter: bool,
    pub about: String,
    pub experience: Vec<CompanyView>,
    pub education: Vec<EducationView>,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageView>,
    pub projects: Vec<ProjectView>,
    pub research: Vec<ResearchView>,
    pub services: Vec<ServiceView>,
    pub clients: Vec<ClientView>,
    pub articles: Vec<ArticleView>,
    pub gallery: Vec<GalleryView>,
    pub certifications: Vec<CertificationView>,
    pub awards: Vec<AwardView>,
    pub social_links: Vec<SocialLink>,
    pub contact: Vec<ContactEntry>,
    pub footer: FooterView,
}

impl PageModel {
    /// Projects a record at the current instant. See [`PageModel::project_at`].
    pub fn project(record: &ProfileRecord, opts: &ProjectorOptions) -> Self {
        Self::project_at(record, opts, Utc::now())
    }

    /// Pure projection: the same record, options, and instant always yield
    /// the same page model.
    pub fn project_at(record: &ProfileRecord, opts: &ProjectorOptions, now: DateTime<Utc>) -> Self {
        let initials = initials(record.first_name.as_deref(), record.last_name.as_deref());
        let full_name = full_name(record);

        PageModel {
            meta: page_meta(record, &full_name),
            avatar: resolve_image(record.image.as_deref(), &initials),
            initials,
            headline: record.headline.clone().unwrap_or_default(),
            industry: record.industry.clone().unwrap_or_default(),
            location_label: location_label(record),
            nav_links: visible_sections(record, opts)
                .map(|spec| NavLink {
                    anchor: spec.anchor,
                    label: spec.label,
                })
                .collect(),
            visibility: SectionFlags::compute(record, opts),
            show_proficiency_meter: opts.show_proficiency_meter,
            about: record.summary.clone().unwrap_or_default(),
            experience: record.job_experience.iter().map(company_view).collect(),
            education: record.education.iter().map(education_view).collect(),
            skills: record.skills.clone(),
            languages: record
                .languages
                .iter()
                .map(|lang| LanguageView {
                    name: lang.language.clone().unwrap_or_default(),
                    proficiency: lang.proficiency.clone().unwrap_or_default(),
                    percent: proficiency_percent(lang.proficiency.as_deref()),
                })
                .collect(),
            projects: record
                .projects
                .iter()
                .map(|p| ProjectView {
                    name: p.name.clone().unwrap_or_default(),
                    description: p.description.clone().unwrap_or_default(),
                    url: p.url.clone().unwrap_or_default(),
                    image: proxied(p.image_url.as_deref()),
                    skills: p.skills.clone(),
                })
                .collect(),
            research: record
                .research_papers
                .iter()
                .map(|r| ResearchView {
                    title: r.title.clone().unwrap_or_default(),
                    publication: r.publication.clone().unwrap_or_default(),
                    year: r.year.clone().unwrap_or_default(),
                    url: r.url.clone().unwrap_or_default(),
                    description: r.description.clone().unwrap_or_default(),
                })
                .collect(),
            services: record
                .freelance_services
                .iter()
                .map(|s| ServiceView {
                    title: s.title.clone().unwrap_or_default(),
                    description: s.description.clone().unwrap_or_default(),
                })
                .collect(),
            clients: record
                .clients
                .iter()
                .map(|c| ClientView {
                    name: c.name.clone().unwrap_or_default(),
                    description: c.description.clone().unwrap_or_default(),
                    status: client_status(c),
                })
                .collect(),
            articles: record
                .articles
                .iter()
                .map(|a| ArticleView {
                    title: a.title.clone().unwrap_or_default(),
                    url: a.url.clone().unwrap_or_default(),
                    published_at: a.published_at.clone().unwrap_or_default(),
                    summary: a.summary.clone().unwrap_or_default(),
                })
                .collect(),
            gallery: record
                .gallery
                .iter()
                .map(|g| GalleryView {
                    image: proxied(g.image_url.as_deref()),
                    caption: g.caption.clone().unwrap_or_default(),
                })
                .collect(),
            certifications: record
                .certifications
                .iter()
                .map(|c| CertificationView {
                    name: c.name.clone().unwrap_or_default(),
                    issuer: c.issuer.clone().unwrap_or_default(),
                    year: c.year.clone().unwrap_or_default(),
                    url: c.url.clone().unwrap_or_default(),
                })
                .collect(),
            awards: record
                .awards
                .iter()
                .map(|a| AwardView {
                    title: a.title.clone().unwrap_or_default(),
                    issuer: a.issuer.clone().unwrap_or_default(),
                    year: a.year.clone().unwrap_or_default(),
                    description: a.description.clone().unwrap_or_default(),
                })
                .collect(),
            social_links: record
                .social_media
                .iter()
                .filter(|(_, url)| !url.is_empty())
                .map(|(platform, url)| SocialLink {
                    platform: platform.clone(),
                    url: url.clone(),
                })
                .collect(),
            contact: record
                .contact_info
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(channel, value)| ContactEntry {
                    channel: channel.clone(),
                    value: value.clone(),
                })
                .collect(),
            footer: FooterView {
                year: now.year(),
                last_updated: last_updated_label(record.updated_at.as_deref()),
            },
            full_name,
        }
    }
}

fn full_name(record: &ProfileRecord) -> String {
    [record.first_name.as_deref(), record.last_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn location_label(record: &ProfileRecord) -> String {
    let Some(location) = record.location.as_ref() else {
        return String::new();
    };
    let address = location.address.as_deref().unwrap_or_default();
    if address.is_empty() {
        return String::new();
    }
    match location.country_code.as_deref().filter(|c| !c.is_empty()) {
        Some(country) => format!("{address}, {country}"),
        None => address.to_string(),
    }
}

fn page_meta(record: &ProfileRecord, full_name: &str) -> PageMeta {
    let title = if full_name.is_empty() {
        "Professional Portfolio".to_string()
    } else {
        format!("{full_name} - Professional Portfolio")
    };
    let description = match record.headline.as_deref().filter(|h| !h.is_empty()) {
        Some(headline) => headline.to_string(),
        None if full_name.is_empty() => "Professional portfolio".to_string(),
        None => format!("Professional portfolio of {full_name}"),
    };
    let keywords = [
        record.first_name.as_deref(),
        record.last_name.as_deref(),
        record.industry.as_deref(),
        Some("portfolio"),
        Some("professional"),
        Some("resume"),
        Some("career"),
    ]
    .into_iter()
    .flatten()
    .map(String::from)
    .chain(record.skills.iter().cloned())
    .filter(|k| !k.is_empty())
    .collect();

    PageMeta {
        title,
        description,
        keywords,
        image: record.image.clone().filter(|i| !i.is_empty()),
    }
}

fn last_updated_label(updated_at: Option<&str>) -> String {
    updated_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Recently".to_string())
}

fn company_view(job: &crate::models::profile::JobExperience) -> CompanyView {
    let company = job.company.as_ref();
    CompanyView {
        name: company
            .and_then(|c| c.name.clone())
            .unwrap_or_default(),
        employment_type: job.employment_type.clone().unwrap_or_default(),
        logo: proxied(company.and_then(|c| c.image_url.as_deref())),
        positions: job
            .positions
            .iter()
            .map(|pos| PositionView {
                title: pos.function.clone().unwrap_or_default(),
                tenure_label: pos
                    .tenure
                    .as_ref()
                    .map(format_tenure)
                    .unwrap_or_default(),
                location: pos.location.clone().unwrap_or_default(),
                description: pos.description.clone().unwrap_or_default(),
                skills: pos.skills.clone(),
            })
            .collect(),
    }
}

fn education_view(edu: &crate::models::profile::Education) -> EducationView {
    let school = edu.company.as_ref();
    EducationView {
        school: school.and_then(|c| c.name.clone()).unwrap_or_default(),
        logo: proxied(school.and_then(|c| c.image_url.as_deref())),
        subject: edu.subject.clone().unwrap_or_default(),
        tenure_label: edu
            .tenure
            .as_ref()
            .map(format_education_tenure)
            .unwrap_or_default(),
        description: edu.course_description.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Company, JobExperience, Language, Location, Position};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap()
    }

    fn sample_record() -> ProfileRecord {
        ProfileRecord {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            headline: Some("Analyst & Metaphysician".to_string()),
            industry: Some("Mathematics".to_string()),
            location: Some(Location {
                address: Some("London".to_string()),
                country_code: Some("UK".to_string()),
            }),
            image: Some("https://media.licdn.com/ada.png".to_string()),
            summary: Some("Notes on the Analytical Engine.".to_string()),
            job_experience: vec![JobExperience {
                company: Some(Company {
                    name: Some("Analytical Engines Ltd".to_string()),
                    image_url: None,
                }),
                employment_type: Some("Full-time".to_string()),
                positions: vec![Position {
                    function: Some("Programmer".to_string()),
                    ..Position::default()
                }],
            }],
            languages: vec![
                Language {
                    language: Some("English".to_string()),
                    proficiency: Some("Native".to_string()),
                },
                Language {
                    language: Some("French".to_string()),
                    proficiency: Some("Fluent".to_string()),
                },
            ],
            skills: vec!["Mathematics".to_string()],
            ..ProfileRecord::default()
        }
    }

    #[test]
    fn test_sparse_record_projects_without_error() {
        let page = PageModel::project_at(
            &ProfileRecord::default(),
            &ProjectorOptions::default(),
            fixed_now(),
        );
        assert_eq!(page.full_name, "");
        assert_eq!(page.initials, "");
        assert_eq!(page.avatar, ImageRef::Initials { text: String::new() });
        assert!(page.nav_links.is_empty());
        assert!(!page.visibility.about);
        assert_eq!(page.footer.last_updated, "Recently");
        assert_eq!(page.meta.title, "Professional Portfolio");
    }

    #[test]
    fn test_projection_is_deterministic() {
        let record = sample_record();
        let opts = ProjectorOptions::default();
        let first = PageModel::project_at(&record, &opts, fixed_now());
        let second = PageModel::project_at(&record, &opts, fixed_now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_avatar_routes_through_proxy() {
        let page = PageModel::project_at(&sample_record(), &ProjectorOptions::default(), fixed_now());
        match &page.avatar {
            ImageRef::Proxied { url } => {
                assert!(url.starts_with("/api/proxy-image?url="));
                // the remote URL must be percent-encoded, not embedded raw
                assert!(!url.contains("https://"));
                assert!(url.contains("https%3A%2F%2F"));
            }
            other => panic!("expected proxied avatar, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_image_falls_back_to_initials() {
        let mut record = sample_record();
        record.image = None;
        let page = PageModel::project_at(&record, &ProjectorOptions::default(), fixed_now());
        assert_eq!(
            page.avatar,
            ImageRef::Initials {
                text: "AL".to_string()
            }
        );
    }

    #[test]
    fn test_hero_and_meta_values() {
        let page = PageModel::project_at(&sample_record(), &ProjectorOptions::default(), fixed_now());
        assert_eq!(page.full_name, "Ada Lovelace");
        assert_eq!(page.location_label, "London, UK");
        assert_eq!(page.meta.title, "Ada Lovelace - Professional Portfolio");
        assert_eq!(page.meta.description, "Analyst & Metaphysician");
        assert!(page.meta.keywords.contains(&"Mathematics".to_string()));
    }

    #[test]
    fn test_languages_get_percentages() {
        let page = PageModel::project_at(&sample_record(), &ProjectorOptions::default(), fixed_now());
        assert_eq!(page.languages[0].percent, 100);
        assert_eq!(page.languages[1].percent, 90);
        assert!(page.visibility.languages);
    }

    #[test]
    fn test_nav_links_match_visibility() {
        let page = PageModel::project_at(&sample_record(), &ProjectorOptions::default(), fixed_now());
        let anchors: Vec<&str> = page.nav_links.iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, vec!["about", "experience", "skills", "languages"]);
    }

    #[test]
    fn test_social_links_skip_empty_urls_in_deterministic_order() {
        let mut record = ProfileRecord::default();
        record
            .social_media
            .insert("twitter".to_string(), "https://t.example/ada".to_string());
        record.social_media.insert("facebook".to_string(), String::new());
        record
            .social_media
            .insert("github".to_string(), "https://gh.example/ada".to_string());

        let page = PageModel::project_at(&record, &ProjectorOptions::default(), fixed_now());
        let platforms: Vec<&str> = page.social_links.iter().map(|l| l.platform.as_str()).collect();
        assert_eq!(platforms, vec!["github", "twitter"]);
    }

    #[test]
    fn test_last_updated_parses_rfc3339() {
        let mut record = ProfileRecord::default();
        record.updated_at = Some("2025-06-30T10:00:00Z".to_string());
        let page = PageModel::project_at(&record, &ProjectorOptions::default(), fixed_now());
        assert_eq!(page.footer.last_updated, "Jun 30, 2025");
    }

    #[test]
    fn test_last_updated_garbage_degrades_to_recently() {
        let mut record = ProfileRecord::default();
        record.updated_at = Some("yesterday".to_string());
        let page = PageModel::project_at(&record, &ProjectorOptions::default(), fixed_now());
        assert_eq!(page.footer.last_updated, "Recently");
    }

    #[test]
    fn test_footer_year_comes_from_clock() {
        let page = PageModel::project_at(&ProfileRecord::default(), &ProjectorOptions::default(), fixed_now());
        assert_eq!(page.footer.year, 2025);
    }
}
