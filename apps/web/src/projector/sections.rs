//! Section visibility — one declarative table of `(section, anchor, label,
//! predicate)` tuples drives both the rendered page regions and the
//! navigation links, so adding an optional section never touches the others.

use serde::Serialize;

use crate::models::profile::ProfileRecord;
use crate::projector::{LanguageVisibility, ProjectorOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    About,
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Research,
    Services,
    Clients,
    Articles,
    Gallery,
    Certifications,
    Awards,
    Contact,
}

/// Pure predicate: does this section exist for this record?
pub type VisibilityPredicate = fn(&ProfileRecord, &ProjectorOptions) -> bool;

pub struct SectionSpec {
    pub section: Section,
    pub anchor: &'static str,
    pub label: &'static str,
    pub visible: VisibilityPredicate,
}

pub static SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        section: Section::About,
        anchor: "about",
        label: "About",
        visible: |record, opts| {
            opts.always_show_about || record.summary.as_deref().is_some_and(|s| !s.is_empty())
        },
    },
    SectionSpec {
        section: Section::Experience,
        anchor: "experience",
        label: "Experience",
        visible: |record, _| !record.job_experience.is_empty(),
    },
    SectionSpec {
        section: Section::Education,
        anchor: "education",
        label: "Education",
        visible: |record, _| !record.education.is_empty(),
    },
    SectionSpec {
        section: Section::Skills,
        anchor: "skills",
        label: "Skills",
        visible: |record, _| !record.skills.is_empty(),
    },
    SectionSpec {
        section: Section::Languages,
        anchor: "languages",
        label: "Languages",
        visible: |record, opts| {
            let min = match opts.language_visibility {
                LanguageVisibility::Any => 1,
                LanguageVisibility::Several => 2,
            };
            record.languages.len() >= min
        },
    },
    SectionSpec {
        section: Section::Projects,
        anchor: "projects",
        label: "Projects",
        visible: |record, _| !record.projects.is_empty(),
    },
    SectionSpec {
        section: Section::Research,
        anchor: "research",
        label: "Research",
        visible: |record, _| !record.research_papers.is_empty(),
    },
    SectionSpec {
        section: Section::Services,
        anchor: "services",
        label: "Services",
        visible: |record, _| !record.freelance_services.is_empty(),
    },
    SectionSpec {
        section: Section::Clients,
        anchor: "clients",
        label: "Clients",
        visible: |record, _| !record.clients.is_empty(),
    },
    SectionSpec {
        section: Section::Articles,
        anchor: "articles",
        label: "Articles",
        visible: |record, _| !record.articles.is_empty(),
    },
    SectionSpec {
        section: Section::Gallery,
        anchor: "gallery",
        label: "Gallery",
        visible: |record, _| !record.gallery.is_empty(),
    },
    SectionSpec {
        section: Section::Certifications,
        anchor: "certifications",
        label: "Certifications",
        visible: |record, _| !record.certifications.is_empty(),
    },
    SectionSpec {
        section: Section::Awards,
        anchor: "awards",
        label: "Awards",
        visible: |record, _| !record.awards.is_empty(),
    },
    SectionSpec {
        section: Section::Contact,
        anchor: "contact",
        label: "Contact",
        visible: |record, _| record.contact_info.values().any(|v| !v.is_empty()),
    },
];

pub fn is_visible(section: Section, record: &ProfileRecord, opts: &ProjectorOptions) -> bool {
    SECTIONS
        .iter()
        .find(|spec| spec.section == section)
        .is_some_and(|spec| (spec.visible)(record, opts))
}

pub fn visible_sections<'a>(
    record: &'a ProfileRecord,
    opts: &'a ProjectorOptions,
) -> impl Iterator<Item = &'static SectionSpec> + 'a {
    SECTIONS.iter().filter(move |spec| (spec.visible)(record, opts))
}

/// Social links are a footer row, not an anchored section, but follow the
/// same truthy-value rule as contact info.
pub fn social_visible(record: &ProfileRecord) -> bool {
    record.social_media.values().any(|v| !v.is_empty())
}
