//! HTML rendering — minijinja templates embedded at compile time.

use minijinja::{context, Environment};

use crate::errors::AppError;
use crate::projector::{PageModel, StructuredData};

pub fn build_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("profile.html", include_str!("templates/profile.html"))?;
    env.add_template("not_found.html", include_str!("templates/not_found.html"))?;
    Ok(env)
}

/// Renders the portfolio page from a projected page model plus the
/// structured-data object, pre-serialized for the `ld+json` script block.
pub fn render_profile(
    env: &Environment<'static>,
    page: &PageModel,
    structured_data: &StructuredData,
) -> Result<String, AppError> {
    let structured_json =
        serde_json::to_string(structured_data).map_err(anyhow::Error::from)?;
    let template = env.get_template("profile.html")?;
    let html = template.render(context! {
        page => page,
        structured_data => structured_json,
    })?;
    Ok(html)
}

pub fn render_not_found(env: &Environment<'static>) -> Result<String, minijinja::Error> {
    env.get_template("not_found.html")?.render(context! {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Company, JobExperience, Language, Position, ProfileRecord};
    use crate::projector::{to_structured_data, ProjectorOptions};

    fn render(record: &ProfileRecord, opts: &ProjectorOptions) -> String {
        let env = build_environment().unwrap();
        let page = PageModel::project(record, opts);
        render_profile(&env, &page, &to_structured_data(record)).unwrap()
    }

    #[test]
    fn test_templates_compile() {
        build_environment().unwrap();
    }

    #[test]
    fn test_empty_record_renders() {
        let html = render(&ProfileRecord::default(), &ProjectorOptions::default());
        assert!(html.contains("<!doctype html>"));
        // no sections, no nav anchors
        assert!(!html.contains("id=\"experience\""));
        assert!(!html.contains("id=\"about\""));
    }

    #[test]
    fn test_populated_record_renders_sections() {
        let record = ProfileRecord {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
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
            skills: vec!["Mathematics".to_string()],
            ..ProfileRecord::default()
        };
        let html = render(&record, &ProjectorOptions::default());
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("id=\"about\""));
        assert!(html.contains("id=\"experience\""));
        assert!(html.contains("Analytical Engines Ltd"));
        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("schema.org"));
    }

    #[test]
    fn test_meter_toggled_by_option() {
        let record = ProfileRecord {
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
            ..ProfileRecord::default()
        };
        let with_meter = render(&record, &ProjectorOptions::default());
        assert!(with_meter.contains("class=\"meter\""));

        let without_meter = render(
            &record,
            &ProjectorOptions {
                show_proficiency_meter: false,
                ..ProjectorOptions::default()
            },
        );
        assert!(!without_meter.contains("class=\"meter\""));
        assert!(without_meter.contains("Fluent"));
    }

    #[test]
    fn test_summary_is_html_escaped() {
        let record = ProfileRecord {
            summary: Some("<script>alert(1)</script>".to_string()),
            ..ProfileRecord::default()
        };
        let html = render(&record, &ProjectorOptions::default());
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_not_found_renders() {
        let env = build_environment().unwrap();
        let html = render_not_found(&env).unwrap();
        assert!(html.contains("404"));
    }
}
