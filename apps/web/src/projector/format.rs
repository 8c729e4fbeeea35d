//! Display formatting — small pure helpers shared by the page model.

use crate::models::profile::{Client, Tenure, TenureDate};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First character of each name part. Missing parts contribute nothing, so a
/// fully anonymous record yields an empty string.
pub fn initials(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let mut out = String::new();
    for part in [first_name, last_name] {
        if let Some(c) = part.and_then(|p| p.chars().next()) {
            out.push(c);
        }
    }
    out
}

/// Renders a job tenure as `"Mar/2019 - Present"`.
///
/// A date segment renders only when both month and year are present and the
/// month parses to 1..=12; otherwise the segment is empty (start) or
/// `"Present"` (end). A missing start leaves a bare `"- <end>"`.
pub fn format_tenure(tenure: &Tenure) -> String {
    let start = tenure
        .start
        .as_ref()
        .and_then(format_month_year)
        .unwrap_or_default();
    let end = tenure
        .end
        .as_ref()
        .and_then(format_month_year)
        .unwrap_or_else(|| "Present".to_string());
    format!("{start} - {end}").trim_start().to_string()
}

fn format_month_year(date: &TenureDate) -> Option<String> {
    let year = date.year.as_deref().filter(|y| !y.is_empty())?;
    let month = date
        .month
        .as_deref()
        .and_then(|m| m.trim().parse::<usize>().ok())
        .filter(|m| (1..=12).contains(m))?;
    Some(format!("{}/{year}", MONTH_NAMES[month - 1]))
}

/// Renders an education tenure from year-only dates: `"2015 - 2019"`,
/// `"2015 - Present"`, `"- 2019"`, or empty when neither year is present.
pub fn format_education_tenure(tenure: &Tenure) -> String {
    let start_year = year_of(tenure.start.as_ref());
    let end_year = year_of(tenure.end.as_ref());

    match (start_year, end_year) {
        (None, None) => String::new(),
        (Some(start), Some(end)) => format!("{start} - {end}"),
        (Some(start), None) => format!("{start} - Present"),
        (None, Some(end)) => format!("- {end}"),
    }
}

fn year_of(date: Option<&TenureDate>) -> Option<&str> {
    date.and_then(|d| d.year.as_deref()).filter(|y| !y.is_empty())
}

/// Maps a proficiency label to a meter width. Exact, case-sensitive tiers;
/// any unrecognized or missing label falls to the lowest bar.
pub fn proficiency_percent(label: Option<&str>) -> u8 {
    match label {
        Some("Native") => 100,
        Some("Fluent") => 90,
        Some("Professional") => 75,
        Some("Intermediate") => 50,
        _ => 25,
    }
}

/// Derives a client's status label. `ongoing` wins over an end date.
pub fn client_status(client: &Client) -> &'static str {
    if client.ongoing == Some(true) {
        "Ongoing"
    } else if client.end_date.as_deref().is_some_and(|d| !d.is_empty()) {
        "Completed"
    } else {
        "Past Client"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: Option<&str>, year: Option<&str>) -> TenureDate {
        TenureDate {
            month: month.map(String::from),
            year: year.map(String::from),
        }
    }

    #[test]
    fn test_initials_both_names() {
        assert_eq!(initials(Some("Ada"), Some("Lovelace")), "AL");
    }

    #[test]
    fn test_initials_missing_parts() {
        assert_eq!(initials(None, None), "");
        assert_eq!(initials(Some("Ada"), None), "A");
        assert_eq!(initials(None, Some("Lovelace")), "L");
    }

    #[test]
    fn test_initials_empty_strings() {
        assert_eq!(initials(Some(""), Some("")), "");
    }

    #[test]
    fn test_tenure_start_only_renders_present_end() {
        let tenure = Tenure {
            start: Some(date(Some("3"), Some("2019"))),
            end: Some(TenureDate::default()),
        };
        assert_eq!(format_tenure(&tenure), "Mar/2019 - Present");
    }

    #[test]
    fn test_tenure_full_range() {
        let tenure = Tenure {
            start: Some(date(Some("1"), Some("2018"))),
            end: Some(date(Some("12"), Some("2021"))),
        };
        assert_eq!(format_tenure(&tenure), "Jan/2018 - Dec/2021");
    }

    #[test]
    fn test_tenure_absent_start_keeps_bare_end() {
        let tenure = Tenure {
            start: None,
            end: Some(date(Some("6"), Some("2020"))),
        };
        assert_eq!(format_tenure(&tenure), "- Jun/2020");
    }

    #[test]
    fn test_tenure_empty_renders_bare_present() {
        assert_eq!(format_tenure(&Tenure::default()), "- Present");
    }

    #[test]
    fn test_tenure_month_accepts_numeric_string_only_in_range() {
        let out_of_range = Tenure {
            start: Some(date(Some("13"), Some("2019"))),
            end: None,
        };
        assert_eq!(format_tenure(&out_of_range), "- Present");

        let garbage = Tenure {
            start: Some(date(Some("March"), Some("2019"))),
            end: None,
        };
        assert_eq!(format_tenure(&garbage), "- Present");
    }

    #[test]
    fn test_tenure_month_without_year_is_empty_segment() {
        let tenure = Tenure {
            start: Some(date(Some("3"), None)),
            end: None,
        };
        assert_eq!(format_tenure(&tenure), "- Present");
    }

    #[test]
    fn test_education_tenure_both_years() {
        let tenure = Tenure {
            start: Some(date(None, Some("2015"))),
            end: Some(date(None, Some("2019"))),
        };
        assert_eq!(format_education_tenure(&tenure), "2015 - 2019");
    }

    #[test]
    fn test_education_tenure_open_ended() {
        let tenure = Tenure {
            start: Some(date(None, Some("2015"))),
            end: None,
        };
        assert_eq!(format_education_tenure(&tenure), "2015 - Present");
    }

    #[test]
    fn test_education_tenure_end_only() {
        let tenure = Tenure {
            start: None,
            end: Some(date(None, Some("2019"))),
        };
        assert_eq!(format_education_tenure(&tenure), "- 2019");
    }

    #[test]
    fn test_education_tenure_empty_renders_nothing() {
        assert_eq!(format_education_tenure(&Tenure::default()), "");
    }

    #[test]
    fn test_proficiency_tiers() {
        assert_eq!(proficiency_percent(Some("Native")), 100);
        assert_eq!(proficiency_percent(Some("Fluent")), 90);
        assert_eq!(proficiency_percent(Some("Professional")), 75);
        assert_eq!(proficiency_percent(Some("Intermediate")), 50);
        assert_eq!(proficiency_percent(Some("Beginner")), 25);
        assert_eq!(proficiency_percent(None), 25);
    }

    #[test]
    fn test_proficiency_is_case_sensitive() {
        assert_eq!(proficiency_percent(Some("native")), 25);
        assert_eq!(proficiency_percent(Some("NATIVE")), 25);
    }

    #[test]
    fn test_client_status_ongoing_wins_over_end_date() {
        let client = Client {
            ongoing: Some(true),
            end_date: Some("2020".to_string()),
            ..Client::default()
        };
        assert_eq!(client_status(&client), "Ongoing");
    }

    #[test]
    fn test_client_status_completed_when_end_date_present() {
        let client = Client {
            end_date: Some("2020".to_string()),
            ..Client::default()
        };
        assert_eq!(client_status(&client), "Completed");
    }

    #[test]
    fn test_client_status_default_is_past_client() {
        assert_eq!(client_status(&Client::default()), "Past Client");
        let explicit_not_ongoing = Client {
            ongoing: Some(false),
            ..Client::default()
        };
        assert_eq!(client_status(&explicit_not_ongoing), "Past Client");
    }
}
