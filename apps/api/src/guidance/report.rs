//! Plain-text report rendering for a generated guidance document.

use chrono::{DateTime, Utc};

use crate::assessment::catalog::Track;
use crate::guidance::parser::GuidanceDocument;

/// Renders the downloadable guidance report.
///
/// Pure and deterministic for a given timestamp; the caller supplies
/// `generated_at` so rendering itself never reads a clock. Resources are
/// intentionally not part of the report.
pub fn format_report(track: Track, document: &GuidanceDocument, generated_at: DateTime<Utc>) -> String {
    let mut report = String::new();

    report.push_str("IT CAREER GUIDANCE REPORT\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));

    report.push_str(&format!("CAREER PATH: {}\n", track.name()));
    report.push_str(&format!(
        "COMPETENCY LEVEL: {}\n\n",
        document.competency_level
    ));

    report.push_str("ASSESSMENT SUMMARY:\n");
    report.push_str(&document.assessment_summary);
    report.push_str("\n\n");

    report.push_str("LEARNING ROADMAP:\n");
    for (index, phase) in document.learning_roadmap.iter().enumerate() {
        report.push_str(&format!(
            "\n{}. {} ({})\n   Goal: {}\n   Topics: {}\n",
            index + 1,
            phase.phase,
            phase.duration,
            phase.goal,
            phase.topics.join(", ")
        ));
    }
    report.push('\n');

    report.push_str("RECOMMENDED COURSES:\n");
    for (index, course) in document.recommended_courses.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} ({}) - {}\n",
            index + 1,
            course.name,
            course.platform,
            course.course_type
        ));
    }
    report.push('\n');

    report.push_str("PROJECT IDEAS:\n");
    for (index, idea) in document.project_ideas.iter().enumerate() {
        report.push_str(&format!("{}. {}\n", index + 1, idea));
    }
    report.push('\n');

    report.push_str(&format!("KEY SKILLS: {}\n\n", document.key_skills.join(", ")));

    report.push_str("CERTIFICATIONS:\n");
    for certification in &document.certifications {
        report.push_str(&format!("- {certification}\n"));
    }

    report
}

/// Filename for the exported report: the track name with spaces replaced by
/// underscores, suffixed `_Guidance.txt`.
pub fn report_filename(track: Track) -> String {
    format!("{}_Guidance.txt", track.name().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::parser::{CompetencyLevel, CourseRecommendation, RoadmapPhase};
    use chrono::TimeZone;

    fn make_document() -> GuidanceDocument {
        GuidanceDocument {
            competency_level: CompetencyLevel::Beginner,
            assessment_summary: "Early-stage learner with a steady weekly commitment.".to_string(),
            learning_roadmap: vec![
                RoadmapPhase {
                    phase: "Foundation".to_string(),
                    duration: "2 months".to_string(),
                    topics: vec!["Spreadsheets".to_string(), "SQL basics".to_string()],
                    goal: "Query data confidently".to_string(),
                },
                RoadmapPhase {
                    phase: "Intermediate".to_string(),
                    duration: "3 months".to_string(),
                    topics: vec!["Dashboards".to_string()],
                    goal: "Build reporting dashboards".to_string(),
                },
                RoadmapPhase {
                    phase: "Advanced".to_string(),
                    duration: "3 months".to_string(),
                    topics: vec!["Statistics".to_string()],
                    goal: "Run end-to-end analyses".to_string(),
                },
            ],
            recommended_courses: vec![CourseRecommendation {
                name: "Data Analysis Fundamentals".to_string(),
                platform: "Coursera".to_string(),
                course_type: "Free".to_string(),
            }],
            project_ideas: vec!["Sales dashboard".to_string(), "Survey analysis".to_string()],
            certifications: vec!["Google Data Analytics".to_string()],
            key_skills: vec!["SQL".to_string(), "Excel".to_string()],
            resources: vec!["r/dataanalysis".to_string()],
        }
    }

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_report_header_and_identity_lines() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        assert!(report.starts_with("IT CAREER GUIDANCE REPORT\n"));
        assert!(report.contains("Generated: 2025-03-14 09:30\n"));
        assert!(report.contains("CAREER PATH: Data Analyst\n"));
        assert!(report.contains("COMPETENCY LEVEL: Beginner\n"));
    }

    #[test]
    fn test_roadmap_phases_are_numbered_in_order() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        let first = report.find("1. Foundation (2 months)").unwrap();
        let second = report.find("2. Intermediate (3 months)").unwrap();
        let third = report.find("3. Advanced (3 months)").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_phase_body_lines_are_indented() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        assert!(report.contains("   Goal: Query data confidently\n"));
        assert!(report.contains("   Topics: Spreadsheets, SQL basics\n"));
    }

    #[test]
    fn test_courses_render_name_platform_and_type() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        assert!(report.contains("1. Data Analysis Fundamentals (Coursera) - Free\n"));
    }

    #[test]
    fn test_project_ideas_are_enumerated() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        assert!(report.contains("PROJECT IDEAS:\n1. Sales dashboard\n2. Survey analysis\n"));
    }

    #[test]
    fn test_key_skills_are_comma_joined() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        assert!(report.contains("KEY SKILLS: SQL, Excel\n"));
    }

    #[test]
    fn test_certifications_use_dashed_list() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        assert!(report.contains("CERTIFICATIONS:\n- Google Data Analytics\n"));
    }

    #[test]
    fn test_resources_are_not_rendered() {
        let report = format_report(Track::DataAnalyst, &make_document(), fixed_timestamp());
        assert!(!report.contains("r/dataanalysis"));
        assert!(!report.contains("RESOURCES"));
    }

    #[test]
    fn test_rendering_is_deterministic_for_a_fixed_timestamp() {
        let document = make_document();
        let first = format_report(Track::DataAnalyst, &document, fixed_timestamp());
        let second = format_report(Track::DataAnalyst, &document, fixed_timestamp());
        assert_eq!(first, second);
    }

    #[test]
    fn test_filename_replaces_spaces_with_underscores() {
        assert_eq!(
            report_filename(Track::DataAnalyst),
            "Data_Analyst_Guidance.txt"
        );
        assert_eq!(
            report_filename(Track::FullStackWebDeveloper),
            "Full_Stack_Web_Developer_Guidance.txt"
        );
    }

    #[test]
    fn test_filename_keeps_non_space_punctuation() {
        assert_eq!(report_filename(Track::UiUxDeveloper), "UI/UX_Developer_Guidance.txt");
    }
}
