//! Guidance parser: turns the raw generation-service reply into a validated
//! `GuidanceDocument`, or rejects it with a diagnosis a user can act on.
//!
//! Validation is strict and all-or-nothing. There is no partial acceptance
//! and no defaulting of missing fields: a document either satisfies the
//! whole schema or the run fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Competency classification assigned by the guidance model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CompetencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetencyLevel::Beginner => "Beginner",
            CompetencyLevel::Intermediate => "Intermediate",
            CompetencyLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for CompetencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One phase of the learning roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String,
    pub topics: Vec<String>,
    pub goal: String,
}

/// A recommended course with its platform and pricing type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub name: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub course_type: String,
}

/// The validated guidance document produced from one completed assessment.
/// Immutable once created; a session reset discards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceDocument {
    pub competency_level: CompetencyLevel,
    pub assessment_summary: String,
    pub learning_roadmap: Vec<RoadmapPhase>,
    pub recommended_courses: Vec<CourseRecommendation>,
    pub project_ideas: Vec<String>,
    pub certifications: Vec<String>,
    pub key_skills: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Error)]
pub enum GuidanceParseError {
    #[error("Guidance response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Guidance response is missing or has an invalid field: {field}")]
    SchemaViolation { field: String },
}

/// Parses and validates raw generation output into a `GuidanceDocument`.
///
/// Pipeline: strip one optional markdown code fence, decode as JSON, then
/// validate field by field in schema order. The first violation wins and
/// names the offending field, so a truncated or off-schema reply produces
/// one precise diagnosis rather than a cascade.
pub fn parse_guidance(raw: &str) -> Result<GuidanceDocument, GuidanceParseError> {
    let text = strip_json_fences(raw);
    let value: Value = serde_json::from_str(text)?;
    validate_document(&value)
}

fn validate_document(value: &Value) -> Result<GuidanceDocument, GuidanceParseError> {
    let competency_level = match value.get("competencyLevel").and_then(Value::as_str) {
        Some("Beginner") => CompetencyLevel::Beginner,
        Some("Intermediate") => CompetencyLevel::Intermediate,
        Some("Advanced") => CompetencyLevel::Advanced,
        _ => return Err(violation("competencyLevel")),
    };

    let assessment_summary = get_str(value, "assessmentSummary", "assessmentSummary")?;
    if assessment_summary.trim().is_empty() {
        return Err(violation("assessmentSummary"));
    }

    let raw_phases = value
        .get("learningRoadmap")
        .and_then(Value::as_array)
        .ok_or_else(|| violation("learningRoadmap"))?;
    if raw_phases.is_empty() {
        return Err(violation("learningRoadmap"));
    }
    let mut learning_roadmap = Vec::with_capacity(raw_phases.len());
    for (index, phase) in raw_phases.iter().enumerate() {
        learning_roadmap.push(validate_phase(phase, index)?);
    }

    let raw_courses = value
        .get("recommendedCourses")
        .and_then(Value::as_array)
        .ok_or_else(|| violation("recommendedCourses"))?;
    let mut recommended_courses = Vec::with_capacity(raw_courses.len());
    for (index, course) in raw_courses.iter().enumerate() {
        recommended_courses.push(validate_course(course, index)?);
    }

    let project_ideas = get_string_array(value, "projectIdeas", "projectIdeas", false)?;
    let certifications = get_string_array(value, "certifications", "certifications", true)?;
    let key_skills = get_string_array(value, "keySkills", "keySkills", false)?;
    let resources = get_string_array(value, "resources", "resources", true)?;

    Ok(GuidanceDocument {
        competency_level,
        assessment_summary,
        learning_roadmap,
        recommended_courses,
        project_ideas,
        certifications,
        key_skills,
        resources,
    })
}

fn validate_phase(value: &Value, index: usize) -> Result<RoadmapPhase, GuidanceParseError> {
    let phase = get_str(value, "phase", &format!("learningRoadmap[{index}].phase"))?;
    let duration = get_str(value, "duration", &format!("learningRoadmap[{index}].duration"))?;
    let topics = get_string_array(
        value,
        "topics",
        &format!("learningRoadmap[{index}].topics"),
        false,
    )?;
    let goal = get_str(value, "goal", &format!("learningRoadmap[{index}].goal"))?;

    Ok(RoadmapPhase {
        phase,
        duration,
        topics,
        goal,
    })
}

fn validate_course(value: &Value, index: usize) -> Result<CourseRecommendation, GuidanceParseError> {
    let name = get_str(value, "name", &format!("recommendedCourses[{index}].name"))?;
    let platform = get_str(value, "platform", &format!("recommendedCourses[{index}].platform"))?;
    let course_type = get_str(value, "type", &format!("recommendedCourses[{index}].type"))?;

    Ok(CourseRecommendation {
        name,
        platform,
        course_type,
    })
}

fn violation(field: impl Into<String>) -> GuidanceParseError {
    GuidanceParseError::SchemaViolation {
        field: field.into(),
    }
}

/// A string field on `object`, reported under `path` when missing or not a
/// string.
fn get_str(object: &Value, key: &str, path: &str) -> Result<String, GuidanceParseError> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| violation(path))
}

/// An array-of-strings field on `object`. `allow_empty` controls whether an
/// empty array passes; a non-string element fails either way.
fn get_string_array(
    object: &Value,
    key: &str,
    path: &str,
    allow_empty: bool,
) -> Result<Vec<String>, GuidanceParseError> {
    let items = object
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| violation(path))?;
    if items.is_empty() && !allow_empty {
        return Err(violation(path));
    }
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| violation(path))
        })
        .collect()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from generation output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
