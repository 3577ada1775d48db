//! Prompt construction for guidance generation.

use crate::assessment::session::{AssessmentSession, SessionError};

/// Guidance prompt template. Replace `{career}` and `{responses}` before
/// sending. The schema block below is what the parser validates against.
pub const GUIDANCE_PROMPT_TEMPLATE: &str = r#"You are a career guidance counselor. Analyze this student's profile and provide structured guidance.

Career Choice: {career}
Responses:
{responses}

Provide a comprehensive guidance plan in JSON format:
{
  "competencyLevel": "Beginner/Intermediate/Advanced",
  "assessmentSummary": "Brief 2-3 sentence analysis",
  "learningRoadmap": [
    {"phase": "Foundation", "duration": "X months", "topics": ["topic1", "topic2"], "goal": "what to achieve"},
    {"phase": "Intermediate", "duration": "X months", "topics": ["topic1", "topic2"], "goal": "what to achieve"},
    {"phase": "Advanced", "duration": "X months", "topics": ["topic1", "topic2"], "goal": "what to achieve"}
  ],
  "recommendedCourses": [
    {"name": "Course name", "platform": "Platform", "type": "Free/Paid"}
  ],
  "projectIdeas": ["project1", "project2", "project3"],
  "certifications": ["cert1", "cert2"],
  "keySkills": ["skill1", "skill2", "skill3"],
  "resources": ["resource1", "resource2"]
}

Respond ONLY with valid JSON, no additional text or markdown formatting."#;

/// Renders a completed session into the generation prompt.
///
/// Deterministic: identical session state always yields the identical
/// string. No timestamps, no randomness. A missing answer renders as "N/A"
/// rather than failing, though a complete session cannot produce one.
pub fn build_guidance_prompt(session: &AssessmentSession) -> Result<String, SessionError> {
    if !session.is_complete() {
        return Err(SessionError::NotComplete);
    }
    let track = session.track().ok_or(SessionError::NotComplete)?;

    let responses = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            format!("{}: {}", question.text, session.answer(index).unwrap_or("N/A"))
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(GUIDANCE_PROMPT_TEMPLATE
        .replace("{career}", track.name())
        .replace("{responses}", &responses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::Track;

    const DATA_ANALYST_ANSWERS: &[&str] = &[
        "Beginner (0-1 year)",
        "10-20 hours",
        "Hands-on projects",
        "6 months",
        "Basic",
        "None",
    ];

    fn make_completed_data_analyst_session() -> AssessmentSession {
        let mut session = AssessmentSession::new();
        session.choose_track(Track::DataAnalyst).unwrap();
        for answer in DATA_ANALYST_ANSWERS {
            session.submit_answer(answer).unwrap();
        }
        session
    }

    #[test]
    fn test_fresh_session_is_rejected() {
        let session = AssessmentSession::new();
        assert_eq!(
            build_guidance_prompt(&session).unwrap_err(),
            SessionError::NotComplete
        );
    }

    #[test]
    fn test_partially_answered_session_is_rejected() {
        let mut session = AssessmentSession::new();
        session.choose_track(Track::DataAnalyst).unwrap();
        session.submit_answer("Beginner (0-1 year)").unwrap();
        assert_eq!(
            build_guidance_prompt(&session).unwrap_err(),
            SessionError::NotComplete
        );
    }

    #[test]
    fn test_prompt_names_the_chosen_career() {
        let session = make_completed_data_analyst_session();
        let prompt = build_guidance_prompt(&session).unwrap();
        assert!(prompt.contains("Career Choice: Data Analyst"));
    }

    #[test]
    fn test_prompt_lists_every_answer_in_question_order() {
        let session = make_completed_data_analyst_session();
        let prompt = build_guidance_prompt(&session).unwrap();

        let mut last_position = 0;
        for (index, question) in session.questions().iter().enumerate() {
            let line = format!("{}: {}", question.text, DATA_ANALYST_ANSWERS[index]);
            let position = prompt
                .find(&line)
                .unwrap_or_else(|| panic!("missing response line '{line}'"));
            assert!(position > last_position, "response lines out of order");
            last_position = position;
        }
    }

    #[test]
    fn test_prompt_demands_json_only_output() {
        let session = make_completed_data_analyst_session();
        let prompt = build_guidance_prompt(&session).unwrap();
        assert!(prompt.contains("Respond ONLY with valid JSON"));
        assert!(prompt.contains("\"competencyLevel\""));
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        let session = make_completed_data_analyst_session();
        let prompt = build_guidance_prompt(&session).unwrap();
        assert!(!prompt.contains("{career}"));
        assert!(!prompt.contains("{responses}"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let session = make_completed_data_analyst_session();
        let first = build_guidance_prompt(&session).unwrap();
        let second = build_guidance_prompt(&session).unwrap();
        assert_eq!(first, second);
    }
}
