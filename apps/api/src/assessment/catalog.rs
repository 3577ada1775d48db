//! Question catalog: the closed set of career tracks and the fixed
//! assessment questions, common and track-specific.
//!
//! All data is static and lookups are pure. Tracks without specific
//! follow-ups fall back to the common set alone.

use serde::{Deserialize, Serialize};

/// The closed set of career tracks a session can assess.
/// Serialized under the exact display names shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "Java Developer")]
    JavaDeveloper,
    #[serde(rename = "MERN Stack Developer")]
    MernStackDeveloper,
    #[serde(rename = "Full Stack Web Developer")]
    FullStackWebDeveloper,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Machine Learning Engineer")]
    MachineLearningEngineer,
    #[serde(rename = "Deep Learning Specialist")]
    DeepLearningSpecialist,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Cybersecurity Specialist")]
    CybersecuritySpecialist,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Cloud Engineer")]
    CloudEngineer,
    #[serde(rename = "Mobile App Developer")]
    MobileAppDeveloper,
    #[serde(rename = "UI/UX Developer")]
    UiUxDeveloper,
}

impl Track {
    /// Every track, in the order the selection page presents them.
    pub const ALL: &'static [Track] = &[
        Track::JavaDeveloper,
        Track::MernStackDeveloper,
        Track::FullStackWebDeveloper,
        Track::DataScientist,
        Track::MachineLearningEngineer,
        Track::DeepLearningSpecialist,
        Track::DataAnalyst,
        Track::CybersecuritySpecialist,
        Track::DevOpsEngineer,
        Track::CloudEngineer,
        Track::MobileAppDeveloper,
        Track::UiUxDeveloper,
    ];

    /// Display name, identical to the serde wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Track::JavaDeveloper => "Java Developer",
            Track::MernStackDeveloper => "MERN Stack Developer",
            Track::FullStackWebDeveloper => "Full Stack Web Developer",
            Track::DataScientist => "Data Scientist",
            Track::MachineLearningEngineer => "Machine Learning Engineer",
            Track::DeepLearningSpecialist => "Deep Learning Specialist",
            Track::DataAnalyst => "Data Analyst",
            Track::CybersecuritySpecialist => "Cybersecurity Specialist",
            Track::DevOpsEngineer => "DevOps Engineer",
            Track::CloudEngineer => "Cloud Engineer",
            Track::MobileAppDeveloper => "Mobile App Developer",
            Track::UiUxDeveloper => "UI/UX Developer",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single assessment question with its fixed answer options.
/// Options are ordered, unique, and non-empty for every catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [&'static str],
}

/// Questions asked for every track, in presentation order.
pub const COMMON_QUESTIONS: &[Question] = &[
    Question {
        text: "What's your current programming experience level?",
        options: &[
            "Beginner (0-1 year)",
            "Intermediate (1-3 years)",
            "Advanced (3+ years)",
            "Expert (5+ years)",
        ],
    },
    Question {
        text: "How much time can you dedicate weekly to learning?",
        options: &["5-10 hours", "10-20 hours", "20-30 hours", "30+ hours"],
    },
    Question {
        text: "What's your preferred learning style?",
        options: &[
            "Video tutorials",
            "Hands-on projects",
            "Reading documentation",
            "Interactive courses",
        ],
    },
    Question {
        text: "What's your target timeline to job-ready?",
        options: &["3 months", "6 months", "1 year", "2+ years"],
    },
];

const JAVA_QUESTIONS: &[Question] = &[
    Question {
        text: "Experience with Java?",
        options: &["None", "Basic syntax", "OOP concepts", "Spring framework"],
    },
    Question {
        text: "Database knowledge?",
        options: &["None", "SQL basics", "Advanced SQL", "NoSQL too"],
    },
];

const MERN_QUESTIONS: &[Question] = &[
    Question {
        text: "JavaScript proficiency?",
        options: &["Beginner", "ES6 comfortable", "Advanced patterns", "Expert"],
    },
    Question {
        text: "React experience?",
        options: &["None", "Basic components", "Hooks & state", "Advanced patterns"],
    },
];

const DATA_SCIENTIST_QUESTIONS: &[Question] = &[
    Question {
        text: "Python/R knowledge?",
        options: &["None", "Basic", "Libraries (Pandas/NumPy)", "Advanced"],
    },
    Question {
        text: "Statistics background?",
        options: &["None", "Basic", "Intermediate", "Strong"],
    },
];

const ML_ENGINEER_QUESTIONS: &[Question] = &[
    Question {
        text: "ML algorithms understanding?",
        options: &["None", "Basics", "Implemented some", "Deep knowledge"],
    },
    Question {
        text: "Framework experience?",
        options: &["None", "Scikit-learn", "TensorFlow/PyTorch", "All"],
    },
];

const CYBERSECURITY_QUESTIONS: &[Question] = &[
    Question {
        text: "Network fundamentals?",
        options: &["None", "Basic", "Intermediate", "Advanced"],
    },
    Question {
        text: "Security tools knowledge?",
        options: &["None", "Basic tools", "Pen-testing", "Advanced"],
    },
];

const FULL_STACK_QUESTIONS: &[Question] = &[
    Question {
        text: "Frontend experience?",
        options: &["None", "HTML/CSS", "JavaScript frameworks", "Expert"],
    },
    Question {
        text: "Backend knowledge?",
        options: &["None", "Basic", "APIs & databases", "Microservices"],
    },
];

const DATA_ANALYST_QUESTIONS: &[Question] = &[
    Question {
        text: "Excel/SQL proficiency?",
        options: &["None", "Basic", "Intermediate", "Advanced"],
    },
    Question {
        text: "Data visualization tools?",
        options: &["None", "Basic charts", "Tableau/PowerBI", "Expert"],
    },
];

/// Track-specific follow-up questions. Tracks not covered here carry none
/// and assess on the common questions alone.
pub fn specific_questions(track: Track) -> &'static [Question] {
    match track {
        Track::JavaDeveloper => JAVA_QUESTIONS,
        Track::MernStackDeveloper => MERN_QUESTIONS,
        Track::DataScientist => DATA_SCIENTIST_QUESTIONS,
        Track::MachineLearningEngineer => ML_ENGINEER_QUESTIONS,
        Track::CybersecuritySpecialist => CYBERSECURITY_QUESTIONS,
        Track::FullStackWebDeveloper => FULL_STACK_QUESTIONS,
        Track::DataAnalyst => DATA_ANALYST_QUESTIONS,
        Track::DeepLearningSpecialist
        | Track::DevOpsEngineer
        | Track::CloudEngineer
        | Track::MobileAppDeveloper
        | Track::UiUxDeveloper => &[],
    }
}

/// The full question set for a track: the common questions followed by any
/// track-specific ones. Order is fixed for the life of the catalog.
pub fn questions_for(track: Track) -> Vec<Question> {
    let mut questions = COMMON_QUESTIONS.to_vec();
    questions.extend_from_slice(specific_questions(track));
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_lists_every_track_once() {
        assert_eq!(Track::ALL.len(), 12);
        let unique: HashSet<_> = Track::ALL.iter().collect();
        assert_eq!(unique.len(), 12, "duplicate track in Track::ALL");
    }

    #[test]
    fn test_track_serde_uses_display_names() {
        for track in Track::ALL {
            let json = serde_json::to_string(track).unwrap();
            assert_eq!(json, format!("\"{}\"", track.name()));
            let back: Track = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *track);
        }
    }

    #[test]
    fn test_data_analyst_deserializes_from_display_name() {
        let track: Track = serde_json::from_str("\"Data Analyst\"").unwrap();
        assert_eq!(track, Track::DataAnalyst);
    }

    #[test]
    fn test_unknown_track_name_fails_to_deserialize() {
        let result: Result<Track, _> = serde_json::from_str("\"Astronaut\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_every_track_starts_with_common_questions() {
        for track in Track::ALL {
            let questions = questions_for(*track);
            assert!(questions.len() >= COMMON_QUESTIONS.len());
            assert_eq!(
                &questions[..COMMON_QUESTIONS.len()],
                COMMON_QUESTIONS,
                "common questions must come first for {track}"
            );
        }
    }

    #[test]
    fn test_tracks_with_followups_get_six_questions() {
        for track in [
            Track::JavaDeveloper,
            Track::MernStackDeveloper,
            Track::DataScientist,
            Track::MachineLearningEngineer,
            Track::CybersecuritySpecialist,
            Track::FullStackWebDeveloper,
            Track::DataAnalyst,
        ] {
            assert_eq!(questions_for(track).len(), 6, "expected 4 common + 2 for {track}");
        }
    }

    #[test]
    fn test_fallback_tracks_get_common_questions_only() {
        for track in [
            Track::DeepLearningSpecialist,
            Track::DevOpsEngineer,
            Track::CloudEngineer,
            Track::MobileAppDeveloper,
            Track::UiUxDeveloper,
        ] {
            assert_eq!(questions_for(track), COMMON_QUESTIONS.to_vec());
        }
    }

    #[test]
    fn test_question_options_are_nonempty_and_unique() {
        for track in Track::ALL {
            for question in questions_for(*track) {
                assert!(!question.text.is_empty());
                assert!(
                    !question.options.is_empty(),
                    "question '{}' has no options",
                    question.text
                );
                let unique: HashSet<_> = question.options.iter().collect();
                assert_eq!(
                    unique.len(),
                    question.options.len(),
                    "duplicate option in '{}'",
                    question.text
                );
            }
        }
    }
}
