//! Assessment session: the state machine that walks one user from track
//! selection through the fixed question sequence to a completed run.
//!
//! Phase is always derived from the session data, never stored separately,
//! so the two can never disagree.

use serde::Serialize;
use thiserror::Error;

use crate::assessment::catalog::{questions_for, Question, Track};

/// Errors raised by session state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Answer '{answer}' is not one of the offered options")]
    InvalidOption { answer: String },

    #[error("A career track has already been chosen for this session")]
    TrackAlreadyChosen,

    #[error("No question is awaiting an answer")]
    NotAnswering,

    #[error("The assessment is not complete yet")]
    NotComplete,
}

/// Where a session currently is in the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    SelectingTrack,
    Answering,
    Complete,
}

/// One user's walk through the assessment.
///
/// Invariants: the cursor is always a valid question index while answering
/// and equals the question count once complete; answers are dense, with an
/// entry for every index below the cursor and nothing beyond it; every
/// stored answer is one of its question's offered options.
///
/// Each session also carries a run id. `choose_track` and `reset` both bump
/// it, so two runs of the same session never share an id even when they
/// pick the same track.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    track: Option<Track>,
    questions: Vec<Question>,
    answers: Vec<String>,
    cursor: usize,
    run: u64,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            track: None,
            questions: Vec::new(),
            answers: Vec::new(),
            cursor: 0,
            run: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.track.is_none() {
            Phase::SelectingTrack
        } else if self.cursor >= self.questions.len() {
            Phase::Complete
        } else {
            Phase::Answering
        }
    }

    pub fn track(&self) -> Option<Track> {
        self.track
    }

    /// Identity of the current run. Bumped by `choose_track` and `reset`,
    /// never reused within a session.
    pub fn run(&self) -> u64 {
        self.run
    }

    /// The materialized question set. Empty until a track is chosen.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The stored answer for a question index, if one has been given.
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    /// (answered, total) counts for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.questions.len())
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    /// Locks in the career track and materializes its question set.
    /// Legal only before a track has been chosen.
    pub fn choose_track(&mut self, track: Track) -> Result<(), SessionError> {
        if self.track.is_some() {
            return Err(SessionError::TrackAlreadyChosen);
        }
        self.track = Some(track);
        self.questions = questions_for(track);
        self.answers.clear();
        self.cursor = 0;
        self.run += 1;
        Ok(())
    }

    /// The question currently awaiting an answer.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        if self.phase() != Phase::Answering {
            return Err(SessionError::NotAnswering);
        }
        Ok(&self.questions[self.cursor])
    }

    /// Records an answer to the current question and advances the cursor.
    /// An answer that is not among the question's options is rejected and
    /// leaves the session untouched.
    pub fn submit_answer(&mut self, answer: &str) -> Result<(), SessionError> {
        let question = *self.current_question()?;
        if !question.options.contains(&answer) {
            return Err(SessionError::InvalidOption {
                answer: answer.to_string(),
            });
        }
        self.answers.push(answer.to_string());
        self.cursor += 1;
        Ok(())
    }

    /// Returns the session to track selection, discarding the track and
    /// every collected answer. The run id survives and is bumped.
    pub fn reset(&mut self) {
        let run = self.run;
        *self = Self::new();
        self.run = run + 1;
    }
}
