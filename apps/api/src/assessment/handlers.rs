//! Axum route handlers for the assessment flow.
//!
//! Handlers stay thin: each one calls a discrete session operation and
//! serializes the returned state. The UI can always re-render purely from
//! what comes back; no step depends on hidden server-side page state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::catalog::{Question, Track};
use crate::assessment::session::{AssessmentSession, Phase, SessionError};
use crate::assessment::store::SessionEntry;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TrackListResponse {
    pub tracks: &'static [Track],
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub phase: Phase,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub phase: Phase,
    pub track: Option<Track>,
    pub answered: usize,
    pub total_questions: usize,
    pub has_guidance: bool,
}

/// The question currently awaiting an answer, with 1-based progress.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

impl QuestionView {
    fn new(index: usize, total: usize, question: &Question) -> Self {
        Self {
            number: index + 1,
            total,
            text: question.text,
            options: question.options,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChooseTrackRequest {
    pub track: Track,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

/// Outcome of a state transition: the new phase plus the next question,
/// absent once the assessment is complete.
#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub phase: Phase,
    pub next_question: Option<QuestionView>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/tracks
///
/// The closed set of career tracks, in presentation order.
pub async fn handle_list_tracks() -> Json<TrackListResponse> {
    Json(TrackListResponse { tracks: Track::ALL })
}

/// POST /api/v1/sessions
///
/// Creates a fresh session in the track-selection phase.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Json<SessionCreatedResponse> {
    let session_id = state.sessions.create().await;
    info!("Created assessment session {session_id}");
    Json(SessionCreatedResponse {
        session_id,
        phase: Phase::SelectingTrack,
    })
}

/// GET /api/v1/sessions/:id
///
/// Phase, track, and progress for one session.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let entry = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    Ok(Json(session_view(session_id, &entry)))
}

/// POST /api/v1/sessions/:id/track
///
/// Locks in the career track and returns the first question.
pub async fn handle_choose_track(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ChooseTrackRequest>,
) -> Result<Json<StepResponse>, AppError> {
    let outcome = state
        .sessions
        .with_entry(session_id, |entry| {
            entry.session.choose_track(request.track)?;
            Ok::<_, SessionError>(step_response(&entry.session))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    let step = outcome?;
    info!("Session {session_id} chose track '{}'", request.track);
    Ok(Json(step))
}

/// GET /api/v1/sessions/:id/question
///
/// The question currently awaiting an answer.
pub async fn handle_current_question(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<QuestionView>, AppError> {
    let entry = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    let question = entry.session.current_question()?;
    let (answered, total) = entry.session.progress();
    Ok(Json(QuestionView::new(answered, total, question)))
}

/// POST /api/v1/sessions/:id/answers
///
/// Records an answer to the current question. The response carries either
/// the next question or the completion marker.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<StepResponse>, AppError> {
    let outcome = state
        .sessions
        .with_entry(session_id, |entry| {
            entry.session.submit_answer(&request.answer)?;
            Ok::<_, SessionError>(step_response(&entry.session))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    Ok(Json(outcome?))
}

/// POST /api/v1/sessions/:id/reset
///
/// Returns the session to track selection, discarding every answer and any
/// generated guidance.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .with_entry(session_id, |entry| {
            entry.session.reset();
            entry.guidance = None;
            session_view(session_id, entry)
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    info!("Session {session_id} reset");
    Ok(Json(view))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id).await {
        info!("Session {session_id} deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(session_id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn session_not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {session_id} not found"))
}

fn session_view(session_id: Uuid, entry: &SessionEntry) -> SessionView {
    let (answered, total_questions) = entry.session.progress();
    SessionView {
        session_id,
        phase: entry.session.phase(),
        track: entry.session.track(),
        answered,
        total_questions,
        has_guidance: entry.guidance.is_some(),
    }
}

fn step_response(session: &AssessmentSession) -> StepResponse {
    let next_question = match session.current_question() {
        Ok(question) => {
            let (answered, total) = session.progress();
            Some(QuestionView::new(answered, total, question))
        }
        Err(_) => None,
    };
    StepResponse {
        phase: session.phase(),
        next_question,
    }
}
