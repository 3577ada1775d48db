//! Axum route handlers for guidance generation and report download.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::assessment::catalog::Track;
use crate::assessment::handlers::session_not_found;
use crate::assessment::session::SessionError;
use crate::errors::AppError;
use crate::guidance::parser::{parse_guidance, GuidanceDocument};
use crate::guidance::prompts::build_guidance_prompt;
use crate::guidance::report::{format_report, report_filename};
use crate::state::AppState;

/// What the first lock pass decided: hand back the stored document, or run
/// the pipeline with this prompt against this run.
enum Prepared {
    Existing(GuidanceDocument),
    Generate {
        prompt: String,
        track: Track,
        run: u64,
    },
}

/// What the second lock pass found when storing the parsed document.
enum StoreOutcome {
    Stored,
    AlreadyStored(GuidanceDocument),
    StaleRun,
}

/// POST /api/v1/sessions/:id/guidance
///
/// Runs the generation pipeline for a completed assessment: prompt build,
/// one generation call, strict parse, then stores the document on the entry.
/// A session that already holds a document gets the stored one back without
/// another call; regeneration requires a reset.
///
/// The store lock is released before the provider call and re-taken after
/// it. The second pass stores the document only if the session still holds
/// the run the prompt was built from; a reset while the call was in flight
/// bumps the run id (even if the same track was completed again), and the
/// stale document is discarded with a conflict.
pub async fn handle_generate_guidance(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GuidanceDocument>, AppError> {
    let prepared = state
        .sessions
        .with_entry(session_id, |entry| {
            if let Some(document) = &entry.guidance {
                return Ok(Prepared::Existing(document.clone()));
            }
            let prompt = build_guidance_prompt(&entry.session)?;
            let track = entry.session.track().ok_or(SessionError::NotComplete)?;
            Ok::<_, SessionError>(Prepared::Generate {
                prompt,
                track,
                run: entry.session.run(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(session_id))??;

    let (prompt, track, run) = match prepared {
        Prepared::Existing(document) => {
            info!("Session {session_id} already has guidance; returning stored document");
            return Ok(Json(document));
        }
        Prepared::Generate { prompt, track, run } => (prompt, track, run),
    };

    info!("Generating guidance for session {session_id} (track '{track}')");
    let raw = state.generator.generate(&prompt).await?;
    let document = parse_guidance(&raw)?;

    let outcome = state
        .sessions
        .with_entry(session_id, |entry| {
            // run equality implies the session is still the same completed
            // run; any reset or new track choice would have bumped it
            if entry.session.run() != run {
                return StoreOutcome::StaleRun;
            }
            // Another request for this run stored first; its document is
            // the canonical one.
            if let Some(existing) = &entry.guidance {
                return StoreOutcome::AlreadyStored(existing.clone());
            }
            entry.guidance = Some(document.clone());
            StoreOutcome::Stored
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    match outcome {
        StoreOutcome::Stored => {
            info!("Stored guidance document for session {session_id}");
            Ok(Json(document))
        }
        StoreOutcome::AlreadyStored(existing) => {
            info!("Session {session_id} already stored a document for this run");
            Ok(Json(existing))
        }
        StoreOutcome::StaleRun => Err(AppError::Conflict(
            "Session was reset while guidance was being generated".to_string(),
        )),
    }
}

/// GET /api/v1/sessions/:id/report
///
/// The stored guidance document rendered as the downloadable plain-text
/// report.
pub async fn handle_download_report(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    let (track, document) = match (entry.session.track(), entry.guidance.as_ref()) {
        (Some(track), Some(document)) => (track, document),
        _ => {
            return Err(AppError::NotFound(
                "No guidance has been generated for this session".to_string(),
            ))
        }
    };

    let report = format_report(track, document, Utc::now());
    let disposition = format!("attachment; filename=\"{}\"", report_filename(track));

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report,
    ))
}
