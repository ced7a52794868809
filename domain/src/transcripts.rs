//! Transcript ingestion and lookup.

use entity::segments::Segment;
use entity::transcripts::Transcript;
use entity_api::DocumentStore;
use log::*;
use meeting_ai::traits::transcription;
use uuid::Uuid;

use crate::error::Error;

/// Runs the transcription capability over raw audio and stores the result as
/// a new immutable [`Transcript`] with a fresh id.
///
/// An ASR failure propagates as an upstream failure; nothing is stored.
pub async fn ingest_audio(
    store: &dyn DocumentStore,
    provider: &dyn transcription::Provider,
    audio: &[u8],
    language: Option<&str>,
) -> Result<Transcript, Error> {
    let output = provider.transcribe(audio, language).await?;

    let transcript = Transcript {
        id: Uuid::new_v4().to_string(),
        language: output.language,
        text: output.text,
        segments: output
            .segments
            .into_iter()
            .map(|s| Segment {
                start: s.start,
                end: s.end,
                text: s.text,
                speaker: s.speaker,
            })
            .collect(),
    };
    info!(
        "Storing transcript {} ({} segments) from provider: {}",
        transcript.id,
        transcript.segments.len(),
        provider.provider_id()
    );
    store.upsert_transcript(transcript.clone()).await?;
    Ok(transcript)
}

/// Fetches a stored transcript; an absent id is NotFound.
pub async fn find_by_id(store: &dyn DocumentStore, id: &str) -> Result<Transcript, Error> {
    Ok(store.get_transcript(id).await?)
}
