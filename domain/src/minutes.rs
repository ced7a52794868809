//! Minutes of Meeting orchestration: summary + action items, persisted per transcript.

use entity::minutes::MinutesOfMeeting;
use entity::transcripts::Transcript;
use entity_api::DocumentStore;
use log::*;
use meeting_ai::traits::summarization;

use crate::action_items::extract_action_items;
use crate::error::Error;
use crate::summarizer::{summarize_long, DEFAULT_MAX_CHUNK_CHARS};

/// The pure derivation: summary over the full text, action items over the
/// segments. Side-effect-free; deterministic given a deterministic provider.
pub async fn derive_minutes(
    provider: &dyn summarization::Provider,
    transcript: &Transcript,
) -> Result<MinutesOfMeeting, Error> {
    let summary = summarize_long(provider, &transcript.text, DEFAULT_MAX_CHUNK_CHARS).await?;
    let action_items = extract_action_items(&transcript.segments);
    Ok(MinutesOfMeeting {
        transcript_id: transcript.id.clone(),
        summary,
        action_items,
    })
}

/// Regenerates and persists the minutes document for a stored transcript.
///
/// An absent transcript id is NotFound, never empty input. A failed
/// summarization fails the whole call and nothing is upserted — a partial or
/// empty minutes document would be misleading. The upsert replaces any prior
/// document for the same transcript id (last write wins); re-invocation is
/// idempotent at the storage layer.
pub async fn generate_minutes(
    store: &dyn DocumentStore,
    provider: &dyn summarization::Provider,
    transcript_id: &str,
) -> Result<MinutesOfMeeting, Error> {
    let transcript = store.get_transcript(transcript_id).await?;
    info!("Generating minutes for transcript: {transcript_id}");

    let minutes = derive_minutes(provider, &transcript).await?;
    store.upsert_minutes(minutes.clone()).await?;
    Ok(minutes)
}

/// Reads back the stored minutes document for a transcript.
pub async fn find_by_transcript_id(
    store: &dyn DocumentStore,
    transcript_id: &str,
) -> Result<MinutesOfMeeting, Error> {
    Ok(store.get_minutes(transcript_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, EntityErrorKind, ExternalErrorKind, InternalErrorKind};
    use async_trait::async_trait;
    use entity::segments::Segment;
    use entity_api::InMemoryStore;
    use meeting_ai::{Error as MeetingAiError, SummarizeOptions};

    /// Deterministic stand-in: summarizes any input to its first and last token.
    struct GistSummarizer;

    #[async_trait]
    impl summarization::Provider for GistSummarizer {
        async fn summarize(
            &self,
            text: &str,
            _options: SummarizeOptions,
        ) -> Result<String, MeetingAiError> {
            let mut tokens = text.split_whitespace();
            let first = tokens.next().unwrap_or("");
            let last = tokens.last().unwrap_or(first);
            Ok(format!("{first}...{last}"))
        }

        fn provider_id(&self) -> &str {
            "gist"
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl summarization::Provider for FailingSummarizer {
        async fn summarize(
            &self,
            _text: &str,
            _options: SummarizeOptions,
        ) -> Result<String, MeetingAiError> {
            Err(MeetingAiError::Provider("model crashed".to_string()))
        }

        fn provider_id(&self) -> &str {
            "failing"
        }
    }

    async fn seed_transcript(store: &InMemoryStore) {
        store
            .upsert_transcript(Transcript {
                id: "t1".to_string(),
                language: Some("en".to_string()),
                text: "Standup notes and decisions from the weekly sync".to_string(),
                segments: vec![Segment {
                    start: 0.0,
                    end: 4.0,
                    text: "Priya will send the report by Friday".to_string(),
                    speaker: Some("Priya".to_string()),
                }],
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn generates_and_persists_minutes() {
        let store = InMemoryStore::new();
        seed_transcript(&store).await;

        let minutes = generate_minutes(&store, &GistSummarizer, "t1").await.unwrap();
        assert_eq!(minutes.transcript_id, "t1");
        assert_eq!(minutes.summary, "Standup...sync");
        assert_eq!(minutes.action_items.len(), 1);
        assert_eq!(minutes.action_items[0].owner, "Priya");

        let stored = find_by_transcript_id(&store, "t1").await.unwrap();
        assert_eq!(stored, minutes);
    }

    #[tokio::test]
    async fn regeneration_is_idempotent_and_replaces_in_place() {
        let store = InMemoryStore::new();
        seed_transcript(&store).await;

        let first = generate_minutes(&store, &GistSummarizer, "t1").await.unwrap();
        let second = generate_minutes(&store, &GistSummarizer, "t1").await.unwrap();

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.action_items, second.action_items);
        // One document, fully replaced.
        assert_eq!(store.get_minutes("t1").await.unwrap(), second);
    }

    #[tokio::test]
    async fn absent_transcript_is_not_found() {
        let store = InMemoryStore::new();
        let err = generate_minutes(&store, &GistSummarizer, "ghost")
            .await
            .unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
        );
    }

    #[tokio::test]
    async fn failed_summarization_fails_whole_call_and_stores_nothing() {
        let store = InMemoryStore::new();
        seed_transcript(&store).await;

        let err = generate_minutes(&store, &FailingSummarizer, "t1")
            .await
            .unwrap_err();
        assert!(matches!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Provider(_))
        ));
        // No degraded/partial document was written.
        assert!(store.get_minutes("t1").await.is_err());
    }
}
