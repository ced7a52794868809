//! Document store trait and in-memory reference implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use entity::minutes::MinutesOfMeeting;
use entity::speaker_analytics::SpeakerAnalytics;
use entity::transcripts::Transcript;
use log::*;
use tokio::sync::RwLock;

use crate::error::Error;

/// Persistence capability for transcripts and their derived artifacts.
///
/// Each artifact collection is keyed by transcript id. Upserts replace the
/// whole stored document (last write wins), never merge. Gets on an absent
/// key return `EntityApiErrorKind::RecordNotFound`; absence is never
/// silently treated as an empty document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_transcript(&self, id: &str) -> Result<Transcript, Error>;
    async fn upsert_transcript(&self, transcript: Transcript) -> Result<(), Error>;

    async fn get_minutes(&self, transcript_id: &str) -> Result<MinutesOfMeeting, Error>;
    async fn upsert_minutes(&self, minutes: MinutesOfMeeting) -> Result<(), Error>;

    async fn get_speaker_analytics(&self, transcript_id: &str) -> Result<SpeakerAnalytics, Error>;
    async fn upsert_speaker_analytics(&self, analytics: SpeakerAnalytics) -> Result<(), Error>;
}

/// In-memory [`DocumentStore`] backed by per-collection hash maps.
///
/// Whole-document writes under an RwLock give the same last-write-wins
/// semantics as a database upsert; concurrent regenerations for the same
/// transcript id simply interleave at this boundary.
#[derive(Default)]
pub struct InMemoryStore {
    transcripts: RwLock<HashMap<String, Transcript>>,
    minutes: RwLock<HashMap<String, MinutesOfMeeting>>,
    analytics: RwLock<HashMap<String, SpeakerAnalytics>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get_transcript(&self, id: &str) -> Result<Transcript, Error> {
        self.transcripts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(Error::record_not_found)
    }

    async fn upsert_transcript(&self, transcript: Transcript) -> Result<(), Error> {
        debug!("Upserting transcript: {}", transcript.id);
        self.transcripts
            .write()
            .await
            .insert(transcript.id.clone(), transcript);
        Ok(())
    }

    async fn get_minutes(&self, transcript_id: &str) -> Result<MinutesOfMeeting, Error> {
        self.minutes
            .read()
            .await
            .get(transcript_id)
            .cloned()
            .ok_or_else(Error::record_not_found)
    }

    async fn upsert_minutes(&self, minutes: MinutesOfMeeting) -> Result<(), Error> {
        debug!("Upserting minutes for transcript: {}", minutes.transcript_id);
        self.minutes
            .write()
            .await
            .insert(minutes.transcript_id.clone(), minutes);
        Ok(())
    }

    async fn get_speaker_analytics(&self, transcript_id: &str) -> Result<SpeakerAnalytics, Error> {
        self.analytics
            .read()
            .await
            .get(transcript_id)
            .cloned()
            .ok_or_else(Error::record_not_found)
    }

    async fn upsert_speaker_analytics(&self, analytics: SpeakerAnalytics) -> Result<(), Error> {
        debug!(
            "Upserting speaker analytics for transcript: {}",
            analytics.transcript_id
        );
        self.analytics
            .write()
            .await
            .insert(analytics.transcript_id.clone(), analytics);
        Ok(())
    }
}
