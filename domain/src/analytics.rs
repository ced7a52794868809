//! Per-speaker participation statistics.

use std::collections::HashMap;

use entity::segments::Segment;
use entity::speaker_analytics::{SpeakerAnalytics, SpeakerStat};
use entity_api::DocumentStore;
use log::*;

use crate::error::Error;

/// Folds segments into one [`SpeakerStat`] per distinct speaker label.
///
/// Speaker-less segments are attributed to [`entity::segments::DEFAULT_SPEAKER`].
/// Output order is first-encounter order over the segment sequence, not
/// sorted, so repeated runs over the same transcript compare byte-identical.
/// Never fails: negative durations clamp to zero and empty text counts zero
/// words, so stats stay computable from whatever segments exist.
pub fn speaker_stats(segments: &[Segment]) -> Vec<SpeakerStat> {
    let mut stats: Vec<SpeakerStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for segment in segments {
        let speaker = segment.speaker_label();
        let slot = match index.get(speaker) {
            Some(&slot) => slot,
            None => {
                index.insert(speaker.to_string(), stats.len());
                stats.push(SpeakerStat {
                    speaker: speaker.to_string(),
                    turns: 0,
                    talk_time: 0.0,
                    words: 0,
                });
                stats.len() - 1
            }
        };
        let stat = &mut stats[slot];
        stat.turns += 1;
        stat.talk_time += segment.duration();
        stat.words += segment.word_count();
    }
    stats
}

/// Computes speaker statistics for a stored transcript and caches the
/// snapshot keyed by transcript id.
///
/// An absent transcript id surfaces as NotFound; it is never treated as an
/// empty segment sequence.
pub async fn speaker_stats_for_transcript(
    store: &dyn DocumentStore,
    transcript_id: &str,
) -> Result<Vec<SpeakerStat>, Error> {
    let transcript = store.get_transcript(transcript_id).await?;
    let stats = speaker_stats(&transcript.segments);
    debug!(
        "Caching speaker analytics for transcript {transcript_id}: {} speakers",
        stats.len()
    );
    store
        .upsert_speaker_analytics(SpeakerAnalytics {
            transcript_id: transcript.id,
            stats: stats.clone(),
        })
        .await?;
    Ok(stats)
}
