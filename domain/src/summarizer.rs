//! Hierarchical chunk-and-reduce summarization over an injected provider.

use log::*;
use meeting_ai::traits::summarization;
use meeting_ai::SummarizeOptions;

use crate::chunk::split_into_chunks;
use crate::error::Error;

/// Default per-chunk character budget handed to the chunk splitter.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 3000;

// Length windows for the two reduction levels. Chunk passes condense raw
// transcript text; the reduce pass condenses the joined chunk summaries.
const CHUNK_PASS: SummarizeOptions = SummarizeOptions {
    max_length: 220,
    min_length: 60,
    deterministic: true,
};
const REDUCE_PASS: SummarizeOptions = SummarizeOptions {
    max_length: 250,
    min_length: 80,
    deterministic: true,
};

/// Produces one bounded summary from arbitrarily long text.
///
/// Empty or all-whitespace input returns `""` without touching the provider.
/// Otherwise the text is split into chunks of at most roughly
/// `max_chunk_chars` characters, each chunk is summarized independently, and
/// for more than one chunk the space-joined partial summaries (in original
/// chunk order) go through one further reduce pass. A single chunk's summary
/// is returned directly with no reduce pass.
///
/// Chunk passes run sequentially in chunk order; providers that can batch or
/// parallelize do so behind the trait. Provider failures are not retried
/// here — they propagate so the orchestrating layer owns retry policy.
pub async fn summarize_long(
    provider: &dyn summarization::Provider,
    text: &str,
    max_chunk_chars: usize,
) -> Result<String, Error> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }

    let chunks = split_into_chunks(text, max_chunk_chars);
    debug!(
        "Summarizing {} chunk(s) via provider: {}",
        chunks.len(),
        provider.provider_id()
    );

    let mut partials = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        partials.push(provider.summarize(chunk, CHUNK_PASS).await?);
    }

    if partials.len() == 1 {
        return Ok(partials.remove(0));
    }

    let combined = partials.join(" ");
    Ok(provider.summarize(&combined, REDUCE_PASS).await?)
}
