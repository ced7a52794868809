//! Whitespace-token chunking for length-limited summarization engines.

/// Partitions `text` into chunks of roughly `max_chunk_chars` characters,
/// never splitting a token.
///
/// Tokens accumulate into a buffer with a running total of `chars + 1`
/// (one separator per token); the buffer flushes as a space-joined chunk
/// once the total strictly exceeds `max_chunk_chars`. The overflow check
/// runs AFTER the token is appended, which guarantees progress on a single
/// token longer than the limit (it becomes its own oversized chunk) and
/// guarantees no chunk is ever empty for non-empty input.
pub fn split_into_chunks(text: &str, max_chunk_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buf: Vec<&str> = Vec::new();
    let mut total = 0usize;

    for token in text.split_whitespace() {
        buf.push(token);
        total += token.chars().count() + 1;
        if total > max_chunk_chars {
            chunks.push(buf.join(" "));
            buf.clear();
            total = 0;
        }
    }
    if !buf.is_empty() {
        chunks.push(buf.join(" "));
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(split_into_chunks("", 100).is_empty());
        assert!(split_into_chunks("   \n\t ", 100).is_empty());
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = split_into_chunks("quick status sync", 100);
        assert_eq!(chunks, vec!["quick status sync".to_string()]);
    }

    #[test]
    fn overflow_check_is_strictly_greater_than() {
        // "aaaa" + "bbbb" cost exactly 10; a limit of 10 does not flush,
        // a limit of 9 does.
        assert_eq!(split_into_chunks("aaaa bbbb", 10).len(), 1);
        let chunks = split_into_chunks("aaaa bbbb cccc", 9);
        assert_eq!(chunks[0], "aaaa bbbb");
        assert_eq!(chunks[1], "cccc");
    }

    #[test]
    fn oversized_token_becomes_its_own_chunk() {
        let long = "a".repeat(50);
        let chunks = split_into_chunks(&long, 10);
        assert_eq!(chunks, vec![long]);
    }

    #[test]
    fn no_chunk_is_empty_and_token_order_is_preserved() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = split_into_chunks(text, 12);
        assert!(chunks.iter().all(|c| !c.is_empty()));

        let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn chunk_char_budget_counts_chars_not_bytes() {
        // Four 2-char tokens costing 3 chars (5 bytes) each: a char budget of
        // 8 packs three tokens into the first chunk, a byte budget only two.
        let chunks = split_into_chunks("éé éé éé éé", 8);
        assert_eq!(chunks, vec!["éé éé éé".to_string(), "éé".to_string()]);
    }
}
