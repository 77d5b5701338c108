//! Property-based tests for swaplog using proptest

use proptest::prelude::*;
use swaplog::prelude::*;

// ============================================================================
// ByteBuffer laws
// ============================================================================

proptest! {
    /// Reading everything appended reproduces the bytes exactly, in order.
    #[test]
    fn test_buffer_round_trip(chunks in prop::collection::vec(
        prop::collection::vec(any::<u8>(), 0..512),
        0..32,
    )) {
        let mut buf = ByteBuffer::new();
        let expected: Vec<u8> = chunks.concat();
        for chunk in &chunks {
            buf.append(chunk);
        }
        prop_assert_eq!(buf.readable(), expected.as_slice());
        prop_assert_eq!(buf.readable_len(), expected.len());
    }

    /// consume(k) reduces readable_len by exactly k and leaves the rest
    /// untouched.
    #[test]
    fn test_buffer_consume_law(
        data in prop::collection::vec(any::<u8>(), 1..1024),
        split in any::<prop::sample::Index>(),
    ) {
        let mut buf = ByteBuffer::new();
        buf.append(&data);
        let k = split.index(data.len() + 1);
        buf.consume(k);
        prop_assert_eq!(buf.readable_len(), data.len() - k);
        prop_assert_eq!(buf.readable(), &data[k..]);
    }

    /// Appending past the writable capacity never loses earlier content.
    #[test]
    fn test_buffer_growth_preserves_content(tail_len in 1usize..4096) {
        let mut buf = ByteBuffer::new();
        let head = vec![0xAA; buf.capacity() - 1];
        let tail = vec![0xBB; tail_len];
        buf.append(&head);
        buf.append(&tail);
        prop_assert_eq!(&buf.readable()[..head.len()], head.as_slice());
        prop_assert_eq!(&buf.readable()[head.len()..], tail.as_slice());
    }
}

// ============================================================================
// PatternFormatter compositionality
// ============================================================================

/// A recognized directive or a safe literal run.
fn pattern_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("%d".to_string()),
        Just("%d{%H:%M:%S}".to_string()),
        Just("%t".to_string()),
        Just("%c".to_string()),
        Just("%f".to_string()),
        Just("%l".to_string()),
        Just("%p".to_string()),
        Just("%T".to_string()),
        Just("%m".to_string()),
        Just("%n".to_string()),
        Just("%%".to_string()),
        "[a-zA-Z0-9 :\\[\\]-]{1,8}",
    ]
}

proptest! {
    /// Rendering a concatenated pattern equals concatenating each fragment's
    /// own rendering.
    #[test]
    fn test_formatter_compositionality(fragments in prop::collection::vec(pattern_fragment(), 1..12)) {
        let combined = PatternFormatter::new(&fragments.concat()).unwrap();
        let record = LogRecord::new(LogLevel::Info, "prop.rs", 7, "prop", "payload");
        let piecewise: String = fragments
            .iter()
            .map(|f| PatternFormatter::new(f).unwrap().render(&record))
            .collect();
        prop_assert_eq!(combined.render(&record), piecewise);
    }

    /// Patterns built only from recognized directives always compile.
    #[test]
    fn test_recognized_patterns_always_parse(fragments in prop::collection::vec(pattern_fragment(), 0..16)) {
        prop_assert!(PatternFormatter::new(&fragments.concat()).is_ok());
    }

    /// A trailing '%' fails construction no matter the prefix.
    #[test]
    fn test_trailing_percent_always_fails(prefix in prop::collection::vec(pattern_fragment(), 0..6)) {
        let pattern = format!("{}%", prefix.concat());
        prop_assert!(PatternFormatter::new(&pattern).is_err());
    }
}
