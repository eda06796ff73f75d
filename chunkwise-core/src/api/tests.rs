//! Tests for the processor facade

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::domain::{ChunkParams, PlanTier};
    use crate::tokenizer::CodepointTokenizer;
    use std::sync::Arc;

    fn processor() -> ChunkProcessor {
        ChunkProcessor::with_tokenizer(Arc::new(CodepointTokenizer), Config::default())
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .tiers(vec![PlanTier::new(4, 4, 1)])
            .build()
            .unwrap();
        assert_eq!(config.plan_table().tiers().len(), 1);

        let default = Config::builder().build().unwrap();
        assert_eq!(default, Config::default());
    }

    #[test]
    fn test_config_builder_rejects_bad_tiers() {
        let err = Config::builder()
            .tiers(vec![PlanTier::new(4, 4, 4)])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_chunk_text_scenario() {
        let output = processor().chunk_text("Hello   world\n\nnull test");
        assert_eq!(output.chunks, vec!["Hello world test"]);
        assert_eq!(output.metadata.token_count, 16);
        assert_eq!(output.metadata.params, ChunkParams::new(16, 0));
        assert_eq!(output.metadata.normalized_chars, 16);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let output = processor().chunk_text("");
        assert!(output.chunks.is_empty());
        assert_eq!(output.metadata.params, ChunkParams::EMPTY);
        assert_eq!(output.metadata.token_count, 0);

        let only_noise = processor().chunk_text(" \n\u{FEFF} null ");
        assert!(only_noise.chunks.is_empty());
    }

    #[test]
    fn test_windowing_under_custom_table() {
        let config = Config::builder()
            .tiers(vec![PlanTier::new(8, 4, 1)])
            .build()
            .unwrap();
        let processor = ChunkProcessor::with_tokenizer(Arc::new(CodepointTokenizer), config);

        let output = processor.chunk_text("abcdefghij");
        assert_eq!(output.chunks, vec!["abcd", "defg", "ghij", "j"]);

        let short = processor.chunk_text("abc");
        assert_eq!(short.chunks, vec!["abc"]);
    }

    #[test]
    fn test_plan_text() {
        let summary = processor().plan_text(&"a".repeat(3_000));
        assert_eq!(summary.token_count, 3_000);
        assert_eq!(summary.params, ChunkParams::new(1_024, 128));
        assert_eq!(summary.window_count, 4);
    }

    #[test]
    fn test_process_input() {
        let output = processor()
            .process(Input::from_bytes(b"tab\tseparated".to_vec()))
            .unwrap();
        assert_eq!(output.chunks, vec!["tab separated"]);

        let err = processor()
            .process(Input::from_bytes(vec![0xc3]))
            .unwrap_err();
        assert!(matches!(err, Error::Infrastructure(_)));
    }

    #[test]
    fn test_handle_request() {
        let response = processor()
            .handle_request(br#"{"text": "  one   two  "}"#)
            .unwrap();
        assert_eq!(response.chunks, vec!["one two"]);

        let empty = processor().handle_request(br#"{"text": ""}"#).unwrap();
        assert!(empty.chunks.is_empty());

        let err = processor().handle_request(br#"{"body": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_output_into_response() {
        let output = processor().chunk_text("abc");
        assert_eq!(output.chunk_count(), 1);
        assert!(!output.has_decode_failures());
        assert_eq!(output.into_response().chunks, vec!["abc"]);
    }

    #[test]
    fn test_processor_is_shareable() {
        let processor = Arc::new(processor());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let processor = Arc::clone(&processor);
                std::thread::spawn(move || processor.chunk_text(&"x".repeat(100 * (i + 1))))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let output = handle.join().unwrap();
            assert_eq!(output.metadata.token_count, 100 * (i + 1));
        }
    }
}
