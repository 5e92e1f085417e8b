use super::*;

fn chunked_doc(content: &str) -> Document {
    let mut doc = Document::new(content);
    doc.attach_chunks(&DefaultSeparator).unwrap();
    doc
}

#[test]
fn test_attach_splits_on_default_separator() {
    let doc = chunked_doc("a<!--more-->b<!--more-->c");
    let state = doc.chunk_state().unwrap();
    assert_eq!(state.len(), 3);
    assert_eq!(state.get(1).unwrap(), "a");
    assert_eq!(state.get(3).unwrap(), "c");
}

#[test]
fn test_attach_is_idempotent() {
    let mut doc = chunked_doc("a<!--more-->b");

    // Advance the cursor, then attach again with a separator that would
    // produce a different split if it were honored
    doc.chunk_state_mut().unwrap().advance().unwrap();
    doc.attach_chunks(&FixedSeparator("b".to_string())).unwrap();

    let state = doc.chunk_state().unwrap();
    assert_eq!(state.len(), 2);
    assert_eq!(state.cursor(), 2);
}

#[test]
fn test_attach_without_separator_occurrence_yields_one_chunk() {
    let doc = chunked_doc("no marker here");
    let state = doc.chunk_state().unwrap();
    assert_eq!(state.len(), 1);
    assert_eq!(state.get(1).unwrap(), "no marker here");
}

#[test]
fn test_resolver_override_changes_separator() {
    let mut doc = Document::new("a---b---c");
    doc.attach_chunks(&FixedSeparator("---".to_string()))
        .unwrap();
    assert_eq!(doc.chunk_state().unwrap().len(), 3);
}

#[test]
fn test_closure_resolver_sees_the_document() {
    let mut doc = Document::new("x|y");
    let resolver = |d: &Document| {
        if d.content.contains('|') {
            "|".to_string()
        } else {
            DEFAULT_SEPARATOR.to_string()
        }
    };
    doc.attach_chunks(&resolver).unwrap();
    assert_eq!(doc.chunk_state().unwrap().len(), 2);
}

#[test]
fn test_attach_rejects_empty_separator() {
    let mut doc = Document::new("abc");
    let err = doc
        .attach_chunks(&FixedSeparator(String::new()))
        .unwrap_err();
    assert_eq!(err, SplitError::EmptySeparator);
    assert!(doc.chunk_state().is_none());
}

#[test]
fn test_cursor_progression() {
    let mut doc = chunked_doc("a<!--more-->b<!--more-->c");
    let state = doc.chunk_state_mut().unwrap();

    for expected in ["a", "b", "c"] {
        assert!(state.has_more());
        assert_eq!(state.advance().unwrap(), expected);
    }

    assert!(!state.has_more());
}

#[test]
fn test_advance_past_end_is_out_of_range() {
    let mut doc = chunked_doc("only");
    let state = doc.chunk_state_mut().unwrap();

    state.advance().unwrap();
    let err = state.advance().unwrap_err();
    assert_eq!(err, ChunkError::OutOfRange { index: 2, len: 1 });
}

#[test]
fn test_get_is_one_indexed() {
    let doc = chunked_doc("a<!--more-->b<!--more-->c");
    let state = doc.chunk_state().unwrap();

    assert_eq!(
        state.get(0).unwrap_err(),
        ChunkError::OutOfRange { index: 0, len: 3 }
    );
    assert_eq!(
        state.get(4).unwrap_err(),
        ChunkError::OutOfRange { index: 4, len: 3 }
    );
}

#[test]
fn test_indexed_get_does_not_move_cursor() {
    let mut doc = chunked_doc("a<!--more-->b");
    let state = doc.chunk_state_mut().unwrap();

    state.get(2).unwrap();
    assert_eq!(state.cursor(), 1);
    assert_eq!(state.advance().unwrap(), "a");
}

#[test]
fn test_serialization_skips_chunk_state() {
    let doc = chunked_doc("a<!--more-->b");
    let json = serde_json::to_string(&doc).unwrap();

    let restored: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id, doc.id);
    assert_eq!(restored.content, doc.content);
    assert!(restored.chunk_state().is_none());
}
