//! Integration tests for the public API

use lifeline::prelude::*;
use lifeline::{parse, render, render_diagram, render_with_config, render_with_style};

#[test]
fn test_render_simple_message() {
    let text = render("Alice->Bob:Hello").unwrap();
    assert!(text.contains("Alice"));
    assert!(text.contains("Bob"));
    assert!(text.contains("┤ Hello ├"));
    assert!(text.contains('▶'));
}

#[test]
fn test_render_has_no_trailing_newline_or_spaces() {
    let text = render("a->b:x\nb->a:y\nnote right of b:z").unwrap();
    assert!(!text.ends_with('\n'));
    for line in text.lines() {
        assert_eq!(line, line.trim_end());
    }
}

#[test]
fn test_headers_frame_the_diagram() {
    let text = render("participant a\nparticipant b").unwrap();
    let rows: Vec<_> = text.lines().collect();
    assert_eq!(rows[..3], rows[rows.len() - 3..]);
}

#[test]
fn test_render_with_style_ascii_is_pure_ascii() {
    let text = render_with_style(
        "title T\na->a:loop\na-->>b:x\nnote left of b:n",
        CharacterSet::Ascii,
    )
    .unwrap();
    assert!(text.is_ascii());
    assert!(text.contains('#'));
}

#[test]
fn test_render_with_config_per_row() {
    let config = RenderConfig::default().with_lifeline_fill(LifelineFill::PerRow);
    let per_row = render_with_config("a->b:x", &config).unwrap();
    let per_event = render("a->b:x").unwrap();

    // Per-row mode drops the opening lifeline row, the blank row and the
    // closing lifeline row, and leaves the arrow row bare
    assert_eq!(per_event.lines().count(), per_row.lines().count() + 3);
    assert!(per_row.contains("   ──┤ x ├"));
}

#[test]
fn test_parse_participants_in_first_mention_order() {
    let diagram = parse("participant c\nb->a:x\nnote left of d:y").unwrap();
    let names: Vec<_> = diagram.participants().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["c", "b", "a", "d"]);
    assert_eq!(diagram.events().len(), 3);
}

#[test]
fn test_parse_then_render_diagram() {
    let diagram = parse("alice->bob:msg").unwrap();
    assert_eq!(diagram.message_count(), 1);
    match &diagram.events()[0] {
        Event::Message(message) => {
            assert_eq!((message.from, message.to), (0, 1));
            assert_eq!(message.kind(), MessageKind::Forward);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(render_diagram(&diagram), render("alice->bob:msg").unwrap());
}

#[test]
fn test_renderer_is_idempotent() {
    let diagram = parse("title t\na->b:x\nb->b:y\nnote left of a:z").unwrap();
    let renderer = SequenceRenderer::new();
    assert_eq!(renderer.render(&diagram), renderer.render(&diagram));
}

#[test]
fn test_empty_diagram() {
    assert_eq!(render_diagram(&Diagram::new()), "");
    assert_eq!(render("title Only a title").unwrap(), "Only a title");
}

#[test]
fn test_layout_is_exposed() {
    let diagram = parse("a->b:hello").unwrap();
    let offsets = SequenceLayoutAlgorithm::new().layout(&diagram);
    assert_eq!(offsets, compute_offsets(&diagram));
    assert_eq!(offsets.len(), 2);
    assert!(offsets[0].end < offsets[1].begin);
}
