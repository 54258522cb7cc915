//! Grammar tests for the sequence parser

use lifeline::parse;
use lifeline::prelude::*;
use lifeline::sequence::Statement;

#[test]
fn test_accepted_and_rejected_documents() {
    let cases = [
        ("test", false),
        ("title", false),
        ("title title", true),
        ("title title\ntitle title", true),
        ("participant alice", true),
        ("title title\nparticipant alice", true),
        ("alice->alice:msg", true),
        (r"alice->alice:multi\nline\nmsg", true),
        ("alice->bob:msg", true),
        ("alice->bob:msg\na->b:c", true),
        (r"a->b:req\nb->a:resp", true),
        ("a-->b:msg", true),
        ("a->>b:msg", true),
        ("a-->>b:msg", true),
        ("alice->bob:msg\n", false),
        ("note right of alice:msg", true),
        ("note left of alice:msg", true),
        ("note above alice:msg", false),
    ];

    for (input, should_parse) in cases {
        match parse(input) {
            Ok(diagram) => {
                assert!(should_parse, "expected {input:?} to fail");
                assert_eq!(diagram.to_string(), input);
            }
            Err(err) => assert!(!should_parse, "expected {input:?} to parse, got {err}"),
        }
    }
}

#[test]
fn test_event_kinds() {
    let diagram = parse("title t\nparticipant a\na->a:m\na->b:m\nb-->>a:r\nnote left of a:n").unwrap();
    let kinds: Vec<_> = diagram
        .events()
        .iter()
        .map(|event| match event {
            Event::Title(_) => "title",
            Event::Participant(_) => "participant",
            Event::Message(message) => match message.kind() {
                MessageKind::SelfMessage => "self",
                MessageKind::Forward => "forward",
                MessageKind::Backward => "backward",
            },
            Event::Note(_) => "note",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["title", "participant", "self", "forward", "backward", "note"]
    );
}

#[test]
fn test_arrow_flags() {
    let diagram = parse("a->b:1\na-->b:2\na->>b:3\na-->>b:4").unwrap();
    let styles: Vec<_> = diagram
        .events()
        .iter()
        .filter_map(|event| match event {
            Event::Message(message) => Some((message.style.alt_body, message.style.alt_end)),
            _ => None,
        })
        .collect();
    assert_eq!(
        styles,
        vec![(false, false), (true, false), (false, true), (true, true)]
    );
}

#[test]
fn test_statement_level_parsing() {
    let parser = SequenceParser::new();
    assert_eq!(
        parser.parse_statement("note right of Web Server:cache miss"),
        Some(Statement::Note {
            side: Side::Right,
            participant: "Web Server".to_string(),
            text: "cache miss".to_string(),
        })
    );
    assert_eq!(parser.parse_statement(""), None);
    assert_eq!(parser.parse_statement("a->:x"), None);
    assert_eq!(parser.parse_statement("->b:x"), None);
    assert_eq!(parser.parse_statement("a->b"), None);
}

#[test]
fn test_repeated_names_reuse_participants() {
    let diagram = parse("a->b:1\nb->a:2\nnote left of b:3\nparticipant a").unwrap();
    assert_eq!(diagram.participant_count(), 2);
    assert_eq!(diagram.participant("b").map(|p| p.order), Some(1));
}

#[test]
fn test_line_break_marker_is_kept_in_text() {
    let diagram = parse(r"a->b:one\ntwo").unwrap();
    match &diagram.events()[0] {
        Event::Message(message) => assert_eq!(message.text, r"one\ntwo"),
        other => panic!("unexpected event {other:?}"),
    }
}
