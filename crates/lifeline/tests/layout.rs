//! Tests for participant spacing
//!
//! Every message and note must fit between the lifelines it spans once the
//! offsets are computed.

use lifeline::prelude::*;
use lifeline::sequence::{MESSAGE_ALLOWANCE, NOTE_ALLOWANCE, SELF_MESSAGE_ALLOWANCE};
use lifeline::{max_line_width, parse};

fn middles(input: &str) -> Vec<usize> {
    let diagram = parse(input).unwrap();
    compute_offsets(&diagram).iter().map(Offset::middle).collect()
}

#[test]
fn test_boxes_touch_without_messages() {
    let diagram = parse("participant Alice\nparticipant Bob").unwrap();
    let offsets = compute_offsets(&diagram);
    assert_eq!(offsets[0], Offset { begin: 0, end: 8 });
    assert_eq!(offsets[1], Offset { begin: 9, end: 15 });
}

#[test]
fn test_message_text_fits_between_lifelines() {
    let text = "a rather long request";
    let m = middles(&format!("a->b:{text}"));
    assert_eq!(m[1] - m[0] - 1, text.len() + MESSAGE_ALLOWANCE);
}

#[test]
fn test_multi_line_text_uses_widest_line() {
    let m = middles(r"a->b:x\nwidest line\ny");
    assert_eq!(m[1] - m[0] - 1, "widest line".len() + MESSAGE_ALLOWANCE);
}

#[test]
fn test_self_message_room() {
    let m = middles("a->a:thinking\nparticipant b");
    assert_eq!(m[1] - m[0] - 1, "thinking".len() + SELF_MESSAGE_ALLOWANCE);
}

#[test]
fn test_note_right_room() {
    let m = middles("participant a\nparticipant b\nnote right of a:remember");
    assert_eq!(m[1] - m[0] - 1, "remember".len() + NOTE_ALLOWANCE);
}

#[test]
fn test_shifts_accumulate_in_event_order() {
    // The second message needs more room than the first created, so only the
    // difference is added
    let first = middles("a->b:short");
    let both = middles("a->b:short\na->b:much longer text");
    assert!(both[1] > first[1]);
    assert_eq!(both[1] - both[0] - 1, "much longer text".len() + MESSAGE_ALLOWANCE);
}

#[test]
fn test_shift_moves_every_later_participant() {
    let before = middles("participant a\nparticipant b\nparticipant c");
    let after = middles("participant a\nparticipant b\nparticipant c\na->b:widen this gap");
    let shift = after[1] - before[1];
    assert!(shift > 0);
    assert_eq!(after[2] - before[2], shift);
    assert_eq!(after[0], before[0]);
}

#[test]
fn test_backward_message_spans_are_order_independent() {
    let forward = middles("participant a\nparticipant b\na->b:payload");
    let backward = middles("participant a\nparticipant b\nb->a:payload");
    assert_eq!(forward, backward);
}

#[test]
fn test_wide_characters_measure_in_columns() {
    let diagram = parse("participant 日本").unwrap();
    let offsets = compute_offsets(&diagram);
    assert_eq!(offsets[0].width(), max_line_width("日本") + 4);
    assert_eq!(offsets[0].width(), 8);
}

#[test]
fn test_ascii_alternate_arrowhead_widens_gap() {
    let diagram = parse("a->>b:x").unwrap();
    let unicode = SequenceLayoutAlgorithm::with_style(CharacterSet::Unicode).layout(&diagram);
    let ascii = SequenceLayoutAlgorithm::with_style(CharacterSet::Ascii).layout(&diagram);
    assert_eq!(ascii[1].middle(), unicode[1].middle() + 1);
}
