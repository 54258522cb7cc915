//! Sequence diagram parser using chumsky
//!
//! The language has one statement per line:
//!
//! ```text
//! title <text>
//! participant <name>
//! <name><arrow><name>:<text>        arrow is ->, -->, ->> or -->>
//! note (left|right) of <name>:<text>
//! ```
//!
//! Lines are split on `\n` only, so a trailing newline leaves an empty last
//! line, which is a syntax error like any other unmatched line.

use chumsky::prelude::*;
use tracing::{debug, info, span, trace, Level};

use super::database::{ArrowStyle, Diagram, Side};
use crate::core::DiagramError;

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Title(String),
    Participant(String),
    Message {
        from: String,
        to: String,
        style: ArrowStyle,
        text: String,
    },
    Note {
        side: Side,
        participant: String,
        text: String,
    },
}

/// Chumsky-based sequence diagram parser
pub struct SequenceParser;

impl SequenceParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole document into a diagram, failing on the first bad line
    pub fn parse(&self, input: &str) -> Result<Diagram, DiagramError> {
        let parse_span = span!(Level::INFO, "parse_sequence", input_len = input.len());
        let _enter = parse_span.enter();

        let mut diagram = Diagram::new();
        for (index, line) in input.split('\n').enumerate() {
            let line_number = index + 1;
            trace!(line_number, line, "Parsing statement");

            let Some(statement) = self.parse_statement(line) else {
                debug!(line_number, "Statement matched no rule");
                return Err(DiagramError::syntax_error(line_number));
            };
            apply_statement(statement, &mut diagram);
        }

        info!(
            participant_count = diagram.participant_count(),
            event_count = diagram.events().len(),
            message_count = diagram.message_count(),
            "Parsed sequence diagram"
        );
        Ok(diagram)
    }

    /// Parse a single line, `None` if it matches no statement
    pub fn parse_statement(&self, line: &str) -> Option<Statement> {
        Self::statement_parser()
            .then_ignore(end())
            .parse(line)
            .into_result()
            .ok()
    }

    fn statement_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
        Self::message_parser()
            .or(Self::participant_parser())
            .or(Self::title_parser())
            .or(Self::note_parser())
    }

    /// Parse `->`, `-->`, `->>` or `-->>`
    fn arrow_parser<'src>() -> impl Parser<'src, &'src str, ArrowStyle> + Clone {
        just('-')
            .ignore_then(just('-').or_not())
            .then_ignore(just('>'))
            .then(just('>').or_not())
            .map(|(dash, head)| ArrowStyle::new(dash.is_some(), head.is_some()))
    }

    /// Parse `Alice->>Bob:text`
    fn message_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
        let sender = any()
            .and_is(Self::arrow_parser().not())
            .repeated()
            .at_least(1)
            .to_slice();
        let receiver = none_of(':')
            .and_is(Self::arrow_parser().not())
            .repeated()
            .at_least(1)
            .to_slice();

        sender
            .then(Self::arrow_parser())
            .then(receiver)
            .then_ignore(just(':'))
            .then(Self::rest_parser())
            .map(|(((from, style), to), text): (((&str, ArrowStyle), &str), &str)| {
                Statement::Message {
                    from: from.to_string(),
                    to: to.to_string(),
                    style,
                    text: text.to_string(),
                }
            })
    }

    fn participant_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
        just("participant ")
            .ignore_then(any().repeated().at_least(1).to_slice())
            .map(|name: &str| Statement::Participant(name.to_string()))
    }

    fn title_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
        just("title ")
            .ignore_then(any().repeated().at_least(1).to_slice())
            .map(|text: &str| Statement::Title(text.to_string()))
    }

    /// Parse `note left of Alice:text`
    fn note_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
        let side = just("left")
            .to(Side::Left)
            .or(just("right").to(Side::Right));

        just("note ")
            .ignore_then(side)
            .then_ignore(just(" of "))
            .then(none_of(':').repeated().at_least(1).to_slice())
            .then_ignore(just(':'))
            .then(Self::rest_parser())
            .map(|((side, participant), text): ((Side, &str), &str)| Statement::Note {
                side,
                participant: participant.to_string(),
                text: text.to_string(),
            })
    }

    /// Everything up to the end of the line, possibly empty
    fn rest_parser<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
        any().repeated().to_slice()
    }
}

impl Default for SequenceParser {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_statement(statement: Statement, diagram: &mut Diagram) {
    match statement {
        Statement::Title(text) => diagram.add_title(text),
        Statement::Participant(name) => {
            diagram.declare_participant(&name);
        }
        Statement::Message {
            from,
            to,
            style,
            text,
        } => diagram.add_message(&from, &to, &text, style),
        Statement::Note {
            side,
            participant,
            text,
        } => diagram.add_note(&participant, side, &text),
    }
}
