//! Character-level scanner for `[[class:label]]((payload))` tokens.
//!
//! The scan is a single left-to-right pass driven by one character at a
//! time. A token attempt deepens through the states below and either
//! completes (the expander is consulted) or fails, in which case every
//! character consumed so far is replayed into the output verbatim. The
//! transform is therefore total: no input character is ever dropped and
//! no input can make it panic.

use std::fmt::Write as _;
use std::mem;

use crate::token::{InlineToken, TokenExpander};

/// Progress through a token attempt.
///
/// `Ordinary` is both the initial and the terminal state. Every other
/// state records exactly which delimiters have been consumed, so a
/// failed attempt can be replayed verbatim by [`Scanner::flush_partial`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Ordinary,
    /// Seen `[`.
    OpenBracket,
    /// Seen `[[`; accumulating the class.
    Class,
    /// Seen `[[class:`; accumulating the label.
    Label,
    /// Seen the first `]`.
    CloseBracket,
    /// Seen `]]`; the payload opener must follow immediately.
    AwaitingParen,
    /// Seen `(`.
    OpenParen,
    /// Seen `((`; accumulating the payload.
    Payload,
    /// Seen the first `)`.
    CloseParen,
}

/// Per-call scan state. Constructed fresh for every transform and
/// discarded afterwards; nothing is shared between calls.
struct Scanner<'e, E: ?Sized> {
    state: State,
    class: String,
    label: String,
    payload: String,
    out: String,
    expander: &'e E,
}

impl<'e, E> Scanner<'e, E>
where
    E: TokenExpander + ?Sized,
{
    fn new(capacity: usize, expander: &'e E) -> Self {
        Self {
            state: State::Ordinary,
            class: String::new(),
            label: String::new(),
            payload: String::new(),
            out: String::with_capacity(capacity),
            expander,
        }
    }

    fn step(&mut self, ch: char) {
        match ch {
            '[' => match self.state {
                State::Ordinary => self.state = State::OpenBracket,
                State::OpenBracket => self.state = State::Class,
                _ => self.flush_and_reset(ch),
            },
            ':' => match self.state {
                State::Class => self.state = State::Label,
                // Colons are legal payload text (URLs).
                State::Payload => self.payload.push(ch),
                State::Ordinary => self.out.push(ch),
                _ => self.flush_and_reset(ch),
            },
            ']' => match self.state {
                State::Label => self.state = State::CloseBracket,
                State::CloseBracket => self.state = State::AwaitingParen,
                _ => self.flush_and_reset(ch),
            },
            '(' => match self.state {
                State::AwaitingParen => self.state = State::OpenParen,
                State::OpenParen => self.state = State::Payload,
                _ => self.flush_and_reset(ch),
            },
            ')' => match self.state {
                State::Payload => self.state = State::CloseParen,
                State::CloseParen => {
                    self.dispatch();
                    self.reset();
                }
                _ => self.flush_and_reset(ch),
            },
            _ => match self.state {
                State::Class => self.class.push(ch),
                State::Label => self.label.push(ch),
                State::Payload => self.payload.push(ch),
                State::Ordinary => self.out.push(ch),
                _ => self.flush_and_reset(ch),
            },
        }
    }

    /// Replays the raw characters consumed by the current token attempt.
    ///
    /// The reconstruction is keyed on the state: the deeper the attempt
    /// got, the more delimiters must be re-emitted around the
    /// accumulators.
    fn flush_partial(&mut self) {
        match self.state {
            State::Ordinary => {}
            State::OpenBracket => self.out.push('['),
            State::Class => {
                write!(self.out, "[[{}", self.class).ok();
            }
            State::Label => {
                write!(self.out, "[[{}:{}", self.class, self.label).ok();
            }
            State::CloseBracket => {
                write!(self.out, "[[{}:{}]", self.class, self.label).ok();
            }
            State::AwaitingParen => {
                write!(self.out, "[[{}:{}]]", self.class, self.label).ok();
            }
            State::OpenParen => {
                write!(self.out, "[[{}:{}]](", self.class, self.label).ok();
            }
            State::Payload => {
                write!(self.out, "[[{}:{}]](({}", self.class, self.label, self.payload).ok();
            }
            State::CloseParen => {
                write!(self.out, "[[{}:{}]](({})", self.class, self.label, self.payload).ok();
            }
        }
    }

    /// An unexpected character ended the token attempt: replay what was
    /// consumed, emit the character itself, and return to pass-through.
    fn flush_and_reset(&mut self, ch: char) {
        log::trace!("abandoning inline token attempt in {:?} at {:?}", self.state, ch);
        self.flush_partial();
        self.out.push(ch);
        self.reset();
    }

    fn reset(&mut self) {
        self.class.clear();
        self.label.clear();
        self.payload.clear();
        self.state = State::Ordinary;
    }

    /// A token closed cleanly: hand it to the expander, falling back to
    /// the canonical source form when the class is not recognized.
    fn dispatch(&mut self) {
        let token = InlineToken {
            class: mem::take(&mut self.class),
            label: mem::take(&mut self.label),
            payload: mem::take(&mut self.payload),
        };
        match self.expander.expand(&token) {
            Some(replacement) => self.out.push_str(&replacement),
            None => {
                log::debug!("no expansion for inline token class {:?}", token.class);
                self.out.push_str(&token.canonical());
            }
        }
    }

    fn finish(mut self) -> String {
        // End of input flushes any half-open token.
        self.flush_partial();
        self.out
    }
}

/// Expands `[[class:label]]((payload))` tokens in `input` through
/// `expander`, passing all other text through unchanged.
///
/// Malformed or incomplete tokens are emitted verbatim; tokens whose
/// class the expander does not recognize are re-serialized in canonical
/// form, making the transform idempotent on them.
pub fn expand_inline_tokens<E>(input: &str, expander: &E) -> String
where
    E: TokenExpander + ?Sized,
{
    if !input.contains(['[', ']', '(', ')']) {
        return input.to_string();
    }

    let mut scanner = Scanner::new(input.len(), expander);
    for ch in input.chars() {
        scanner.step(ch);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expands only the `echo` class, making recognized output easy to spot.
    fn echo(token: &InlineToken) -> Option<String> {
        (token.class == "echo").then(|| format!("<{}|{}>", token.label, token.payload))
    }

    fn transform(input: &str) -> String {
        expand_inline_tokens(input, &echo)
    }

    #[test]
    fn plain_text_is_identity() {
        assert_eq!(transform(""), "");
        assert_eq!(transform("hello world"), "hello world");
        assert_eq!(transform("a: b, c; d"), "a: b, c; d");
    }

    #[test]
    fn broken_delimiters_round_trip() {
        for input in ["[", "]", "(", ")", "[[", "]]", "((", "))", "[[[[", "]]]]", "(((((("] {
            assert_eq!(transform(input), input);
        }
    }

    #[test]
    fn single_delimiter_near_misses_pass_through() {
        for input in [
            "[dog]",
            "[dog](",
            "[dog]((",
            "[dog](hat)",
            "[dog]((hat))",
            "[dog:cat]",
        ] {
            assert_eq!(transform(input), input);
        }
    }

    #[test]
    fn partial_tokens_flush_verbatim() {
        for input in [
            "[[hello",
            "[[hello:goodbye",
            "[[hello:goodbye]",
            "[[hello]]((goodbye))",
            "dog [[hello:goodbye]] cat",
            "[[echo:a]]x((b))",
            "[[echo:a]]((b",
            "[[echo:a]]((b)",
        ] {
            assert_eq!(transform(input), input);
        }
    }

    #[test]
    fn recognized_token_expands() {
        assert_eq!(transform("[[echo:lbl]]((pay))"), "<lbl|pay>");
    }

    #[test]
    fn expansion_keeps_surrounding_text() {
        assert_eq!(transform("dog [[echo:a]]((b)) cat"), "dog <a|b> cat");
    }

    #[test]
    fn consecutive_tokens_expand_independently() {
        assert_eq!(transform("[[echo:a]]((b))[[echo:c]]((d))"), "<a|b><c|d>");
    }

    #[test]
    fn accumulators_are_verbatim() {
        assert_eq!(transform("[[echo: spaced ]](( pad ))"), "< spaced | pad >");
    }

    #[test]
    fn colon_is_legal_payload_text() {
        assert_eq!(transform("[[echo:x]]((http://y))"), "<x|http://y>");
    }

    #[test]
    fn colon_in_label_abandons_the_token() {
        assert_eq!(transform("[[echo:a:b]]((c))"), "[[echo:a:b]]((c))");
    }

    #[test]
    fn single_paren_inside_payload_abandons_the_token() {
        assert_eq!(transform("[[echo:a]]((b(c)d))"), "[[echo:a]]((b(c)d))");
        assert_eq!(transform("[[echo:a]]((b)c))"), "[[echo:a]]((b)c))");
    }

    #[test]
    fn triple_open_bracket_passes_through() {
        assert_eq!(transform("[[[echo:a]]((b))"), "[[[echo:a]]((b))");
    }

    #[test]
    fn unrecognized_class_reserializes_canonically() {
        assert_eq!(transform("[[zzz:lbl]]((pay)))"), "[[zzz:lbl]]((pay)))");
    }

    #[test]
    fn unrecognized_class_is_idempotent() {
        let once = transform("[[zzz:lbl]]((pay))");
        assert_eq!(transform(&once), once);
    }

    #[test]
    fn empty_parts_are_preserved() {
        assert_eq!(transform("[[:]](())"), "[[:]](())");
    }

    #[test]
    fn concatenation_across_clean_boundaries() {
        let parts = ["dog ", "[[echo:a]]((b))", " cat [dog](hat) ", "[[zzz:l]]((p))"];
        for a in parts {
            for b in parts {
                let joined = format!("{a}{b}");
                assert_eq!(
                    transform(&joined),
                    format!("{}{}", transform(a), transform(b)),
                    "concatenation mismatch for {joined:?}"
                );
            }
        }
    }

    #[test]
    fn junk_never_panics_and_never_drops_input() {
        for input in [
            "([)]",
            ")(][",
            "[[a:b]]((c)",
            "[(])",
            "((dog)) [[cat]",
            "[[:]]((:))",
            "]]))[[((",
        ] {
            // No recognized token in any of these, so pass-through is exact.
            assert_eq!(transform(input), input);
        }
    }
}
