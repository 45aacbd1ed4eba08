//! Tab completion
//!
//! The session only knows the [`Completer`] interface. [`PrefixCompleter`]
//! is a flat word-list resolver for firmware that has no command tree.

use super::io::Sink;

/// Resolver answer for a partial token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion<'c> {
    /// Nothing starts with the token
    NoMatch,
    /// Exactly one candidate; carries the text to append to the token
    Single(&'c str),
    /// Several candidates; carries the text to append for display
    Multiple(&'c str),
    /// Resolver could not evaluate the token
    Error,
}

/// External autocomplete resolver.
///
/// On [`Completion::Multiple`] the resolver is expected to have printed
/// the candidates to `out` already; the session redraws the prompt and
/// line afterwards.
pub trait Completer {
    fn complete<'c>(&'c mut self, partial: &str, out: &mut dyn Sink) -> Completion<'c>;
}

/// Completes against a static word list
#[derive(Debug, Clone, Copy)]
pub struct PrefixCompleter<'a> {
    words: &'a [&'a str],
    separator: &'a str,
}

impl<'a> PrefixCompleter<'a> {
    /// Create new completer, candidates listed one per CRLF line
    pub const fn new(words: &'a [&'a str]) -> Self {
        Self { words, separator: "\r\n" }
    }

    /// Use another separator when listing candidates
    pub const fn with_separator(self, separator: &'a str) -> Self {
        Self { words: self.words, separator }
    }

    fn matches<'p>(&self, partial: &'p str) -> impl Iterator<Item = &'a str> + 'p
    where
        'a: 'p,
    {
        let words = self.words;
        words.iter().copied().filter(move |w| w.starts_with(partial))
    }
}

impl Completer for PrefixCompleter<'_> {
    fn complete<'c>(&'c mut self, partial: &str, out: &mut dyn Sink) -> Completion<'c> {
        let mut matches = self.matches(partial);
        let Some(first) = matches.next() else {
            return Completion::NoMatch;
        };

        let mut common = first.len();
        let mut count = 1;
        for word in matches {
            common = common_prefix_len(&first[..common], word);
            count += 1;
        }

        if count == 1 {
            return Completion::Single(&first[partial.len()..]);
        }

        for word in self.matches(partial) {
            out.write_bytes(self.separator.as_bytes());
            out.write_bytes(word.as_bytes());
        }

        Completion::Multiple(&first[partial.len()..common])
    }
}

/// Length of the shared prefix, on a char boundary of `a`
fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    while !a.is_char_boundary(len) {
        len -= 1;
    }
    len
}
