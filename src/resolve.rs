//! Inline reference resolution.
//!
//! Descriptions point at other classes and symbols with `[ClassName]`,
//! `[symbol]` and `[ClassName.symbol]`. [`scan`] lazily yields those tokens
//! with their byte spans; [`resolve`] splices a link or the untouched original
//! text in their place, so repeated identical tokens are handled one by one.

use crate::index::ClassIndex;
use crate::render::markdown::link;
use crate::toc::symbol_anchor;
use crate::warning::WarningSink;
use regex::{CaptureMatches, Regex};
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[(?:(?P<class>[A-Z][A-Za-z0-9]*)(?:\.(?P<member>[a-z0-9_]+))?|(?P<symbol>[a-z0-9_]+))\]",
    )
    .unwrap()
});

/// A parsed bracket reference, borrowing from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference<'t> {
    /// `[ClassName]`
    Class(&'t str),
    /// `[symbol]`, a member of the class being documented
    Symbol(&'t str),
    /// `[ClassName.symbol]`
    Member { class: &'t str, symbol: &'t str },
}

impl Reference<'_> {
    /// Link text, exactly as written.
    pub fn display(&self) -> String {
        match self {
            Reference::Class(class) => class.to_string(),
            Reference::Symbol(symbol) => symbol.to_string(),
            Reference::Member { class, symbol } => format!("{}.{}", class, symbol),
        }
    }

    /// Link target: `Class`, `#symbol` or `Class#symbol`.
    pub fn target(&self) -> String {
        match self {
            Reference::Class(class) => class.to_string(),
            Reference::Symbol(symbol) => symbol_anchor(symbol),
            Reference::Member { class, symbol } => format!("{}{}", class, symbol_anchor(symbol)),
        }
    }
}

/// A reference and where it sits in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    pub span: Range<usize>,
    pub reference: Reference<'t>,
}

/// Lazy iterator over the reference tokens of a text.
pub struct References<'t> {
    text: &'t str,
    captures: CaptureMatches<'static, 't>,
}

/// Scan `text` for reference tokens, left to right.
pub fn scan(text: &str) -> References<'_> {
    References {
        text,
        captures: RE_REFERENCE.captures_iter(text),
    }
}

impl<'t> Iterator for References<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        for caps in self.captures.by_ref() {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            // `[text](url)` is already a Markdown link
            if self.text[whole.end()..].starts_with('(') {
                continue;
            }
            let reference = match (caps.name("class"), caps.name("member"), caps.name("symbol")) {
                (Some(class), Some(member), _) => Reference::Member {
                    class: class.as_str(),
                    symbol: member.as_str(),
                },
                (Some(class), None, _) => Reference::Class(class.as_str()),
                (None, _, Some(symbol)) => Reference::Symbol(symbol.as_str()),
                _ => continue,
            };
            return Some(Token {
                span: whole.range(),
                reference,
            });
        }
        None
    }
}

/// Why a reference was left as written.
#[derive(Debug, PartialEq, Eq)]
enum Unresolved<'a> {
    Class(&'a str),
    Symbol { symbol: &'a str, class: &'a str },
}

impl fmt::Display for Unresolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::Class(class) => write!(
                f,
                "Class {} not found in the class index. The name might be incorrect.",
                class
            ),
            Unresolved::Symbol { symbol, class } => write!(
                f,
                "Symbol {} not found in {}. The name might be incorrect.",
                symbol, class
            ),
        }
    }
}

/// Check a reference against the index. A bare symbol must belong to
/// `current_class`; an unindexed current class counts as "not found".
fn check<'a>(
    index: &ClassIndex,
    current_class: &'a str,
    reference: &Reference<'a>,
) -> Result<(), Unresolved<'a>> {
    let (class, symbol) = match *reference {
        Reference::Class(class) => (class, None),
        Reference::Member { class, symbol } => (class, Some(symbol)),
        Reference::Symbol(symbol) => (current_class, Some(symbol)),
    };

    let explicit_class = !matches!(reference, Reference::Symbol(_));
    if explicit_class && !index.contains(class) {
        return Err(Unresolved::Class(class));
    }

    if let Some(symbol) = symbol {
        let is_member = index
            .members_of(class)
            .is_some_and(|members| members.contains(symbol));
        if !is_member {
            return Err(Unresolved::Symbol { symbol, class });
        }
    }
    Ok(())
}

/// Replace every valid reference in `text` with a Markdown link.
///
/// Invalid references stay verbatim and produce one warning each.
pub fn resolve(
    index: &ClassIndex,
    current_class: &str,
    text: &str,
    sink: &mut dyn WarningSink,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for token in scan(text) {
        out.push_str(&text[last..token.span.start]);
        match check(index, current_class, &token.reference) {
            Ok(()) => out.push_str(&link(&token.reference.display(), &token.reference.target())),
            Err(unresolved) => {
                sink.warn(&unresolved.to_string());
                out.push_str(&text[token.span.clone()]);
            }
        }
        last = token.span.end;
    }

    out.push_str(&text[last..]);
    out
}
