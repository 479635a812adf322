// Line parser for hand-written load order entries
//
// Each notation is an independent matcher. Matchers are tried in a fixed
// order, most constrained first, and the first match wins.

use super::record::{ModRecord, field};
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static::lazy_static! {
    /// `~~content~~` followed by any trailer, usually `(unavailable ...)`
    static ref UNAVAILABLE: Regex = Regex::new(
        r"^~~(?P<content>.*?)~~(?P<trailer>.*)$"
    )
    .expect("invalid unavailable pattern");

    /// `[version]` written right after the closing `~~`
    static ref LEADING_VERSION: Regex = Regex::new(
        r"^\s*\[(?P<version>[^\[\]]*)\](?P<rest>.*)$"
    )
    .expect("invalid leading version pattern");

    /// Trailing `[version]` inside struck-through content
    static ref TRAILING_VERSION: Regex = Regex::new(
        r"^(?P<name>.*?)\s*\[(?P<version>[^\[\]]*)\]$"
    )
    .expect("invalid trailing version pattern");

    /// `[name](url) [version] ([AIO](url)) ([INFO/README](url)) (note)`
    static ref LINKED: Regex = Regex::new(
        r"(?x)^
        \[(?P<name>[^\[\]]+)\]\(\s*(?P<link>(?:[^()\s]|\([^()\s]*\))+)\s*\)
        (?:\s*\[(?P<version>[^\[\]]*)\])?
        (?:\s*\(\s*\[(?i:aio)\]\(\s*(?P<aio>(?:[^()\s]|\([^()\s]*\))+)\s*\)\s*\))?
        (?:\s*\(\s*\[(?i:info/readme)\]\(\s*(?P<info>(?:[^()\s]|\([^()\s]*\))+)\s*\)\s*\))?
        (?:\s*\((?P<note>[^()\[\]]*)\))?
        $"
    )
    .expect("invalid linked pattern");

    /// `name [version] ([AIO](url)) (note)`
    static ref AIO_ONLY: Regex = Regex::new(
        r"(?x)^
        (?P<name>[^\[\]()]+?)\s*\[(?P<version>[^\[\]]*)\]
        \s*\(\s*\[(?i:aio)\]\(\s*(?P<aio>(?:[^()\s]|\([^()\s]*\))+)\s*\)\s*\)
        (?:\s*\((?P<note>[^()\[\]]*)\))?
        $"
    )
    .expect("invalid aio pattern");

    /// `name [version] (note)`
    static ref BRACKETED_VERSION: Regex = Regex::new(
        r"(?x)^
        (?P<name>[^\[\]()]+?)\s*\[(?P<version>[^\[\]]*)\]
        (?:\s*\((?P<note>[^()\[\]]*)\))?
        $"
    )
    .expect("invalid bracketed version pattern");
}

/// The notation a line was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    Unavailable,
    Linked,
    AioOnly,
    BracketedVersion,
    BareName,
}

impl Notation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Notation::Unavailable => "unavailable",
            Notation::Linked => "linked",
            Notation::AioOnly => "aio-only",
            Notation::BracketedVersion => "bracketed-version",
            Notation::BareName => "bare-name",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Matcher = fn(&str) -> Option<ModRecord>;

/// Matchers in priority order
const MATCHERS: &[(Notation, Matcher)] = &[
    (Notation::Unavailable, match_unavailable as Matcher),
    (Notation::Linked, match_linked as Matcher),
    (Notation::AioOnly, match_aio_only as Matcher),
    (Notation::BracketedVersion, match_bracketed_version as Matcher),
    (Notation::BareName, match_bare_name as Matcher),
];

/// Parse one line into a mod record
///
/// Returns `None` only for blank lines. Any other line yields a record,
/// falling back to treating the whole line as the mod name.
pub fn parse_line(line: &str) -> Option<ModRecord> {
    classify_line(line).map(|(_, record)| record)
}

/// Parse one line, also reporting which notation matched
pub fn classify_line(line: &str) -> Option<(Notation, ModRecord)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    MATCHERS
        .iter()
        .find_map(|(notation, matcher)| matcher(line).map(|record| (*notation, record)))
}

fn match_unavailable(line: &str) -> Option<ModRecord> {
    let caps = UNAVAILABLE.captures(line)?;
    let content = caps.name("content")?.as_str().trim();
    if content.is_empty() {
        return None;
    }
    let mut trailer = caps.name("trailer").map_or("", |m| m.as_str());

    // Links never appear inside struck-through text, only name and version
    let (name, mut version) = match TRAILING_VERSION.captures(content) {
        Some(inner) => match field(inner.name("name").map(|m| m.as_str())) {
            Some(name) => (name, field(inner.name("version").map(|m| m.as_str()))),
            None => (content.to_string(), None),
        },
        None => (content.to_string(), None),
    };

    if version.is_none()
        && let Some(outer) = LEADING_VERSION.captures(trailer)
    {
        version = field(outer.name("version").map(|m| m.as_str()));
        trailer = outer.name("rest").map_or("", |m| m.as_str());
    }

    Some(ModRecord {
        name,
        version,
        unavailable: true,
        note: Some(unavailable_note(trailer)),
        ..Default::default()
    })
}

const UNAVAILABLE_LABEL: &str = "unavailable";

fn strip_separators(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | ',' | '–'))
        .trim()
}

/// Note for a struck-through entry, built from the text after the closing `~~`
///
/// "(unavailable - reuploads exist)" and "- reuploads exist" both become
/// "unavailable (reuploads exist)"; no trailer gives plain "unavailable".
fn unavailable_note(trailer: &str) -> String {
    let trailer = trailer.trim();
    let inner = trailer
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(trailer);

    let mut body = strip_separators(inner);
    if let Some(head) = body.get(..UNAVAILABLE_LABEL.len())
        && head.eq_ignore_ascii_case(UNAVAILABLE_LABEL)
    {
        body = strip_separators(&body[UNAVAILABLE_LABEL.len()..]);
    }

    if body.is_empty() {
        UNAVAILABLE_LABEL.to_string()
    } else {
        format!("{} ({})", UNAVAILABLE_LABEL, body)
    }
}

fn match_linked(line: &str) -> Option<ModRecord> {
    let caps = LINKED.captures(line)?;
    let capture = |name: &str| field(caps.name(name).map(|m| m.as_str()));

    Some(ModRecord {
        name: capture("name")?,
        primary_link: capture("link"),
        version: capture("version"),
        aio_link: capture("aio"),
        info_link: capture("info"),
        unavailable: false,
        note: capture("note"),
    })
}

fn match_aio_only(line: &str) -> Option<ModRecord> {
    let caps = AIO_ONLY.captures(line)?;
    let capture = |name: &str| field(caps.name(name).map(|m| m.as_str()));

    Some(ModRecord {
        name: capture("name")?,
        version: capture("version"),
        aio_link: capture("aio"),
        note: capture("note"),
        ..Default::default()
    })
}

fn match_bracketed_version(line: &str) -> Option<ModRecord> {
    let caps = BRACKETED_VERSION.captures(line)?;
    let capture = |name: &str| field(caps.name(name).map(|m| m.as_str()));

    Some(ModRecord {
        name: capture("name")?,
        version: capture("version"),
        note: capture("note"),
        ..Default::default()
    })
}

fn match_bare_name(line: &str) -> Option<ModRecord> {
    field(Some(line)).map(ModRecord::named)
}
