//! Text normalization
//!
//! Turns arbitrary input into the canonical form the planner and splitter
//! operate on. The passes run in a fixed order:
//!
//! 1. drop a leading byte-order mark
//! 2. replace U+FFFD with a space
//! 3. replace every codepoint in general category `C*` or `So` with a space
//! 4. replace every case-insensitive `null` with a space
//! 5. collapse runs of ASCII spaces
//! 6. trim surrounding whitespace
//!
//! Each pass borrows its input when it has nothing to change, so clean text
//! goes through without a copy until the final `String`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Control, format, private-use, surrogate, unassigned and other-symbol codepoints
const STRIPPED_CATEGORIES: &str = r"[\p{C}\p{So}]";
const NULL_LITERAL: &str = r"(?i)null";
const SPACE_RUN: &str = r" {2,}";

static STRIPPED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRIPPED_CATEGORIES).expect("valid category pattern"));
static NULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NULL_LITERAL).expect("valid null pattern"));
static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPACE_RUN).expect("valid space-run pattern"));

/// Normalize raw text into canonical form. Total and idempotent.
pub fn normalize(raw: &str) -> String {
    let text = strip_bom(raw);
    let text = replace_replacement_chars(text);
    let text = strip_categories(text);
    let text = replace_null_literals(text);
    let text = collapse_spaces(text);
    text.trim().to_string()
}

/// Whether `ch` falls in a category the normalizer replaces
pub fn is_stripped_char(ch: char) -> bool {
    let mut buf = [0u8; 4];
    STRIPPED_RE.is_match(ch.encode_utf8(&mut buf))
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

fn replace_replacement_chars(text: &str) -> Cow<'_, str> {
    if text.contains(REPLACEMENT_CHARACTER) {
        Cow::Owned(text.replace(REPLACEMENT_CHARACTER, " "))
    } else {
        Cow::Borrowed(text)
    }
}

fn strip_categories(text: Cow<'_, str>) -> Cow<'_, str> {
    replace_all(text, &STRIPPED_RE)
}

fn replace_null_literals(text: Cow<'_, str>) -> Cow<'_, str> {
    replace_all(text, &NULL_RE)
}

fn collapse_spaces(text: Cow<'_, str>) -> Cow<'_, str> {
    replace_all(text, &SPACE_RUN_RE)
}

/// Replace every match with a single space, keeping the borrow when nothing matches
fn replace_all<'a>(text: Cow<'a, str>, re: &Regex) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => re.replace_all(s, " "),
        Cow::Owned(s) => match re.replace_all(&s, " ") {
            Cow::Borrowed(_) => Cow::Owned(s),
            Cow::Owned(replaced) => Cow::Owned(replaced),
        },
    }
}
