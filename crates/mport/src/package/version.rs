//! Version ordering
//!
//! [`VersionComparator`] is the port the update engine and the `version -t`
//! command use. [`PkgVersion`] orders ports-style versions of the form
//! `version[_revision][,epoch]`.

use std::cmp::Ordering;

/// Port for ordering two version strings or OS-release tags
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait VersionComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Compares `version[_revision][,epoch]` strings.
///
/// The epoch is compared first, then the version body token by token, then
/// the revision. Body tokens are maximal runs of digits or of letters; any
/// other character only separates tokens. Digit runs compare numerically,
/// letter runs lexicographically, and a digit run is greater than a letter
/// run. When one body is a prefix of the other, a following letter run marks
/// a pre-release (`1.0rc1 < 1.0`) while a following digit run marks a later
/// version (`1.0 < 1.0.1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PkgVersion;

impl VersionComparator for PkgVersion {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let a = Parsed::new(a);
        let b = Parsed::new(b);

        compare_numeric(a.epoch, b.epoch)
            .then_with(|| compare_bodies(&a.body, &b.body))
            .then_with(|| compare_numeric(a.revision, b.revision))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Alpha(&'a str),
}

#[derive(Debug)]
struct Parsed<'a> {
    body: Vec<Token<'a>>,
    revision: &'a str,
    epoch: &'a str,
}

impl<'a> Parsed<'a> {
    fn new(version: &'a str) -> Self {
        let (rest, epoch) = match version.rsplit_once(',') {
            Some((rest, epoch)) => (rest, epoch),
            None => (version, "0"),
        };
        let (body, revision) = match rest.rsplit_once('_') {
            Some((body, revision)) if is_number(revision) => (body, revision),
            _ => (rest, "0"),
        };

        Self {
            body: tokenize(body),
            revision,
            epoch,
        }
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn tokenize(body: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = body.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        if bytes[i].is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            tokens.push(Token::Number(&body[start..i]));
        } else if bytes[i].is_ascii_alphabetic() {
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            tokens.push(Token::Alpha(&body[start..i]));
        } else {
            i += 1;
        }
    }

    tokens
}

/// Numeric comparison of digit strings of any length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_bodies(a: &[Token<'_>], b: &[Token<'_>]) -> Ordering {
    let mut a_iter = a.iter();
    let mut b_iter = b.iter();

    loop {
        match (a_iter.next(), b_iter.next()) {
            (None, None) => return Ordering::Equal,
            (Some(tail), None) => return trailing(tail),
            (None, Some(tail)) => return trailing(tail).reverse(),
            (Some(x), Some(y)) => {
                let ord = compare_tokens(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Ordering of the longer body against the shorter one it extends.
fn trailing(extra: &Token<'_>) -> Ordering {
    match extra {
        Token::Number(_) => Ordering::Greater,
        Token::Alpha(_) => Ordering::Less,
    }
}

fn compare_tokens(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Number(x), Token::Number(y)) => compare_numeric(x, y),
        (Token::Alpha(x), Token::Alpha(y)) => x.cmp(y),
        (Token::Number(_), Token::Alpha(_)) => Ordering::Greater,
        (Token::Alpha(_), Token::Number(_)) => Ordering::Less,
    }
}
