use std::{cmp::Ordering, sync::LazyLock};

use regex::Regex;

use crate::entities::{NumberOrdering, TotalingRange};

static CHUNKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+|\D+").expect("static regex should compile"));

impl NumberOrdering {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            NumberOrdering::Lexical => a.cmp(b),
            NumberOrdering::Natural => natural_cmp(a, b).then_with(|| a.cmp(b)),
        }
    }

    pub(crate) fn in_range(&self, number: &str, range: &TotalingRange) -> bool {
        self.compare(number, &range.start) != Ordering::Less
            && self.compare(number, &range.end) != Ordering::Greater
    }
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chunks = CHUNKS.find_iter(a).map(|m| m.as_str());
    let mut b_chunks = CHUNKS.find_iter(b).map(|m| m.as_str());
    loop {
        match (a_chunks.next(), b_chunks.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => digits_cmp(x, y),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Compares two digit runs by value without parsing, so arbitrarily long
/// account numbers can't overflow.
fn digits_cmp(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}
