//! String functions.

use crate::ast::varargs::collect_varargs;
use crate::ast::{Expr, call};

/// Unicode normalization applied by [`casefold_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    Nfd,
    Nfc,
    Nfkd,
    Nfkc,
    NfkcCaseFold,
}

impl Normalizer {
    pub fn as_str(self) -> &'static str {
        match self {
            Normalizer::Nfd => "NFD",
            Normalizer::Nfc => "NFC",
            Normalizer::Nfkd => "NFKD",
            Normalizer::Nfkc => "NFKC",
            Normalizer::NfkcCaseFold => "NFKCCaseFold",
        }
    }
}

impl From<Normalizer> for Expr {
    fn from(normalizer: Normalizer) -> Self {
        Expr::from(normalizer.as_str())
    }
}

/// Concatenates an array of strings.
pub fn concat(terms: impl Into<Expr>) -> Expr {
    call("concat", terms).build()
}

/// Concatenates an array of strings with `separator` between them.
pub fn concat_with(terms: impl Into<Expr>, separator: impl Into<Expr>) -> Expr {
    call("concat", terms).field("separator", separator).build()
}

/// Case-folds a string using the server's default normalizer (NFKCCaseFold).
pub fn casefold(value: impl Into<Expr>) -> Expr {
    call("casefold", value).build()
}

pub fn casefold_with(value: impl Into<Expr>, normalizer: impl Into<Expr>) -> Expr {
    call("casefold", value).field("normalizer", normalizer).build()
}

/// Position of the first occurrence of `find` in `value`, or -1.
pub fn find_str(value: impl Into<Expr>, find: impl Into<Expr>) -> Expr {
    call("findstr", value).field("find", find).build()
}

pub fn find_str_from(value: impl Into<Expr>, find: impl Into<Expr>, start: impl Into<Expr>) -> Expr {
    call("findstr", value)
        .field("find", find)
        .field("start", start)
        .build()
}

/// Matches of the regular expression `pattern` in `value`.
pub fn find_str_regex(value: impl Into<Expr>, pattern: impl Into<Expr>) -> Expr {
    call("findstrregex", value).field("pattern", pattern).build()
}

pub fn find_str_regex_from(
    value: impl Into<Expr>,
    pattern: impl Into<Expr>,
    start: impl Into<Expr>,
) -> Expr {
    call("findstrregex", value)
        .field("pattern", pattern)
        .field("start", start)
        .build()
}

/// Like [`find_str_regex_from`], returning at most `num_results` matches.
pub fn find_str_regex_limit(
    value: impl Into<Expr>,
    pattern: impl Into<Expr>,
    start: impl Into<Expr>,
    num_results: impl Into<Expr>,
) -> Expr {
    call("findstrregex", value)
        .field("pattern", pattern)
        .field("start", start)
        .field("num_results", num_results)
        .build()
}

pub fn length(value: impl Into<Expr>) -> Expr {
    call("length", value).build()
}

pub fn lowercase(value: impl Into<Expr>) -> Expr {
    call("lowercase", value).build()
}

pub fn ltrim(value: impl Into<Expr>) -> Expr {
    call("ltrim", value).build()
}

/// N-grams of one string or an array of strings, with server default sizes.
pub fn ngram(terms: impl Into<Expr>) -> Expr {
    call("ngram", terms).build()
}

/// N-grams of one or more terms. A single term is emitted on its own.
pub fn ngram_terms<I>(terms: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("ngram", collect_varargs(terms)).build()
}

pub fn ngram_range(terms: impl Into<Expr>, min: impl Into<Expr>, max: impl Into<Expr>) -> Expr {
    call("ngram", terms).field("min", min).field("max", max).build()
}

/// Repeats a string twice.
pub fn repeat(value: impl Into<Expr>) -> Expr {
    call("repeat", value).build()
}

pub fn repeat_n(value: impl Into<Expr>, number: impl Into<Expr>) -> Expr {
    call("repeat", value).field("number", number).build()
}

pub fn replace_str(value: impl Into<Expr>, find: impl Into<Expr>, replace: impl Into<Expr>) -> Expr {
    call("replacestr", value)
        .field("find", find)
        .field("replace", replace)
        .build()
}

pub fn replace_str_regex(
    value: impl Into<Expr>,
    pattern: impl Into<Expr>,
    replace: impl Into<Expr>,
) -> Expr {
    call("replacestrregex", value)
        .field("pattern", pattern)
        .field("replace", replace)
        .build()
}

/// Like [`replace_str_regex`]; when `first` is true only the first match is
/// replaced.
pub fn replace_str_regex_first(
    value: impl Into<Expr>,
    pattern: impl Into<Expr>,
    replace: impl Into<Expr>,
    first: impl Into<Expr>,
) -> Expr {
    call("replacestrregex", value)
        .field("pattern", pattern)
        .field("replace", replace)
        .field("first", first)
        .build()
}

pub fn rtrim(value: impl Into<Expr>) -> Expr {
    call("rtrim", value).build()
}

/// A string of `count` spaces.
pub fn space(count: impl Into<Expr>) -> Expr {
    call("space", count).build()
}

pub fn substring(value: impl Into<Expr>) -> Expr {
    call("substring", value).build()
}

pub fn substring_from(value: impl Into<Expr>, start: impl Into<Expr>) -> Expr {
    call("substring", value).field("start", start).build()
}

pub fn substring_range(
    value: impl Into<Expr>,
    start: impl Into<Expr>,
    length: impl Into<Expr>,
) -> Expr {
    call("substring", value)
        .field("start", start)
        .field("length", length)
        .build()
}

pub fn titlecase(value: impl Into<Expr>) -> Expr {
    call("titlecase", value).build()
}

pub fn trim(value: impl Into<Expr>) -> Expr {
    call("trim", value).build()
}

pub fn uppercase(value: impl Into<Expr>) -> Expr {
    call("uppercase", value).build()
}
