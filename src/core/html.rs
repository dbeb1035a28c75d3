// src/core/html.rs
//! Structure lookups over a parsed `scraper::Html` tree.
//!
//! Lookups search the *descendants* of a scope element, in document order,
//! for the first element with a given tag name that satisfies an [`Attr`]
//! predicate. [`find`] reports absence as `None`; [`locate`] turns absence
//! into `ScrapeError::StructureNotFound` right at the lookup site.

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::error::{Result, ScrapeError};

/// Attribute predicate of a structure lookup.
#[derive(Clone, Copy, Debug)]
pub enum Attr<'p> {
    Any,
    /// Exact `id`.
    Id(&'p str),
    /// One of the whitespace-separated `class` tokens.
    Class(&'p str),
    /// Exact `role`.
    Role(&'p str),
    /// Regex search against `href`; elements without one never match.
    HrefMatches(&'p Regex),
}

impl Attr<'_> {
    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let v = el.value();
        match *self {
            Attr::Any => true,
            Attr::Id(id) => v.id() == Some(id),
            Attr::Class(class) => v.classes().any(|c| c == class),
            Attr::Role(role) => v.attr("role") == Some(role),
            Attr::HrefMatches(re) => v.attr("href").is_some_and(|h| re.is_match(h)),
        }
    }
}

/// Top-level scope of a document.
pub fn root(doc: &Html) -> ElementRef<'_> {
    doc.root_element()
}

/// All descendants of `scope` named `tag` and matching `attr`, in document order.
pub fn find_all<'a, 'p>(
    scope: ElementRef<'a>,
    tag: &'p str,
    attr: Attr<'p>,
) -> impl Iterator<Item = ElementRef<'a>> {
    scope
        .descendants()
        .skip(1) // the scope itself
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag && attr.matches(el))
}

pub fn find<'a>(scope: ElementRef<'a>, tag: &str, attr: Attr<'_>) -> Option<ElementRef<'a>> {
    find_all(scope, tag, attr).next()
}

/// Like [`find`], but a missing element is a `StructureNotFound` error
/// described by `what`.
pub fn locate<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    attr: Attr<'_>,
    what: &str,
) -> Result<ElementRef<'a>> {
    find(scope, tag, attr).ok_or_else(|| ScrapeError::not_found(what))
}

/// Concatenated text of every text node under `el`, untouched.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
