//! Classification of archive entry names.
//!
//! Repository archives wrap everything in one synthetic top-level directory
//! (`<repo>-master/`). Below it only `template/<language>/...` is of interest.

use std::path::Component;
use std::path::Path;

/// Prefix every eligible relative path starts with.
pub const TEMPLATE_PREFIX: &str = "template/";

/// Segment count of a language root directory (`template/<language>/`).
const LANGUAGE_ROOT_SEGMENTS: usize = 3;

/// What an archive entry means for template expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// Outside `template/`; ignored without side effects.
    NotTemplate,
    /// `template/` itself, or a file directly inside it; always skipped.
    RootMarker,
    /// The `template/<language>/` directory; triggers the policy decision.
    LanguageRoot {
        /// Language name.
        language: &'a str,
    },
    /// Anything nested below a language.
    LanguageChild {
        /// Language name.
        language: &'a str,
    },
}

impl<'a> EntryKind<'a> {
    /// Returns the language this entry belongs to, if any.
    #[must_use]
    pub const fn language(&self) -> Option<&'a str> {
        match self {
            Self::LanguageRoot { language } | Self::LanguageChild { language } => Some(*language),
            Self::NotTemplate | Self::RootMarker => None,
        }
    }
}

/// Strips the synthetic top-level segment from an entry name.
///
/// A name without any `/` is returned unchanged.
///
/// # Examples
///
/// ```
/// use tmplfetch_core::extraction::relative_path;
///
/// assert_eq!(relative_path("faas-cli-master/template/go/"), "template/go/");
/// assert_eq!(relative_path("README.md"), "README.md");
/// ```
#[must_use]
pub fn relative_path(name: &str) -> &str {
    name.split_once('/').map_or(name, |(_, rest)| rest)
}

/// Returns `true` if the relative path denotes a directory entry.
#[must_use]
pub fn is_directory(relative: &str) -> bool {
    relative.ends_with('/')
}

/// Returns the directory part of a relative path: the path itself for a
/// directory entry, its parent for a file.
#[must_use]
pub fn directory_of(relative: &str) -> &str {
    relative.rfind('/').map_or("", |index| &relative[..index])
}

/// Returns `true` if the relative path stays below the working directory.
///
/// Only normal segments are accepted. A `..` segment, a root or a drive
/// prefix make the path unsafe to join onto the working directory.
///
/// # Examples
///
/// ```
/// use tmplfetch_core::extraction::is_contained;
///
/// assert!(is_contained("template/go/handler.go"));
/// assert!(!is_contained("template/go/../../escaped.txt"));
/// ```
#[must_use]
pub fn is_contained(relative: &str) -> bool {
    !relative.is_empty()
        && Path::new(relative)
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}

/// Classifies a relative path.
///
/// # Examples
///
/// ```
/// use tmplfetch_core::EntryKind;
/// use tmplfetch_core::extraction::classify;
///
/// assert_eq!(classify("docs/index.md"), EntryKind::NotTemplate);
/// assert_eq!(classify("template/"), EntryKind::RootMarker);
/// assert_eq!(classify("template/go/"), EntryKind::LanguageRoot { language: "go" });
/// assert_eq!(
///     classify("template/go/handler.go"),
///     EntryKind::LanguageChild { language: "go" }
/// );
/// ```
#[must_use]
pub fn classify(relative: &str) -> EntryKind<'_> {
    if !relative.starts_with(TEMPLATE_PREFIX) {
        return EntryKind::NotTemplate;
    }

    let mut segments = relative.split('/');
    let segment_count = segments.clone().count();
    if segment_count < LANGUAGE_ROOT_SEGMENTS {
        return EntryKind::RootMarker;
    }

    let language = segments.nth(1).unwrap_or_default();
    if segment_count == LANGUAGE_ROOT_SEGMENTS && is_directory(relative) {
        EntryKind::LanguageRoot { language }
    } else {
        EntryKind::LanguageChild { language }
    }
}
