//! Per-run overwrite policy for language templates.
//!
//! A language may be written when no local `template/<language>` directory
//! exists or when overwriting was requested. The decision is taken the first
//! time a language is seen and reused for every later entry of that language,
//! so a language tree is never half-written because the filesystem changed
//! mid-run.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use crate::config::template_dir;

/// Answers whether a language already exists locally.
pub trait LanguageProbe {
    /// Returns `true` if a local directory for `language` exists.
    fn language_exists(&self, language: &str) -> bool;
}

/// Probe backed by the `template/` directory of a working directory.
#[derive(Debug, Clone)]
pub struct TemplateDirProbe {
    template_dir: PathBuf,
}

impl TemplateDirProbe {
    /// Creates a probe looking below `<workdir>/template`.
    #[must_use]
    pub fn new(workdir: &Path) -> Self {
        Self {
            template_dir: template_dir(workdir),
        }
    }
}

impl LanguageProbe for TemplateDirProbe {
    fn language_exists(&self, language: &str) -> bool {
        self.template_dir.join(language).exists()
    }
}

/// Memoized write-permission decisions, scoped to one expansion run.
#[derive(Debug)]
pub struct OverwritePolicy<P> {
    probe: P,
    decisions: HashMap<String, bool>,
}

impl<P: LanguageProbe> OverwritePolicy<P> {
    /// Creates an empty policy cache.
    #[must_use]
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            decisions: HashMap::new(),
        }
    }

    /// Decides whether `language` may be written.
    ///
    /// `overwrite` is only consulted the first time a language is seen.
    /// An empty language name is never writable and is not cached.
    pub fn decide(&mut self, language: &str, overwrite: bool) -> bool {
        if language.is_empty() {
            return false;
        }
        if let Some(&decision) = self.decisions.get(language) {
            return decision;
        }

        let writable = overwrite || !self.probe.language_exists(language);
        tracing::debug!(language, writable, "language decision");
        self.decisions.insert(language.to_string(), writable);
        writable
    }

    /// Returns the cached decision for `language`, if one was taken.
    #[must_use]
    pub fn cached(&self, language: &str) -> Option<bool> {
        self.decisions.get(language).copied()
    }

    /// Number of languages decided so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    /// Returns `true` if no decision was taken yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
