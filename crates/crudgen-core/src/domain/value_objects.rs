//! Domain value objects: Action, ActionSet, ConfigFormat.
//!
//! # Design
//!
//! These are pure value types — `Copy` where possible, equality-by-value,
//! no identity. This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Path composition and
//! variable assembly live in `context.rs`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Action ───────────────────────────────────────────────────────────────────

/// One of the five scaffold operation kinds.
///
/// The generated controller, views, tests and routes support exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Index,
    Show,
    New,
    Edit,
    Delete,
}

impl Action {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Show => "show",
            Self::New => "new",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Whether this action renders a per-record link in the list view.
    pub const fn is_record_action(self) -> bool {
        matches!(self, Self::Show | Self::Edit | Self::Delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" | "list" => Ok(Self::Index),
            "show" => Ok(Self::Show),
            "new" | "create" => Ok(Self::New),
            "edit" | "update" => Ok(Self::Edit),
            "delete" | "remove" => Ok(Self::Delete),
            other => Err(DomainError::UnknownAction { name: other.into() }),
        }
    }
}

// ── ActionSet ─────────────────────────────────────────────────────────────────

/// The ordered set of enabled scaffold actions.
///
/// `index` and `show` are always present. The write actions (`new`, `edit`,
/// `delete`) are enabled together as a unit, never individually. The set is
/// immutable after construction; order is significant and flows verbatim
/// into the rendered artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet(Vec<Action>);

impl ActionSet {
    /// The base set: `[index, show]`.
    pub fn read_only() -> Self {
        Self(vec![Action::Index, Action::Show])
    }

    /// The full set: `[index, show, new, edit, delete]`.
    pub fn full() -> Self {
        Self(vec![
            Action::Index,
            Action::Show,
            Action::New,
            Action::Edit,
            Action::Delete,
        ])
    }

    /// Documented default composition: base set, plus the three write
    /// actions appended as an atomic unit when requested.
    pub fn with_write_actions(write_actions: bool) -> Self {
        if write_actions { Self::full() } else { Self::read_only() }
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0.contains(&action)
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Action names in set order, as rendered into templates.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|a| a.as_str().to_string()).collect()
    }

    /// The subset rendered as per-record links in the list view:
    /// `{show, edit, delete}` ∩ self, preserving set order.
    pub fn record_actions(&self) -> Vec<Action> {
        self.0
            .iter()
            .copied()
            .filter(|a| a.is_record_action())
            .collect()
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|a| a.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

// ── ConfigFormat ──────────────────────────────────────────────────────────────

/// The routing-configuration format selector.
///
/// Drives which routing artifact (if any) is produced: `yml` and `xml` emit
/// a separate routing file; `annotation` embeds routing in the controller
/// source and emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Yml,
    Xml,
    Annotation,
}

impl ConfigFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yml => "yml",
            Self::Xml => "xml",
            Self::Annotation => "annotation",
        }
    }

    /// Whether this format produces a standalone routing-configuration file.
    pub const fn emits_routing_file(self) -> bool {
        matches!(self, Self::Yml | Self::Xml)
    }

    /// Normalize an arbitrary selector to a canonical format.
    ///
    /// Any unrecognized value falls back to `yml` — inherited behavior, kept
    /// deliberately. Callers that want to surface the fallback (the CLI
    /// does) should first attempt a strict parse and warn on failure.
    pub fn normalize_or_default(s: &str) -> Self {
        s.parse().unwrap_or(Self::Yml)
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Ok(Self::Yml),
            "xml" => Ok(Self::Xml),
            "annotation" | "annotations" => Ok(Self::Annotation),
            other => Err(DomainError::UnknownFormat { name: other.into() }),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
