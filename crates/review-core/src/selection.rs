//! Exclusive-selection state machine for tab strips and accordions.
//!
//! A group owns a fixed, ordered label set and at most one active label.
//! The HTML renderer seeds each group's initial state from here; the client
//! script applies the same transitions on click.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// How a group reacts to selecting its active label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Accordion: selecting the open item closes it.
    Toggle,
    /// Tab strip: reselecting is a no-op, never closes.
    Tabs,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Toggle => "toggle",
            SelectionMode::Tabs => "tabs",
        }
    }
}

/// State of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "label", rename_all = "snake_case")]
pub enum Selection<L> {
    Closed,
    OpenOn(L),
}

impl<L> Selection<L> {
    pub fn is_closed(&self) -> bool {
        matches!(self, Selection::Closed)
    }
}

/// One tab strip or accordion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionGroup<L> {
    mode: SelectionMode,
    labels: Vec<L>,
    state: Selection<L>,
}

impl<L> SelectionGroup<L>
where
    L: Clone + PartialEq + fmt::Display,
{
    /// A closed group over `labels`.
    pub fn new(mode: SelectionMode, labels: impl IntoIterator<Item = L>) -> Self {
        Self {
            mode,
            labels: labels.into_iter().collect(),
            state: Selection::Closed,
        }
    }

    /// A closed accordion group.
    pub fn accordion(labels: impl IntoIterator<Item = L>) -> Self {
        Self::new(SelectionMode::Toggle, labels)
    }

    /// A closed tab strip. Usually followed by [`with_default`](Self::with_default).
    pub fn tabs(labels: impl IntoIterator<Item = L>) -> Self {
        Self::new(SelectionMode::Tabs, labels)
    }

    /// Start open on `label`.
    pub fn with_default(mut self, label: L) -> Result<Self, SelectionError> {
        self.ensure_known(&label)?;
        self.state = Selection::OpenOn(label);
        Ok(self)
    }

    /// Apply a click on `label`.
    ///
    /// An unknown label is rejected and the state is left as it was.
    pub fn select(&mut self, label: &L) -> Result<&Selection<L>, SelectionError> {
        self.ensure_known(label)?;

        let reselect = self.is_active(label);
        match (self.mode, reselect) {
            (SelectionMode::Toggle, true) => self.state = Selection::Closed,
            (SelectionMode::Tabs, true) => {}
            (_, false) => self.state = Selection::OpenOn(label.clone()),
        }
        Ok(&self.state)
    }

    pub fn state(&self) -> &Selection<L> {
        &self.state
    }

    /// The open label, if any.
    pub fn active(&self) -> Option<&L> {
        match &self.state {
            Selection::OpenOn(label) => Some(label),
            Selection::Closed => None,
        }
    }

    pub fn is_active(&self, label: &L) -> bool {
        self.active() == Some(label)
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    fn ensure_known(&self, label: &L) -> Result<(), SelectionError> {
        if self.labels.contains(label) {
            Ok(())
        } else {
            Err(SelectionError::UnknownLabel(label.to_string()))
        }
    }
}
