use crate::types::{ActionTarget, IconName};
use serde::{Deserialize, Serialize};

/// Label shown on an action button when the deck does not name one.
pub const DEFAULT_ACTION_LABEL: &str = "Learn More";

/// One display unit rotated by the carousel.
///
/// Slides are immutable once a carousel is built around them; the engine only
/// ever hands out shared references.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<SlideAction>,
}

/// Call-to-action attached to a slide. Invoked by the renderer, never by the engine.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SlideAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub target: ActionTarget,
}

impl Slide {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: None,
            action: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, label: Option<&str>, target: impl Into<ActionTarget>) -> Self {
        self.action = Some(SlideAction {
            label: label.map(str::to_owned),
            target: target.into(),
        });
        self
    }

    /// Button label for this slide's action, if it has one.
    pub fn action_label(&self) -> Option<&str> {
        self.action.as_ref().map(SlideAction::label)
    }
}

impl SlideAction {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_ACTION_LABEL)
    }
}
