//! Page model: what a host delivers to a render pass and what it gets back.

// ============================================================================
// Interaction
// ============================================================================

/// The user interaction a host delivers for one render pass.
///
/// `user_name` is the restored input value. `None` means the user has not
/// edited the input and the configured default applies; `Some("")` is an
/// explicitly cleared input and stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Current value of the text input, if one was delivered.
    pub user_name: Option<String>,
    /// Whether the button was clicked in this interaction.
    pub activated: bool,
}

impl Interaction {
    /// The initial page load: no edits, no click.
    pub fn initial() -> Self {
        Self::default()
    }

    /// An interaction carrying an input value, without a click.
    pub fn edited<S: Into<String>>(user_name: S) -> Self {
        Self {
            user_name: Some(user_name.into()),
            activated: false,
        }
    }

    /// A button click with the given input value.
    pub fn clicked<S: Into<String>>(user_name: S) -> Self {
        Self {
            user_name: Some(user_name.into()),
            activated: true,
        }
    }

    /// Sets whether the button was clicked.
    pub fn with_activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }
}

// ============================================================================
// Element
// ============================================================================

/// One rendered widget, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Page heading.
    Title(String),
    /// Static line of text.
    Text(String),
    /// Labeled text input and its current value.
    TextInput {
        /// Label shown next to the input.
        label: String,
        /// Current value.
        value: String,
    },
    /// Push button.
    Button {
        /// Button caption.
        label: String,
    },
    /// Greeting shown after the button was clicked.
    Greeting(String),
}

// ============================================================================
// Page
// ============================================================================

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Document title (browser tab), separate from the in-page heading.
    pub page_title: String,
    /// Rendered widgets in display order.
    pub elements: Vec<Element>,
}

impl Page {
    /// The in-page heading, if rendered.
    pub fn title(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Current value of the text input, if rendered.
    pub fn input_value(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::TextInput { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }

    /// The greeting, if this pass rendered one.
    pub fn greeting(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Greeting(g) => Some(g.as_str()),
            _ => None,
        })
    }

    /// Returns `true` if this pass rendered a greeting.
    pub fn has_greeting(&self) -> bool {
        self.greeting().is_some()
    }
}
