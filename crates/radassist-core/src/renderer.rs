//! The form renderer.
//!
//! Every interaction is one top-to-bottom render pass: heading, description,
//! name input, button, and (only when the button was clicked in this
//! interaction) the greeting. Nothing is kept between passes.

use crate::config::PageSettings;
use crate::page::{Element, Interaction, Page};
use crate::user_name::UserName;

/// Format the greeting for a name.
///
/// The name is interpolated verbatim, so an empty name gives
/// `"Hello, ! Ready to work on reports?"`.
///
/// ```
/// use radassist_core::{greeting, UserName};
///
/// assert_eq!(
///     greeting(&UserName::new("Dr. Jones")),
///     "Hello, Dr. Jones! Ready to work on reports?"
/// );
/// ```
pub fn greeting(name: &UserName) -> String {
    format!("Hello, {name}! Ready to work on reports?")
}

/// Renders the greeting page for one interaction.
#[derive(Debug, Clone, Default)]
pub struct FormRenderer {
    settings: PageSettings,
}

impl FormRenderer {
    /// Create a renderer with the given labels and defaults.
    pub fn new(settings: PageSettings) -> Self {
        Self { settings }
    }

    /// The labels and defaults this renderer uses.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Resolve the bound input value for an interaction.
    pub fn user_name(&self, interaction: &Interaction) -> UserName {
        match &interaction.user_name {
            Some(name) => UserName::new(name.as_str()),
            None => UserName::new(self.settings.default_name.as_str()),
        }
    }

    /// Run one render pass.
    pub fn render(&self, interaction: &Interaction) -> Page {
        let name = self.user_name(interaction);
        tracing::debug!(
            activated = interaction.activated,
            edited = interaction.user_name.is_some(),
            name_len = name.as_str().chars().count(),
            "render pass"
        );

        let mut elements = vec![
            Element::Title(self.settings.title.clone()),
            Element::Text(self.settings.description.clone()),
            Element::TextInput {
                label: self.settings.input_label.clone(),
                value: name.as_str().to_string(),
            },
            Element::Button {
                label: self.settings.button_label.clone(),
            },
        ];

        if interaction.activated {
            tracing::info!(action = "SAY_HELLO", "button activated");
            elements.push(Element::Greeting(greeting(&name)));
        }

        Page {
            page_title: self.settings.page_title.clone(),
            elements,
        }
    }
}
