use serde::{Deserialize, Serialize};

use embedq_core::{EmbedOptions, EmbedToken, locate};

use crate::host::EditorHost;
use crate::plugin::PluginConfig;
use crate::service::{CodeGenerator, Notifier};

/// What the question-selector form is seeded with when the dialog opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPrefill {
    #[serde(rename = "contextId")]
    pub context_id: i64,
    #[serde(rename = "embedCode", skip_serializing_if = "Option::is_none")]
    pub embed_code: Option<String>,
}

pub struct DialogController {
    config: PluginConfig,
    open: bool,
}

impl DialogController {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dialog: seed the form with the embed code already under the
    /// selection, if there is one, so editing replaces rather than
    /// duplicates.
    pub fn open(&mut self, host: &dyn EditorHost) -> FormPrefill {
        self.open = true;
        FormPrefill {
            context_id: self.config.relevant_context_id,
            embed_code: locate_in_host(host).map(|token| token.content),
        }
    }

    /// Submit the form. Options that fail the caller-side guard issue no
    /// request at all. A generator failure goes to the notifier and the
    /// dialog stays open; on success the new code lands in the document and
    /// the dialog closes.
    pub fn submit(
        &mut self,
        host: &mut dyn EditorHost,
        generator: &dyn CodeGenerator,
        notifier: &dyn Notifier,
        options: &EmbedOptions,
    ) {
        if !self.open {
            return;
        }
        if !options.ready_to_submit() {
            return;
        }

        match generator.embed_code(options) {
            Ok(code) => {
                insert_embed_code(host, &code);
                self.open = false;
            }
            Err(error) => notifier.exception(&error),
        }
    }
}

/// Run the locator against the host's current selection and surrounding
/// text node.
pub fn locate_in_host(host: &dyn EditorHost) -> Option<EmbedToken> {
    let selection = host.selection();
    let text = host.surrounding_text();
    locate(&text, selection.as_ref())
}

// Splice over the located span when the selection sits inside an existing
// token; otherwise plain insertion at the caret.
fn insert_embed_code(host: &mut dyn EditorHost, code: &str) {
    let Some(token) = locate_in_host(host) else {
        host.insert_content(code);
        return;
    };

    let text = host.surrounding_text();
    let mut next = String::with_capacity(text.len() + code.len());
    next.push_str(text.get(..token.start).unwrap_or(""));
    next.push_str(code);
    next.push_str(text.get(token.end..).unwrap_or(""));
    host.set_surrounding_text(next);
}
