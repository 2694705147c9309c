use anyhow::Result;

use embedq_core::EmbedOptions;

/// Remote call that turns embedding options into an opaque embed-code
/// string. One request per submit; no retry.
pub trait CodeGenerator {
    fn embed_code(&self, options: &EmbedOptions) -> Result<String>;
}

/// Sink for failures the dialog flow cannot handle itself.
pub trait Notifier {
    fn exception(&self, error: &anyhow::Error);
}
