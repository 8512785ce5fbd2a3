use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("{strategy} clipboard unavailable: {reason}")]
    Unavailable { strategy: &'static str, reason: String },
    #[error("{strategy} clipboard rejected the write: {reason}")]
    Rejected { strategy: &'static str, reason: String },
    #[error("no clipboard strategy succeeded")]
    Exhausted,
}

/// One way of putting text on the clipboard.
pub trait CopyStrategy {
    fn name(&self) -> &'static str;
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Tries each strategy in order until one succeeds.
pub struct ClipboardCopier {
    strategies: Vec<Box<dyn CopyStrategy>>,
}

impl ClipboardCopier {
    pub fn new(strategies: Vec<Box<dyn CopyStrategy>>) -> Self {
        Self { strategies }
    }

    /// The platform clipboard first, then egui's own output channel.
    pub fn with_egui_fallback(ctx: egui::Context) -> Self {
        Self::new(vec![
            Box::new(SystemClipboard::default()),
            Box::new(EguiClipboard::new(ctx)),
        ])
    }

    /// Returns the name of the strategy that took the text.
    pub fn copy(&mut self, text: &str) -> Result<&'static str, ClipboardError> {
        for strategy in self.strategies.iter_mut() {
            match strategy.copy(text) {
                Ok(()) => {
                    tracing::debug!(strategy = strategy.name(), chars = text.chars().count(), "copied");
                    return Ok(strategy.name());
                }
                Err(e) => tracing::warn!(strategy = strategy.name(), error = %e, "copy attempt failed"),
            }
        }
        tracing::error!("unable to copy: every clipboard strategy failed");
        Err(ClipboardError::Exhausted)
    }
}

/// The OS clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(not(windows))]
    inner: Option<arboard::Clipboard>,
}

impl CopyStrategy for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    #[cfg(windows)]
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        clipboard_win::set_clipboard_string(text).map_err(|e| ClipboardError::Rejected {
            strategy: self.name(),
            reason: e.to_string(),
        })
    }

    #[cfg(not(windows))]
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        // X11 drops the selection together with its owner, so the handle is kept.
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
                strategy: "system",
                reason: e.to_string(),
            })?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable {
                strategy: "system",
                reason: "no clipboard handle".to_string(),
            });
        };
        clipboard.set_text(text.to_owned()).map_err(|e| ClipboardError::Rejected {
            strategy: "system",
            reason: e.to_string(),
        })
    }
}

/// Stages the text in the frame's platform output; the windowing backend
/// (or the browser integration on wasm) performs the copy when the frame ends.
pub struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl CopyStrategy for EguiClipboard {
    fn name(&self) -> &'static str {
        "egui"
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Rejected {
                strategy: self.name(),
                reason: "nothing to copy".to_string(),
            });
        }
        self.ctx.output_mut(|o| o.copied_text = text.to_owned());
        Ok(())
    }
}
