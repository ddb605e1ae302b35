//! Terminal output primitives for the CLI
//!
//! Semantic colors and status glyphs with plain-ASCII fallback. Rendering
//! takes explicit capability flags so output is deterministic under test
//! and in CI.

pub mod text;

pub use text::ColoredText;

use is_terminal::IsTerminal;

use crate::config::ColorMode;

/// Status glyphs, unicode and ASCII
pub mod glyphs {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    pub const SUCCESS_ASCII: &str = "[OK]";
    pub const ERROR_ASCII: &str = "[FAIL]";
    pub const WARNING_ASCII: &str = "[WARN]";
    pub const ARROW_ASCII: &str = "[>]";
}

/// Resolved output capabilities for one CLI run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputContext {
    pub color: bool,
    pub unicode: bool,
}

impl OutputContext {
    /// Resolve from the configured mode, a `--no-color` override, and
    /// whether stdout is a terminal
    pub fn detect(mode: ColorMode, no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let color = if no_color_flag {
            false
        } else {
            match mode {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => is_tty && std::env::var_os("NO_COLOR").is_none(),
            }
        };
        Self {
            color,
            unicode: is_tty,
        }
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    pub fn success_glyph(&self) -> &'static str {
        if self.unicode {
            glyphs::SUCCESS
        } else {
            glyphs::SUCCESS_ASCII
        }
    }

    pub fn error_glyph(&self) -> &'static str {
        if self.unicode {
            glyphs::ERROR
        } else {
            glyphs::ERROR_ASCII
        }
    }

    pub fn warning_glyph(&self) -> &'static str {
        if self.unicode {
            glyphs::WARNING
        } else {
            glyphs::WARNING_ASCII
        }
    }

    pub fn arrow_glyph(&self) -> &'static str {
        if self.unicode {
            glyphs::ARROW
        } else {
            glyphs::ARROW_ASCII
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_context_uses_ascii() {
        let ctx = OutputContext::plain();
        assert_eq!(ctx.success_glyph(), "[OK]");
        assert_eq!(ctx.warning_glyph(), "[WARN]");
    }

    #[test]
    fn no_color_flag_wins_over_always() {
        let ctx = OutputContext::detect(ColorMode::Always, true);
        assert!(!ctx.color);
    }
}
