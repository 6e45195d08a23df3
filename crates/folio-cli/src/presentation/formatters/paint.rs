use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Console styling that degrades to plain text when stdout is not a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    enabled: bool,
}

impl Paint {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn detect() -> Self {
        Self::new(std::io::stdout().is_terminal())
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn strong(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn tag(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn link(&self, text: &str) -> String {
        if self.enabled {
            text.blue().underline().to_string()
        } else {
            text.to_string()
        }
    }
}
