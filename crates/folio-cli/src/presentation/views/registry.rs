use std::fmt;

use crate::presentation::formatters::Paint;
use crate::presentation::view_models::RegistryViewModel;

/// Table of registry entries for `folio list` and `folio search`
pub struct RegistryView<'a> {
    data: &'a RegistryViewModel,
    paint: Paint,
}

impl<'a> RegistryView<'a> {
    pub fn new(data: &'a RegistryViewModel, paint: Paint) -> Self {
        Self { data, paint }
    }
}

impl fmt::Display for RegistryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(query) = &self.data.query {
            writeln!(
                f,
                "{}",
                self.paint
                    .dim(&format!("{} match(es) for \"{}\"", self.data.entries.len(), query))
            )?;
        }

        if self.data.entries.is_empty() {
            writeln!(f, "No matches.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{}",
            self.paint
                .dim(&format!("{:<14} {:<10} LABEL", "ID", "KIND"))
        )?;
        for entry in &self.data.entries {
            let id = format!("{:<14}", entry.id);
            let marker = if entry.home { " (home)" } else { "" };
            writeln!(
                f,
                "{} {:<10} {}{}",
                self.paint.accent(&id),
                entry.kind,
                entry.label,
                self.paint.dim(marker)
            )?;
        }
        Ok(())
    }
}
