//! Builder-pattern printer for rendering diagnostics.

use std::fmt::{self, Write};

use gramflow_core::Colors;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colors: Colors,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_str("\n\n")?;
            }
            self.format_one(w, diag)?;
        }
        Ok(())
    }

    fn format_one(&self, w: &mut impl Write, diag: &DiagnosticMessage) -> fmt::Result {
        let c = &self.colors;
        let severity_color = match diag.severity() {
            Severity::Error => c.red,
            Severity::Warning => c.yellow,
        };

        write!(w, "{}{}{}: {}", severity_color, diag.severity(), c.reset, diag.message)?;

        if let Some(node) = &diag.node {
            write!(
                w,
                "\n  {}-->{} {}{}{} {}(node `{}`){}",
                c.dim, c.reset, c.blue, node.display_name, c.reset, c.dim, node.id, c.reset
            )?;
        }

        for hint in &diag.hints {
            write!(w, "\n  {}={} hint: {}", c.dim, c.reset, hint)?;
        }

        Ok(())
    }
}

impl fmt::Display for DiagnosticsPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format(f)
    }
}
