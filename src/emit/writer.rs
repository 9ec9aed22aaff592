use std::collections::HashSet;

use crate::foundation::error::{Scene2cError, Scene2cResult};

/// Append-only C source builder.
///
/// Tracks which symbols have been defined so far and refuses to take the address of anything
/// that has not been, which keeps the output free of forward references.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buf: String,
    defined: HashSet<String>,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` followed by a newline.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Record that `symbol` is now defined.
    pub fn define(&mut self, symbol: &str) -> Scene2cResult<()> {
        if !self.defined.insert(symbol.to_string()) {
            return Err(Scene2cError::validation(format!(
                "symbol '{symbol}' defined twice"
            )));
        }
        Ok(())
    }

    pub fn is_defined(&self, symbol: &str) -> bool {
        self.defined.contains(symbol)
    }

    /// Reference an already defined `symbol` by name (array decay).
    pub fn name_of(&self, symbol: &str) -> Scene2cResult<String> {
        self.require(symbol)?;
        Ok(symbol.to_string())
    }

    /// Take the address of an already defined `symbol`, optionally of one of its members.
    pub fn address_of(&self, symbol: &str, member: Option<&str>) -> Scene2cResult<String> {
        self.require(symbol)?;
        Ok(match member {
            Some(m) => format!("&{symbol}.{m}"),
            None => format!("&{symbol}"),
        })
    }

    /// Emit `<decl> = { .field = value, ... };` with the `=` signs aligned.
    pub fn designated_struct(&mut self, decl: &str, fields: &[(&str, String)]) -> &mut Self {
        let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        self.line(format!("{decl} = {{"));
        for (name, value) in fields {
            self.line(format!("\t.{name:<width$} = {value},"));
        }
        self.line("};")
    }

    /// Emit `<decl> = { item, ... };`, one item per line.
    pub fn array(&mut self, decl: &str, items: &[String]) -> &mut Self {
        self.line(format!("{decl} = {{"));
        for item in items {
            self.line(format!("\t{item},"));
        }
        self.line("};")
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn require(&self, symbol: &str) -> Scene2cResult<()> {
        if self.defined.contains(symbol) {
            Ok(())
        } else {
            Err(Scene2cError::validation(format!(
                "symbol '{symbol}' referenced before its definition"
            )))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/writer.rs"]
mod tests;
