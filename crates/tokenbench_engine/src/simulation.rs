use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use thiserror::Error;

pub const TRADITIONAL_PARADIGM: &str = "Traditional MCP";
pub const CODE_EXECUTION_PARADIGM: &str = "Code Execution";

/// Tunable parameters of the paradigm simulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    /// Each traditional call re-pays `tool_context / divisor` context tokens.
    /// `0` disables the reload charge.
    pub context_reload_divisor: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            context_reload_divisor: 2,
        }
    }
}

impl SimulationSettings {
    pub(crate) fn context_reload(&self, tool_context_tokens: u64) -> u64 {
        tool_context_tokens
            .checked_div(self.context_reload_divisor)
            .unwrap_or(0)
    }
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("failed to serialize {what} payload: {source}")]
    Serialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Pretty JSON with two-space indentation and every non-ASCII character
/// written as a `\uXXXX` escape, the form every payload is measured in.
pub(crate) fn pretty_json<T: Serialize + ?Sized>(
    what: &str,
    value: &T,
) -> Result<String, SimulationError> {
    to_ascii_pretty(value).map_err(|source| SimulationError::Serialize {
        what: what.to_string(),
        source,
    })
}

pub(crate) fn to_ascii_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::default());
    value.serialize(&mut ser)?;
    // Only ASCII bytes are ever written.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `PrettyFormatter` that escapes chars above 0x7F, using UTF-16 surrogate
/// pairs outside the BMP.
#[derive(Default)]
struct AsciiPrettyFormatter {
    pretty: PrettyFormatter<'static>,
}

impl Formatter for AsciiPrettyFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}
