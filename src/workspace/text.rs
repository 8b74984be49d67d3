//! Text codec for both dialects
//!
//! Records are written as
//!
//! ```text
//! Site:WaterMainsTemperature,
//!   Correlation,              !- Calculation Method
//!   ,                         !- Temperature Schedule Name
//!   9.69,                     !- Annual Average Outdoor Air Temperature
//!   28.1;                     !- Maximum Difference In Monthly Average Outdoor Air Temperatures
//! ```
//!
//! Values containing `,` `;` `!` or `\` are backslash-escaped. References
//! are written as handles in the internal dialect and as names in the
//! external one; the reader resolves them only after every record exists,
//! so physical record order does not matter.

use super::{format_handle, parse_handle, FieldValue, Workspace};
use crate::idd::{Dialect, IddFieldKind, IddFile, IddObject, IddObjectType};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

const COMMENT_COLUMN: usize = 28;

/// Error reading workspace text
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: unknown object type '{name}'")]
    UnknownObjectType { line: usize, name: String },
    #[error("line {line}: invalid number '{value}' in field '{field}'")]
    InvalidNumber {
        line: usize,
        field: String,
        value: String,
    },
    #[error("line {line}: invalid or duplicate handle '{value}'")]
    InvalidHandle { line: usize, value: String },
    #[error("line {line}: too many fields for {object_type}")]
    TooManyFields {
        line: usize,
        object_type: IddObjectType,
    },
    #[error("line {line}: {object_type} may only appear once")]
    DuplicateUniqueObject {
        line: usize,
        object_type: IddObjectType,
    },
    #[error("line {line}: record is not terminated by ';'")]
    UnterminatedRecord { line: usize },
}

/// Escape the characters that carry meaning in the text format
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ',' | ';' | '!' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape`]
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Render every record of a workspace in insertion order
pub fn write_workspace(workspace: &Workspace) -> String {
    let mut out = String::new();
    for object in workspace.objects() {
        let Some(idd) = workspace.idd().object(object.object_type()) else {
            continue;
        };
        let handle = object.handle();
        let count = object.num_fields();
        if count == 0 {
            let _ = writeln!(out, "{};\n", idd.type_name());
            continue;
        }
        let _ = writeln!(out, "{},", idd.type_name());
        for (index, value) in object.values().enumerate() {
            let text = match (idd.field(index).map(|f| &f.kind), value) {
                (Some(IddFieldKind::Handle), _) => format_handle(&handle),
                (_, FieldValue::Pointer(target)) => match workspace.dialect() {
                    Dialect::OpenStudio => format_handle(target),
                    Dialect::EnergyPlus => workspace.name(*target).unwrap_or_default(),
                },
                (_, other) => other.as_text().unwrap_or_default(),
            };
            let terminator = if index + 1 == count { ';' } else { ',' };
            let entry = format!("  {}{}", escape(&text), terminator);
            let _ = writeln!(
                out,
                "{:<width$}!- {}",
                entry,
                field_label(idd, index),
                width = COMMENT_COLUMN.max(entry.len() + 1)
            );
        }
        out.push('\n');
    }
    out
}

fn field_label(idd: &IddObject, index: usize) -> String {
    let fixed = idd.num_fixed_fields();
    match idd.field(index) {
        Some(field) if index >= fixed => {
            let group = (index - fixed) / idd.extensible_group_len().max(1);
            format!("{} {}", field.name, group + 1)
        }
        Some(field) => field.name.to_string(),
        None => String::new(),
    }
}

#[derive(Debug)]
struct RawRecord {
    line: usize,
    tokens: Vec<String>,
}

/// Split text into records of unescaped field tokens, dropping comments
fn tokenize(text: &str) -> Result<Vec<RawRecord>, ParseError> {
    let mut records = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut record_line = 0;
    let mut in_record = false;

    for (line_index, line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    current.push('\\');
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
                '!' => break,
                ',' | ';' => {
                    if !in_record {
                        record_line = line_number;
                    }
                    tokens.push(unescape(current.trim()));
                    current.clear();
                    in_record = true;
                    if c == ';' {
                        records.push(RawRecord {
                            line: record_line,
                            tokens: std::mem::take(&mut tokens),
                        });
                        in_record = false;
                    }
                }
                _ => {
                    if !in_record && current.trim().is_empty() && !c.is_whitespace() {
                        record_line = line_number;
                    }
                    current.push(c);
                }
            }
        }
        // a value never spans lines
        if !current.trim().is_empty() {
            in_record = true;
        }
        current.push(' ');
    }
    if in_record || !current.trim().is_empty() {
        return Err(ParseError::UnterminatedRecord { line: record_line });
    }
    Ok(records)
}

/// Parse text into a workspace of the given dialect
///
/// Object-list fields naming a record that does not exist keep the name as
/// plain text so that nothing in the source is lost.
pub fn read_workspace(text: &str, idd: Arc<IddFile>) -> Result<Workspace, ParseError> {
    let mut workspace = Workspace::new(Arc::clone(&idd));
    for record in tokenize(text)? {
        let Some((type_name, values)) = record.tokens.split_first() else {
            continue;
        };
        let object_type = IddObjectType::from_name(type_name)
            .filter(|t| idd.object(*t).is_some())
            .ok_or_else(|| ParseError::UnknownObjectType {
                line: record.line,
                name: type_name.clone(),
            })?;
        let Some(schema) = idd.object(object_type) else {
            continue;
        };

        let handle = if schema.has_handle_field() {
            let text = values.first().map(String::as_str).unwrap_or_default();
            if text.is_empty() {
                Uuid::new_v4()
            } else {
                parse_handle(text).ok_or_else(|| ParseError::InvalidHandle {
                    line: record.line,
                    value: text.to_string(),
                })?
            }
        } else {
            Uuid::new_v4()
        };
        if workspace.add_object_with_handle(object_type, handle).is_none() {
            return Err(if schema.is_unique() {
                ParseError::DuplicateUniqueObject {
                    line: record.line,
                    object_type,
                }
            } else {
                ParseError::InvalidHandle {
                    line: record.line,
                    value: format_handle(&handle),
                }
            });
        }
        // default names from add_object are replaced by the file's values
        if let Some(index) = schema.name_index() {
            workspace.set_value(handle, index, FieldValue::Blank);
        }

        for (index, text) in values.iter().enumerate() {
            let Some(field) = schema.field(index) else {
                return Err(ParseError::TooManyFields {
                    line: record.line,
                    object_type,
                });
            };
            if text.is_empty() || field.kind == IddFieldKind::Handle {
                // still grow extensible groups so blank trailing entries survive
                workspace.set_value(handle, index, FieldValue::Blank);
                continue;
            }
            let value = match &field.kind {
                IddFieldKind::Real | IddFieldKind::Integer if field.accepts_sentinel(text) => {
                    FieldValue::String(text.to_ascii_lowercase())
                }
                IddFieldKind::Real => text.parse().map(FieldValue::Double).map_err(|_| {
                    ParseError::InvalidNumber {
                        line: record.line,
                        field: field.name.to_string(),
                        value: text.clone(),
                    }
                })?,
                IddFieldKind::Integer => match text.parse::<i64>() {
                    Ok(v) => FieldValue::Integer(v),
                    Err(_) => match text.parse::<f64>() {
                        Ok(v) if v.fract() == 0.0 => FieldValue::Integer(v as i64),
                        _ => {
                            return Err(ParseError::InvalidNumber {
                                line: record.line,
                                field: field.name.to_string(),
                                value: text.clone(),
                            });
                        }
                    },
                },
                IddFieldKind::Choice(keys) => FieldValue::String(
                    keys.iter()
                        .find(|k| k.eq_ignore_ascii_case(text))
                        .map(|k| (*k).to_string())
                        .unwrap_or_else(|| text.clone()),
                ),
                _ => FieldValue::String(text.clone()),
            };
            workspace.set_value(handle, index, value);
        }
    }

    for (handle, index, name) in workspace.resolve_references() {
        warn!(%handle, index, name = %name, "unresolved reference kept as text");
    }
    Ok(workspace)
}
