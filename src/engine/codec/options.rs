//! Declared codec options and the private option storage behind a context.
//!
//! Options are declared the way ffmpeg's AVOption tables declare them: an
//! integer option names a `unit`, and the named constants that follow carry
//! the same unit. Enumerating an option means walking those constants in
//! declaration order.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionKind {
    Int { default: i64, min: i64, max: i64 },
    /// Named constant belonging to the option with the same unit
    Const(i64),
    Bool { default: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecOption {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: OptionKind,
    pub unit: Option<&'static str>,
}

impl CodecOption {
    pub const fn int(
        name: &'static str,
        help: &'static str,
        default: i64,
        min: i64,
        max: i64,
        unit: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            help,
            kind: OptionKind::Int { default, min, max },
            unit,
        }
    }

    pub const fn constant(
        name: &'static str,
        help: &'static str,
        value: i64,
        unit: &'static str,
    ) -> Self {
        Self {
            name,
            help,
            kind: OptionKind::Const(value),
            unit: Some(unit),
        }
    }

    pub const fn boolean(name: &'static str, help: &'static str, default: bool) -> Self {
        Self {
            name,
            help,
            kind: OptionKind::Bool { default },
            unit: None,
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self.kind, OptionKind::Const(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("Option '{0}' not found")]
    NotFound(String),

    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidValue { option: String, value: String },

    #[error("Value {value} for option '{option}' out of range [{min} - {max}]")]
    OutOfRange {
        option: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Look up a settable (non-constant) option by name
pub fn find_option<'a>(class: &'a [CodecOption], name: &str) -> Option<&'a CodecOption> {
    class.iter().find(|opt| !opt.is_const() && opt.name == name)
}

/// Walk the named constants of `option` in declaration order.
///
/// Nothing is visited when the option does not exist or has no unit.
pub fn for_each_const<F>(class: &[CodecOption], option: &str, mut f: F)
where
    F: FnMut(&CodecOption),
{
    let Some(unit) = find_option(class, option).and_then(|opt| opt.unit) else {
        return;
    };

    for opt in class
        .iter()
        .filter(|opt| opt.is_const() && opt.unit == Some(unit))
    {
        f(opt);
    }
}

fn const_value(class: &[CodecOption], unit: &str, name: &str) -> Option<i64> {
    class.iter().find_map(|opt| match opt.kind {
        OptionKind::Const(v) if opt.unit == Some(unit) && opt.name == name => Some(v),
        _ => None,
    })
}

fn const_name(class: &[CodecOption], unit: &str, value: i64) -> Option<&'static str> {
    class.iter().find_map(|opt| match opt.kind {
        OptionKind::Const(v) if opt.unit == Some(unit) && v == value => Some(opt.name),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Stored {
    Int(i64),
    Bool(bool),
}

/// Codec-private option values for one context.
///
/// Only explicitly set options are stored; reads fall back to the declared
/// default.
#[derive(Debug, Clone)]
pub struct PrivData {
    class: &'static [CodecOption],
    values: BTreeMap<&'static str, Stored>,
}

impl PrivData {
    pub fn new(class: &'static [CodecOption]) -> Self {
        Self {
            class,
            values: BTreeMap::new(),
        }
    }

    pub fn class(&self) -> &'static [CodecOption] {
        self.class
    }

    pub fn has_option(&self, name: &str) -> bool {
        find_option(self.class, name).is_some()
    }

    /// Set an option from its text form. Integer options with a unit accept
    /// either a constant name or a number.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let opt = find_option(self.class, name)
            .ok_or_else(|| OptionError::NotFound(name.to_string()))?;

        let invalid = || OptionError::InvalidValue {
            option: name.to_string(),
            value: value.to_string(),
        };

        let stored = match opt.kind {
            OptionKind::Int { min, max, .. } => {
                let parsed = opt
                    .unit
                    .and_then(|unit| const_value(self.class, unit, value))
                    .or_else(|| value.trim().parse::<i64>().ok())
                    .ok_or_else(invalid)?;
                if parsed < min || parsed > max {
                    return Err(OptionError::OutOfRange {
                        option: name.to_string(),
                        value: parsed,
                        min,
                        max,
                    });
                }
                Stored::Int(parsed)
            }
            OptionKind::Bool { .. } => match value.trim() {
                "1" | "true" | "on" => Stored::Bool(true),
                "0" | "false" | "off" => Stored::Bool(false),
                _ => return Err(invalid()),
            },
            OptionKind::Const(_) => return Err(invalid()),
        };

        self.values.insert(opt.name, stored);
        Ok(())
    }

    /// Current value as text; integer options with a unit read back as the
    /// matching constant name when there is one.
    pub fn get_string(&self, name: &str) -> Result<String, OptionError> {
        let opt = find_option(self.class, name)
            .ok_or_else(|| OptionError::NotFound(name.to_string()))?;

        let text = match (opt.kind, self.values.get(opt.name)) {
            (OptionKind::Int { default, .. }, stored) => {
                let value = match stored {
                    Some(Stored::Int(v)) => *v,
                    _ => default,
                };
                opt.unit
                    .and_then(|unit| const_name(self.class, unit, value))
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string())
            }
            (OptionKind::Bool { default }, stored) => {
                let value = match stored {
                    Some(Stored::Bool(b)) => *b,
                    _ => default,
                };
                let flag = if value { "1" } else { "0" };
                flag.to_string()
            }
            (OptionKind::Const(_), _) => return Err(OptionError::NotFound(name.to_string())),
        };

        Ok(text)
    }

    /// Explicitly set options in declaration order
    pub fn explicit(&self) -> impl Iterator<Item = &'static CodecOption> + '_ {
        self.class
            .iter()
            .filter(|opt| !opt.is_const() && self.values.contains_key(opt.name))
    }
}
