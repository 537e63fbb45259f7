//! A tag-driven reference validator used to cross-check the native engine.
//!
//! Records describe themselves as a flat list of [`Reflected`] fields: a
//! name, the value as JSON, and a comma-separated tag string such as
//! `required,min=4,lowercase`. [`Reference::validate`] dispatches on the tag
//! names at runtime. Presence, measures, conditional requirements,
//! uniqueness, phone and UUID formats, case and the character-class scans are
//! re-implemented here over JSON values. Only email, text and title reuse the
//! crate's checks. Anything it cannot interpret is reported in `unknown`.

use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use sieve_validator::chars::{ALPHA, DIGIT, LOWER_ALPHA, SPECIAL_CHARACTERS, UPPER_ALPHA, is_text};
use sieve_validator::check::{Builtin, CheckName};
use sieve_validator::pattern::pattern;
use sieve_validator::prelude::*;

/// One field as the reference validator sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflected {
    pub name: Cow<'static, str>,
    pub value: Value,
    pub tags: Cow<'static, str>,
}

impl Reflected {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        value: &(impl Serialize + ?Sized),
        tags: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            value: serde_json::to_value(value).expect("reflected value serializes"),
            tags: tags.into(),
        }
    }

    pub fn nested_under(mut self, prefix: &str) -> Self {
        self.name = Cow::Owned(format!("{prefix}.{}", self.name));
        self
    }
}

/// A record that can describe its fields and tags.
pub trait Reflect {
    fn reflect(&self) -> Vec<Reflected>;
}

pub struct Reference;

impl Reference {
    pub fn validate<R: Reflect + ?Sized>(record: &R) -> ValidationErrors {
        let fields = record.reflect();
        let mut errors = ValidationErrors::new();

        for field in &fields {
            let mut skip = false;
            for tag in field.tags.split(',').filter(|tag| !tag.is_empty()) {
                let (name, parameter) = match tag.split_once('=') {
                    Some((name, parameter)) => (name, Some(parameter)),
                    None => (tag, None),
                };
                if name == "omitempty" {
                    skip = skip || !is_present(&field.value);
                    continue;
                }
                if skip {
                    continue;
                }

                let check_name = match resolve(name) {
                    Ok(check_name) => check_name,
                    Err(fault) => {
                        errors.push_unknown(format!("{}: {fault}", field.name));
                        continue;
                    }
                };
                match evaluate(&check_name, parameter, &field.value, &fields) {
                    Ok(true) => {}
                    Ok(false) => errors.push(ValidationError::new(
                        check_name,
                        parameter.map(|p| Cow::Owned(p.to_owned())),
                        field.name.clone(),
                        Some(field.value.clone()),
                    )),
                    Err(fault) => errors.push_unknown(format!("{}: {tag}: {fault}", field.name)),
                }
            }
        }
        errors
    }
}

fn resolve(name: &str) -> Result<CheckName, String> {
    if let Ok(builtin) = Builtin::from_str(name) {
        return Ok(CheckName::Builtin(builtin));
    }
    pattern(name)
        .map(|p| Check::<str>::name(&p))
        .ok_or_else(|| format!("unknown tag `{name}`"))
}

fn evaluate(
    check_name: &CheckName,
    parameter: Option<&str>,
    value: &Value,
    fields: &[Reflected],
) -> Result<bool, String> {
    let builtin = match check_name {
        CheckName::Builtin(builtin) => *builtin,
        CheckName::Custom(name) => {
            let pattern = pattern(name).ok_or_else(|| format!("pattern `{name}` vanished"))?;
            return Ok(pattern.evaluate(as_str(value)?));
        }
    };

    Ok(match builtin {
        Builtin::Required => is_present(value),
        Builtin::RequiredWithAny
        | Builtin::RequiredWithAll
        | Builtin::RequiredWithoutAny
        | Builtin::RequiredWithoutAll => {
            let siblings = sibling_presence(parameter, fields)?;
            let triggered = match builtin {
                Builtin::RequiredWithAny => siblings.iter().any(|&p| p),
                Builtin::RequiredWithAll => siblings.iter().all(|&p| p),
                Builtin::RequiredWithoutAny => siblings.iter().any(|&p| !p),
                _ => siblings.iter().all(|&p| !p),
            };
            !triggered || is_present(value)
        }

        Builtin::Min
        | Builtin::Max
        | Builtin::Len
        | Builtin::Gt
        | Builtin::Gte
        | Builtin::Lt
        | Builtin::Lte => {
            let bound: f64 = parameter
                .ok_or("missing bound")?
                .parse()
                .map_err(|err| format!("malformed bound: {err}"))?;
            let actual = measure(value)?;
            match builtin {
                Builtin::Min | Builtin::Gte => actual >= bound,
                Builtin::Max | Builtin::Lte => actual <= bound,
                Builtin::Len => actual == bound,
                Builtin::Gt => actual > bound,
                _ => actual < bound,
            }
        }

        Builtin::Unique => {
            let items = value.as_array().ok_or("unique needs an array")?;
            items
                .iter()
                .enumerate()
                .all(|(i, item)| !items[i + 1..].contains(item))
        }

        Builtin::Email => Email.evaluate(as_str(value)?),
        Builtin::E164 => E164_REGEX.is_match(as_str(value)?),
        Builtin::Uuid => UUID_REGEX.is_match(as_str(value)?),
        Builtin::Lowercase => {
            let s = as_str(value)?;
            !s.is_empty() && s.to_lowercase() == s
        }
        Builtin::Uppercase => {
            let s = as_str(value)?;
            !s.is_empty() && s.to_uppercase() == s
        }
        Builtin::Text => is_text(as_str(value)?),
        Builtin::Title => Title.evaluate(as_str(value)?),

        other => scan(other.as_str(), as_str(value)?)
            .ok_or_else(|| format!("no rule for `{other}`"))?,
    })
}

static E164_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{6,14}$").expect("e164 pattern compiles"));

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern compiles")
});

/// Evaluates a `<scan>_<class>` tag such as `starts_with_upper_alpha`.
fn scan(tag: &str, s: &str) -> Option<bool> {
    let (scan, class) = ["contains_", "excludes_", "starts_with_", "ends_with_"]
        .into_iter()
        .find_map(|scan| tag.strip_prefix(scan).map(|class| (scan, class)))?;
    let member: fn(char) -> bool = match class {
        "alpha" => |c: char| ALPHA.contains(c),
        "lower_alpha" => |c: char| LOWER_ALPHA.contains(c),
        "upper_alpha" => |c: char| UPPER_ALPHA.contains(c),
        "digit" => |c: char| DIGIT.contains(c),
        "special_character" => |c: char| SPECIAL_CHARACTERS.contains(c),
        "whitespace" => char::is_whitespace,
        _ => return None,
    };
    Some(match scan {
        "contains_" => s.chars().any(member),
        "excludes_" => !s.chars().any(member),
        "starts_with_" => s.chars().next().is_some_and(member),
        _ => s.chars().next_back().is_some_and(member),
    })
}

fn sibling_presence(parameter: Option<&str>, fields: &[Reflected]) -> Result<Vec<bool>, String> {
    parameter
        .unwrap_or_default()
        .split_whitespace()
        .map(|name| {
            fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| is_present(&field.value))
                .ok_or_else(|| format!("missing sibling `{name}`"))
        })
        .collect()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn measure(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| format!("unmeasurable number {n}")),
        Value::String(s) => Ok(s.chars().count() as f64),
        Value::Array(items) => Ok(items.len() as f64),
        Value::Object(entries) => Ok(entries.len() as f64),
        other => Err(format!("cannot measure {other}")),
    }
}

fn as_str(value: &Value) -> Result<&str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("expected a string, got {value}"))
}
