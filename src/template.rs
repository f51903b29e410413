//! # Template Rendering
//!
//! Templates are plain text (usually Markdown) with `${...}` placeholders.
//!
//! ## Syntax
//!
//! - `${name}`: replaced by the value of `name`, or nothing if it is unset.
//! - `${name:-fallback}`: replaced by the value of `name`, or `fallback` if it
//!   is unset or empty.
//! - `$${name}`: a literal `${name}`.
//!
//! A placeholder naming a variable the context does not know about is an
//! error, so typos in templates are caught instead of silently rendering
//! nothing.
//!
//! ## Variables
//!
//! [`TemplateContext::from_project`] exposes `projectName`,
//! `projectDescription`, `projectVersion`, `authorName`, `authorEmail`,
//! `authorUrl`, `repositoryUrl`, `contributingUrl`, `issuesUrl`,
//! `githubUsername`, `githubProfileUrl` and `engines`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::defaults::GITHUB_URL;
use crate::error::{Error, Result};
use crate::project::ProjectInfo;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$?\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("placeholder pattern is valid")
    })
}

/// Variables available to a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    vars: BTreeMap<String, Option<String>>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard README variables from project information.
    pub fn from_project(info: &ProjectInfo) -> Self {
        let author = info.author.as_ref().map(Author::from_value).unwrap_or_default();

        let mut context = Self::new();
        context.set("projectName", info.name.clone());
        context.set("projectDescription", info.description.clone());
        context.set("projectVersion", info.version.clone());
        context.set("authorName", author.name);
        context.set("authorEmail", author.email);
        context.set("authorUrl", author.url);
        context.set("repositoryUrl", info.repository_url.clone());
        context.set("contributingUrl", info.contributing_url.clone());
        context.set("issuesUrl", info.contributing_url.clone());
        context.set("githubUsername", info.github_username.clone());
        context.set(
            "githubProfileUrl",
            info.github_username.as_deref().map(github_profile_url),
        );
        context.set("engines", info.engines.as_ref().and_then(format_engines));
        context
    }

    /// Define (or redefine) a variable. `None` declares it as unset.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.vars.insert(name.into(), value);
    }

    /// Value of a variable, `None` if unset or unknown.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(|value| value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}

/// Render `template`, substituting placeholders from `context`.
pub fn render(template: &str, context: &TemplateContext) -> Result<String> {
    let mut unknown = None;

    let rendered = placeholder_regex().replace_all(template, |caps: &Captures| {
        let whole = &caps[0];
        if let Some(escaped) = whole.strip_prefix("$$") {
            return format!("${}", escaped);
        }

        let name = &caps[1];
        if !context.contains(name) {
            unknown.get_or_insert_with(|| name.to_string());
            return String::new();
        }

        match (context.get(name), caps.get(2)) {
            (Some(value), Some(fallback)) if value.is_empty() => fallback.as_str().to_string(),
            (Some(value), _) => value.to_string(),
            (None, Some(fallback)) => fallback.as_str().to_string(),
            (None, None) => String::new(),
        }
    });

    if let Some(variable) = unknown {
        return Err(Error::Template {
            message: "Unknown template variable".to_string(),
            variable: Some(variable),
        });
    }

    Ok(rendered.into_owned())
}

/// Profile page of a GitHub user.
pub fn github_profile_url(username: &str) -> String {
    format!("{}{}", GITHUB_URL, username)
}

/// Author details, from either the `"Name <email> (url)"` string form or
/// the `{ "name", "email", "url" }` object form.
#[derive(Debug, Default, PartialEq)]
struct Author {
    name: Option<String>,
    email: Option<String>,
    url: Option<String>,
}

impl Author {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Object(map) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                };
                Self {
                    name: field("name"),
                    email: field("email"),
                    url: field("url"),
                }
            }
            _ => Self::default(),
        }
    }

    fn parse(s: &str) -> Self {
        let between = |open: char, close: char| {
            let start = s.find(open)? + 1;
            let end = s[start..].find(close)? + start;
            Some(s[start..end].trim().to_string()).filter(|part| !part.is_empty())
        };

        let name_end = s.find(['<', '(']).unwrap_or(s.len());
        let name = s[..name_end].trim();

        Self {
            name: (!name.is_empty()).then(|| name.to_string()),
            email: between('<', '>'),
            url: between('(', ')'),
        }
    }
}

/// Format an `engines` object as `node: >=18, npm: >=9`.
fn format_engines(engines: &Value) -> Option<String> {
    let map = engines.as_object()?;
    let parts: Vec<String> = map
        .iter()
        .map(|(engine, version)| {
            let version = version.as_str().map_or_else(|| version.to_string(), str::to_string);
            format!("{}: {}", engine, version)
        })
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}
