//! `{{path}}` placeholder scanner.
//!
//! A template is scanned once, left to right, into literal text and
//! placeholder tokens. A placeholder is `{{` followed by a path and `}}`,
//! where a path is one or more identifiers joined by `.` (`student.name`,
//! `currentYear`). Identifiers may use any Unicode letter, so a misspelt
//! `{{aluno.matrícula}}` is still a token and gets reported. No whitespace is allowed inside the braces. Anything that
//! does not match that grammar, including an unterminated `{{`, is literal
//! text.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder {
        /// The full token as written, braces included
        token: &'a str,
        path: &'a str,
    },
}

/// Iterator over the [`Segment`]s of a template.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

pub fn segments(template: &str) -> Segments<'_> {
    Segments { rest: template }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_path(path: &str) -> bool {
    !path.is_empty() && path.split('.').all(is_identifier)
}

/// Length of the placeholder token at the start of `input`, if there is one.
fn placeholder_len(input: &str) -> Option<usize> {
    let body = input.strip_prefix("{{")?;
    let path_len = body
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
        .unwrap_or(body.len());

    let path = &body[..path_len];
    if is_path(path) && body[path_len..].starts_with("}}") {
        Some(2 + path_len + 2)
    } else {
        None
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find("{{") {
            Some(0) => {
                let (segment, rest) = match placeholder_len(self.rest) {
                    Some(len) => {
                        let token = &self.rest[..len];
                        (
                            Segment::Placeholder {
                                token,
                                path: &token[2..len - 2],
                            },
                            &self.rest[len..],
                        )
                    }
                    // Not a token: keep one brace and rescan from the next one.
                    None => (Segment::Text(&self.rest[..1]), &self.rest[1..]),
                };
                self.rest = rest;
                Some(segment)
            }
            Some(start) => {
                let text = &self.rest[..start];
                self.rest = &self.rest[start..];
                Some(Segment::Text(text))
            }
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Segment::Text(text))
            }
        }
    }
}

/// Output of [`substitute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    /// Tokens left verbatim, in order of first appearance, without duplicates
    pub unresolved: Vec<String>,
}

/// Replaces every placeholder for which `lookup` returns a value. Unknown
/// placeholders stay in the output as written and are reported.
pub fn substitute<'v, F>(template: &str, lookup: F) -> Substitution
where
    F: Fn(&str) -> Option<Cow<'v, str>>,
{
    let mut content = String::with_capacity(template.len());
    let mut unresolved: Vec<String> = Vec::new();

    for segment in segments(template) {
        match segment {
            Segment::Text(text) => content.push_str(text),
            Segment::Placeholder { token, path } => match lookup(path) {
                Some(value) => content.push_str(&value),
                None => {
                    content.push_str(token);
                    if !unresolved.iter().any(|t| t == token) {
                        unresolved.push(token.to_string());
                    }
                }
            },
        }
    }

    Substitution {
        content,
        unresolved,
    }
}

/// Distinct placeholder paths used by `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut paths: Vec<&str> = Vec::new();
    for segment in segments(template) {
        if let Segment::Placeholder { path, .. } = segment {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}
