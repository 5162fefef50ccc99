use std::borrow::Cow;

use crate::OrderedMap;
use crate::Result;
use crate::Status;

const SEGMENT: &str = "[^/]+";
const SEGMENTS: &str = "[^/]+(?:/[^/]+)*";

/// Ordered `pattern -> target` rules mapping source paths to public paths.
///
/// ```yaml
/// rewrites:
///   en/:rest*: :rest*
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Rewrites(OrderedMap<String>);

impl Rewrites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, pattern: impl Into<String>, target: impl Into<String>) -> Self {
        self.0.push(pattern, target.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(p, t)| (p, t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build every rule once, for rewriting many paths.
    pub fn compile(&self) -> Result<RewriteSet> {
        let rules = self
            .iter()
            .map(|(pattern, target)| RewriteRule::new(pattern, target))
            .collect::<Result<Vec<_>>>()?;
        Ok(RewriteSet { rules })
    }

    /// Rewrite `path` with the first rule that matches it in full.
    ///
    /// See [`RewriteSet::apply`].
    pub fn apply<'p>(&self, path: &'p str) -> Result<Cow<'p, str>> {
        Ok(self.compile()?.apply(path))
    }
}

/// Compiled [`Rewrites`], tried in order.
#[derive(Debug, Clone)]
pub struct RewriteSet {
    rules: Vec<RewriteRule>,
}

impl RewriteSet {
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Rewrite `path` with the first rule that matches it in full.
    ///
    /// A leading or trailing `/` is ignored for matching and kept on the result. A trailing `/`
    /// is not kept when the rule rewrites the path to nothing, so `/en/` becomes `/` and `en/`
    /// becomes the empty path. Paths no rule matches come back unchanged.
    pub fn apply<'p>(&self, path: &'p str) -> Cow<'p, str> {
        let (lead, relative) = match path.strip_prefix('/') {
            Some(relative) => ("/", relative),
            None => ("", path),
        };
        let (relative, trail) = match relative.strip_suffix('/') {
            Some(relative) => (relative, "/"),
            None => (relative, ""),
        };
        for rule in &self.rules {
            if let Some(rewritten) = rule.apply(relative) {
                log::trace!("rewrote {path:?} to {rewritten:?} via {:?}", rule.pattern());
                let trail = if rewritten.is_empty() { "" } else { trail };
                return Cow::Owned(format!("{lead}{rewritten}{trail}"));
            }
        }
        Cow::Borrowed(path)
    }
}

/// A single compiled rewrite rule.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: String,
    tokens: Vec<Token>,
    regex: regex::Regex,
    target: Vec<Token>,
}

impl RewriteRule {
    pub fn new(pattern: &str, target: &str) -> Result<Self> {
        check_path_shape(pattern)
            .map_err(|s| s.context_with(|c| c.insert("Pattern", pattern.to_owned())))?;
        let tokens = tokenize(pattern)
            .map_err(|s| s.context_with(|c| c.insert("Pattern", pattern.to_owned())))?;

        let names: Vec<&str> = tokens.iter().filter_map(Token::param_name).collect();
        if let Some(duplicate) = itertools::Itertools::duplicates(names.iter()).next() {
            return Err(Status::new("Rewrite parameter is repeated").context_with(|c| {
                c.insert("Pattern", pattern.to_owned())
                    .insert("Parameter", (*duplicate).to_owned())
            }));
        }

        check_path_shape(target)
            .map_err(|s| s.context_with(|c| c.insert("Target", target.to_owned())))?;
        let target_tokens = tokenize(target)
            .map_err(|s| s.context_with(|c| c.insert("Target", target.to_owned())))?;
        if let Some(unknown) = target_tokens
            .iter()
            .filter_map(Token::param_name)
            .find(|name| !names.contains(name))
        {
            return Err(
                Status::new("Rewrite target uses an unknown parameter").context_with(|c| {
                    c.insert("Pattern", pattern.to_owned())
                        .insert("Target", target.to_owned())
                        .insert("Parameter", unknown.to_owned())
                }),
            );
        }

        let regex = regex::Regex::new(&to_regex(&tokens)).map_err(|e| {
            Status::new("Invalid rewrite pattern")
                .with_source(e)
                .context_with(|c| c.insert("Pattern", pattern.to_owned()))
        })?;

        Ok(Self {
            pattern: pattern.to_owned(),
            tokens,
            regex,
            target: target_tokens,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Names of the parameters the pattern captures, in order.
    pub fn params(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().filter_map(Token::param_name)
    }

    /// Rewritten form of `path`, or `None` when the pattern does not match all of it.
    pub fn apply(&self, path: &str) -> Option<String> {
        let captures = self.regex.captures(path)?;
        let mut rewritten = String::new();
        for token in &self.target {
            match token {
                Token::Literal(literal) => rewritten.push_str(literal),
                Token::Param { name, prefixed, .. } => {
                    if let Some(value) = captures.name(name) {
                        if *prefixed {
                            rewritten.push('/');
                        }
                        rewritten.push_str(value.as_str());
                    }
                }
            }
        }
        Some(rewritten)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Modifier {
    One,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param {
        name: String,
        modifier: Modifier,
        // Whether the `/` before the parameter belongs to it.
        prefixed: bool,
    },
}

impl Token {
    fn param_name(&self) -> Option<&str> {
        match self {
            Token::Param { name, .. } => Some(name.as_str()),
            Token::Literal(_) => None,
        }
    }
}

fn check_path_shape(path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "Rewrite path is empty"
    } else if path.starts_with('/') {
        "Rewrite path must be relative"
    } else if path.contains('\\') {
        "Rewrite path must use `/` separators"
    } else if crate::path::segments(path).any(str::is_empty) {
        "Rewrite path has an empty segment"
    } else {
        return Ok(());
    };
    Err(Status::new(reason))
}

fn tokenize(path: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = path.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ':' {
            literal.push(c);
            continue;
        }

        let mut name = String::new();
        while let Some(&n) = chars.peek() {
            if n.is_ascii_alphanumeric() || n == '_' {
                name.push(n);
                chars.next();
            } else {
                break;
            }
        }
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(Status::new("Rewrite parameter has no valid name"));
        }

        let modifier = match chars.peek() {
            Some('?') => Modifier::Optional,
            Some('*') => Modifier::ZeroOrMore,
            Some('+') => Modifier::OneOrMore,
            _ => Modifier::One,
        };
        if modifier != Modifier::One {
            chars.next();
        }

        let prefixed = modifier != Modifier::One && literal.ends_with('/');
        if prefixed {
            literal.pop();
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(Token::Param {
            name,
            modifier,
            prefixed,
        });
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn to_regex(tokens: &[Token]) -> String {
    let mut re = String::from("^");
    for token in tokens {
        match token {
            Token::Literal(literal) => re.push_str(&regex::escape(literal)),
            Token::Param {
                name,
                modifier,
                prefixed,
            } => {
                let (body, optional) = match modifier {
                    Modifier::One => (SEGMENT, false),
                    Modifier::Optional => (SEGMENT, true),
                    Modifier::ZeroOrMore => (SEGMENTS, true),
                    Modifier::OneOrMore => (SEGMENTS, false),
                };
                let prefix = if *prefixed { "/" } else { "" };
                let optional = if optional { "?" } else { "" };
                re.push_str(&format!("(?:{prefix}(?P<{name}>{body})){optional}"));
            }
        }
    }
    re.push('$');
    re
}
