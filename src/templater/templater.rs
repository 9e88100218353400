// src/templater/templater.rs

//! The placeholder substitution engine.
//!
//! A placeholder region is a substring bounded by the configured open tag
//! and the nearest following close tag (`open_tag + "(.*?)" + close_tag`,
//! non-greedy, applied globally). Inside each region [`replace_once`]
//! performs an ordered, single-pass, mutually-exclusive multi-pattern
//! replacement of token codes: a span consumed by one code is never
//! reconsidered, and an emitted value is never re-scanned for other codes.
//! Text outside regions, and non-code text inside regions (the `:` in
//! `{h:mm A}`), passes through verbatim.
//!
//! Tag fragments are regular-expression fragments; they are validated when
//! set, so `render` and `strip` cannot fail on configuration. See
//! [`Templater::set_config`].

use crate::common::ResultTemplate;
use crate::data::datetime::{
    datetime_from_input,
    DateInput,
    DateTimeL,
};
use crate::data::token::{token_catalog_dt, Token};
use crate::templater::fuzzy::common_chars;

use ::const_format::concatcp;
use ::lazy_static::lazy_static;
use ::regex::{Captures, Regex};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// tag configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A tag regular-expression fragment, e.g. `r"\{"`.
#[allow(non_camel_case_types)]
pub type TagPattern_str = str;

/// Default open tag fragment; matches a literal `{`.
pub const TAG_OPEN_DEFAULT: &TagPattern_str = r"\{";
/// Default close tag fragment; matches a literal `}`.
pub const TAG_CLOSE_DEFAULT: &TagPattern_str = r"\}";
/// Non-greedy capture of region content between the tags.
const CAPTURE_INNER: &str = "(.*?)";
/// Region matcher pattern for the default tags.
const TEMPLATE_PATTERN_DEFAULT: &str =
    concatcp!(TAG_OPEN_DEFAULT, CAPTURE_INNER, TAG_CLOSE_DEFAULT);

lazy_static! {
    /// Compiled matcher for the default tags, cloned into every
    /// default-constructed [`Templater`] (a `Regex` clone is cheap).
    static ref TEMPLATE_REGEX_DEFAULT: Regex = Regex::new(TEMPLATE_PATTERN_DEFAULT).unwrap();
}

/// Placeholder delimiter configuration held by a [`Templater`].
///
/// Fields are regular-expression *fragments*, not plain strings: a caller
/// wanting square-bracket delimiters supplies `r"\["` and `r"\]"`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagConfig {
    pub open_tag: String,
    pub close_tag: String,
}

impl Default for TagConfig {
    fn default() -> TagConfig {
        TagConfig {
            open_tag: String::from(TAG_OPEN_DEFAULT),
            close_tag: String::from(TAG_CLOSE_DEFAULT),
        }
    }
}

impl TagConfig {
    /// Full region matcher pattern for this configuration.
    fn to_pattern(&self) -> String {
        format!("{}{}{}", self.open_tag, CAPTURE_INNER, self.close_tag)
    }
}

/// Partial configuration merged by [`Templater::set_config`]; `None`
/// fields retain their prior values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagConfigUpdate {
    pub open_tag: Option<String>,
    pub close_tag: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Templater
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The substitution engine: a [`TagConfig`] and its compiled region
/// matcher. Every operation is a pure, immediately-returning computation;
/// instances are independent (no process-wide state).
#[derive(Debug)]
pub struct Templater {
    config: TagConfig,
    /// Compiled `open_tag + "(.*?)" + close_tag`; kept in sync with
    /// `config` by the constructors and [`set_config`].
    ///
    /// [`set_config`]: Templater::set_config
    regex: Regex,
}

impl Default for Templater {
    fn default() -> Templater {
        Templater::new()
    }
}

impl Templater {
    /// A `Templater` with the default `{` `}` tags.
    pub fn new() -> Templater {
        Templater {
            config: TagConfig::default(),
            regex: TEMPLATE_REGEX_DEFAULT.clone(),
        }
    }

    /// A `Templater` with the given tags.
    ///
    /// Fails with [`TemplaterError::TagPattern`] if the fragments form
    /// invalid pattern syntax.
    ///
    /// [`TemplaterError::TagPattern`]: crate::common::TemplaterError::TagPattern
    pub fn with_config(config: TagConfig) -> ResultTemplate<Templater> {
        let regex: Regex = Regex::new(&config.to_pattern())?;

        Ok(Templater { config, regex })
    }

    /// The currently held configuration.
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Merge `update` into the held configuration; unspecified fields
    /// retain their prior values. Returns the merged configuration; the
    /// instance continues serving all operations bound to it.
    ///
    /// Validation is eager: an invalid fragment fails here with
    /// [`TemplaterError::TagPattern`] and the prior configuration is
    /// retained untouched.
    ///
    /// ```rust
    /// use dttlib::templater::templater::{TagConfigUpdate, Templater};
    ///
    /// let mut templater = Templater::new();
    /// templater
    ///     .set_config(TagConfigUpdate {
    ///         open_tag: Some(String::from(r"\[")),
    ///         close_tag: Some(String::from(r"\]")),
    ///     })
    ///     .unwrap();
    /// assert_eq!(templater.strip("a [D] b {D} c"), "a  b {D} c");
    /// ```
    ///
    /// [`TemplaterError::TagPattern`]: crate::common::TemplaterError::TagPattern
    pub fn set_config(
        &mut self,
        update: TagConfigUpdate,
    ) -> ResultTemplate<&TagConfig> {
        defn!("({:?})", update);
        let mut config: TagConfig = self.config.clone();
        if let Some(open_tag) = update.open_tag {
            config.open_tag = open_tag;
        }
        if let Some(close_tag) = update.close_tag {
            config.close_tag = close_tag;
        }
        let regex: Regex = Regex::new(&config.to_pattern())?;
        self.config = config;
        self.regex = regex;
        defx!("config {:?}", self.config);

        Ok(&self.config)
    }

    /// Substitute token codes inside every placeholder region of
    /// `template`, values computed for `date`. Delimiters are not part of
    /// the output. A template without placeholders is returned unchanged;
    /// a dangling open tag is left as literal text.
    ///
    /// ```rust
    /// use dttlib::data::datetime::DateInput;
    /// use dttlib::templater::templater::Templater;
    ///
    /// let templater = Templater::new();
    /// let rendered = templater
    ///     .render(
    ///         "It is {h:mm A} on the {Do} day of {MMMM YYYY}",
    ///         &DateInput::Str("2001-11-17T13:37:22"),
    ///     )
    ///     .unwrap();
    /// assert_eq!(rendered, "It is 1:37 PM on the 17th day of November 2001");
    /// ```
    pub fn render(
        &self,
        template: &str,
        date: &DateInput,
    ) -> ResultTemplate<String> {
        defn!("({:?}, {:?})", template, date);
        let dt: DateTimeL = datetime_from_input(date)?;
        let tokens: Vec<Token> = token_catalog_dt(&dt);
        let rendered = self
            .regex
            .replace_all(template, |caps: &Captures| replace_once(&caps[1], &tokens));
        defx!("return {:?}", rendered);

        Ok(rendered.into_owned())
    }

    /// Remove every placeholder region (delimiters and content) from
    /// `template`. Pure function of the held configuration and the input;
    /// no date involved.
    ///
    /// ```rust
    /// use dttlib::templater::templater::Templater;
    ///
    /// let templater = Templater::new();
    /// assert_eq!(
    ///     templater.strip("It is {h:mm A} on the {Do} day of {MMMM YYYY}"),
    ///     "It is  on the  day of ",
    /// );
    /// ```
    pub fn strip(
        &self,
        template: &str,
    ) -> String {
        defñ!("({:?})", template);

        self.regex
            .replace_all(template, "")
            .into_owned()
    }

    /// Do `a` and `b` hold the same literal text once placeholder regions
    /// are removed?
    ///
    /// Both inputs are stripped, then a character-level diff retains only
    /// the common subsequence; the test passes iff that subsequence equals
    /// either stripped input. This lets a caller verify a rendered string
    /// still contains all of its template's literal text, tolerant of the
    /// substituted values differing.
    pub fn fuzzy_equals(
        &self,
        a: &str,
        b: &str,
    ) -> bool {
        defn!("({:?}, {:?})", a, b);
        let stripped_a: String = self.strip(a);
        let stripped_b: String = self.strip(b);
        let common: String = common_chars(&stripped_a, &stripped_b);
        let equals: bool = common == stripped_a || common == stripped_b;
        defx!("return {}", equals);

        equals
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// single-pass code replacement
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Ordered, single-pass, mutually-exclusive multi-pattern replacement of
/// token codes within one region's captured text.
///
/// At each position, codes are tried in catalog order; the first code that
/// is a literal prefix of the remaining text is consumed and its value
/// emitted. Catalog order lists no code as a proper prefix of a later code
/// (see [`TOKEN_CATALOG`]), so first-match is longest-match: `MMMM`
/// becomes the month name, never four `M` substitutions. Emitted values
/// are appended to the output and never re-scanned. Characters matching no
/// code are copied through.
///
/// [`TOKEN_CATALOG`]: crate::data::token::TOKEN_CATALOG
pub fn replace_once(
    inner: &str,
    tokens: &[Token],
) -> String {
    let mut out: String = String::with_capacity(inner.len());
    let mut rem: &str = inner;
    'scan: while !rem.is_empty() {
        for token in tokens.iter() {
            if rem.starts_with(token.code) {
                out.push_str(&token.value.to_string());
                rem = &rem[token.code.len()..];
                continue 'scan;
            }
        }
        // no code at this position; pass one char through
        let mut chars = rem.chars();
        match chars.next() {
            Some(c) => {
                out.push(c);
                rem = chars.as_str();
            }
            None => break,
        }
    }

    out
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// default-tag convenience functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Templater::render`] with the default `{` `}` tags.
pub fn render(
    template: &str,
    date: &DateInput,
) -> ResultTemplate<String> {
    Templater::new().render(template, date)
}

/// [`Templater::strip`] with the default `{` `}` tags.
pub fn strip(template: &str) -> String {
    Templater::new().strip(template)
}

/// [`Templater::fuzzy_equals`] with the default `{` `}` tags.
pub fn fuzzy_equals(
    a: &str,
    b: &str,
) -> bool {
    Templater::new().fuzzy_equals(a, b)
}
