//! Parameter record and taxonomy definitions.
//!
//! A [`Parameter`] is the caller-visible result of one scan step. It keeps
//! the full field set (kind, branch, indices, decoded name/value, raw text)
//! so drivers can log or serialize it, while [`Parameter::token`] offers a
//! sum-type view carrying only the fields that matter for each kind.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

/// Classification of a scanned parameter.
///
/// # Examples
///
/// ```
/// use argtoken_core::ParameterKind;
///
/// assert_eq!(ParameterKind::default(), ParameterKind::None);
/// assert_eq!(ParameterKind::ShortPlus.as_str(), "short-plus");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    /// Nothing matched (or the record has not been populated).
    #[default]
    None,
    /// `--name`, `--name:value`, `--name=value`.
    Long,
    /// `-x`, `-x:value`, `-x=value`, or one character of a `-xyz` cluster.
    ShortDash,
    /// `+x`, `+x:value`, `+x=value`, or one character of a `+xyz` cluster.
    ShortPlus,
    /// `name:` followed by a value argument.
    Property,
}

impl ParameterKind {
    /// Stable lowercase label used in trace dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Long => "long",
            Self::ShortDash => "short-dash",
            Self::ShortPlus => "short-plus",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lexical rule that classified an argument.
///
/// Rules are tested in declaration order and the first match wins; see
/// [`Lexeme::classify`](crate::Lexeme::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    /// `--name`
    LongSwitch,
    /// `--name:value` or `--name:` `value`
    LongSetting,
    /// `--name=value`
    LongData,
    /// `-x` or `+x`
    ShortSwitch,
    /// `-x:value` or `-x:` `value`
    ShortSetting,
    /// `-x=value`
    ShortData,
    /// `-xyz`
    Cluster,
    /// `-xyz:value` or `-xyz:` `value`
    ClusterSetting,
    /// `-xyz=value`
    ClusterData,
    /// `name:` `value`
    Property,
}

impl Branch {
    /// Numeric rule code, 1 through 10.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtoken_core::Branch;
    ///
    /// assert_eq!(Branch::LongSwitch.code(), 1);
    /// assert_eq!(Branch::Property.code(), 10);
    /// ```
    pub fn code(self) -> u8 {
        match self {
            Self::LongSwitch => 1,
            Self::LongSetting => 2,
            Self::LongData => 3,
            Self::ShortSwitch => 4,
            Self::ShortSetting => 5,
            Self::ShortData => 6,
            Self::Cluster => 7,
            Self::ClusterSetting => 8,
            Self::ClusterData => 9,
            Self::Property => 10,
        }
    }

    /// Returns `true` for the rules that walk a multi-character cluster.
    pub fn is_cluster(self) -> bool {
        matches!(self, Self::Cluster | Self::ClusterSetting | Self::ClusterData)
    }
}

/// Abnormal outcome of a scan step.
///
/// Stored on [`ScannerState`](crate::ScannerState) as `Option<Fault>`;
/// `None` means the last step succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fault {
    /// The argument cursor reached the end; the normal end of a scan.
    NoArgumentsAvailable,
    /// An option needed the following argument as its value, but there was none.
    NoValueAvailable,
    /// No lexical rule matched the argument.
    NoMatch,
}

impl Fault {
    /// Stable lowercase label used in trace dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoArgumentsAvailable => "no-arguments-available",
            Self::NoValueAvailable => "no-value-available",
            Self::NoMatch => "no-match",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix character of a short option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortPrefix {
    Dash,
    Plus,
}

/// Sum-type view of a populated [`Parameter`].
///
/// # Examples
///
/// ```
/// use argtoken_core::{ScannerState, ShortPrefix, Token};
///
/// let args = ["+o=out.txt"];
/// let mut state = ScannerState::start(&args, 0);
/// let param = state.next_parameter().unwrap().unwrap();
/// assert_eq!(
///     param.token(),
///     Some(Token::Short { prefix: ShortPrefix::Plus, name: 'o', value: Some("out.txt") })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },
    Short {
        prefix: ShortPrefix,
        name: char,
        value: Option<&'a str>,
    },
    Property {
        name: &'a str,
        value: &'a str,
    },
}

/// One scanned parameter.
///
/// Produced (logically cleared, then populated) by every call to
/// [`ScannerState::step`](crate::ScannerState::step). On a failed step only
/// the diagnostic fields are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parameter {
    /// What kind of parameter this is.
    pub kind: ParameterKind,
    /// Rule that fired; `None` when nothing matched.
    pub branch: Option<Branch>,
    /// Index of the argument this record came from.
    pub argument_index: usize,
    /// Arguments consumed: 1, 2 when the value came from the next argument,
    /// 0 for a cluster character that did not finish its argument.
    pub span: usize,
    /// Character offset inside the argument; nonzero only for clusters.
    pub cluster_offset: usize,
    /// Decoded long or property name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Decoded short option character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<char>,
    /// The unmodified argument text.
    pub raw_text: String,
    /// Decoded value, when the syntax carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Parameter {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its empty value.
    pub fn clear(&mut self) {
        self.kind = ParameterKind::None;
        self.branch = None;
        self.argument_index = 0;
        self.span = 0;
        self.cluster_offset = 0;
        self.name = None;
        self.short_name = None;
        self.raw_text.clear();
        self.value = None;
    }

    /// Returns the sum-type view, or `None` when the record is not a
    /// complete long, short, or property parameter.
    pub fn token(&self) -> Option<Token<'_>> {
        let value = self.value.as_deref();
        match self.kind {
            ParameterKind::None => None,
            ParameterKind::Long => Some(Token::Long {
                name: self.name.as_deref()?,
                value,
            }),
            ParameterKind::ShortDash => Some(Token::Short {
                prefix: ShortPrefix::Dash,
                name: self.short_name?,
                value,
            }),
            ParameterKind::ShortPlus => Some(Token::Short {
                prefix: ShortPrefix::Plus,
                name: self.short_name?,
                value,
            }),
            ParameterKind::Property => Some(Token::Property {
                name: self.name.as_deref()?,
                value: value?,
            }),
        }
    }

    /// Multi-line human-readable dump. Not a stable format.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtoken_core::ScannerState;
    ///
    /// let args = ["--verbose"];
    /// let mut state = ScannerState::start(&args, 0);
    /// let param = state.next_parameter().unwrap().unwrap();
    /// let dump = param.trace();
    /// assert!(dump.contains("type: long"));
    /// assert!(dump.contains("long-parameter: verbose"));
    /// ```
    pub fn trace(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "type: {}", self.kind);
        if let Some(branch) = self.branch {
            let _ = writeln!(out, "branch: {}", branch.code());
        }
        let _ = writeln!(out, "atom: {}", self.argument_index);
        if self.cluster_offset != 0 {
            let _ = writeln!(out, "atom-part: {}", self.cluster_offset);
        }
        if self.span != 0 {
            let _ = writeln!(out, "atom-span: {}", self.span);
        }
        let _ = writeln!(out, "source: {}", self.raw_text);
        match self.kind {
            ParameterKind::Long | ParameterKind::Property => {
                if let Some(name) = &self.name {
                    let _ = writeln!(out, "long-parameter: {name}");
                }
            }
            ParameterKind::ShortDash | ParameterKind::ShortPlus => {
                if let Some(short) = self.short_name {
                    let _ = writeln!(out, "short-parameter: {short}");
                }
            }
            ParameterKind::None => {}
        }
        if let Some(value) = &self.value {
            let _ = writeln!(out, "value: {value}");
        }
        out
    }
}
