//! The ten-rule stepper.
//!
//! Each call to [`ScannerState::step`] examines the argument under the
//! argument cursor, picks the first matching rule, fills one
//! [`Parameter`], and advances the cursors. Cluster rules (`-xyz`) emit one
//! character per call and hold the argument cursor until the last one.
//!
//! A value taken from the following argument is always a literal; it is
//! never classified itself, even when it looks like an option.

use tracing::debug;

use crate::{Branch, Fault, Lexeme, Parameter, ParameterKind, ScanError, ScannerState};

/// How a value-bearing rule ends.
enum ValueSource {
    /// Value follows the separator in the same argument.
    Inline(usize),
    /// Value is the whole next argument.
    NextArgument,
}

impl<'a, S: AsRef<str>> ScannerState<'a, S> {
    /// Scans one parameter into `record`.
    ///
    /// Returns `true` when a rule matched and the record is complete.
    /// Returns `false` with [`fault`](Self::fault) set when the arguments
    /// are exhausted, when a required value argument is missing, or when no
    /// rule matched. Only exhaustion leaves the cursors untouched; the
    /// other two failures have already moved past the offending argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtoken_core::{Fault, Parameter, ParameterKind, ScannerState};
    ///
    /// let args = ["-ab"];
    /// let mut state = ScannerState::start(&args, 0);
    /// let mut record = Parameter::new();
    ///
    /// assert!(state.step(&mut record));
    /// assert_eq!(record.short_name, Some('a'));
    /// assert_eq!(state.argument_cursor(), 0);
    ///
    /// assert!(state.step(&mut record));
    /// assert_eq!(record.kind, ParameterKind::ShortDash);
    /// assert_eq!(record.short_name, Some('b'));
    /// assert_eq!(state.argument_cursor(), 1);
    ///
    /// assert!(!state.step(&mut record));
    /// assert_eq!(state.fault(), Some(Fault::NoArgumentsAvailable));
    /// ```
    pub fn step(&mut self, record: &mut Parameter) -> bool {
        self.fault = None;
        record.clear();

        if self.is_exhausted() {
            return self.fail(Fault::NoArgumentsAvailable);
        }
        let index = self.argument_cursor;
        let Some(text) = self.argument(index) else {
            return self.fail(Fault::NoArgumentsAvailable);
        };

        record.argument_index = index;
        record.raw_text.push_str(text);

        let lexeme = Lexeme::new(text);
        let Some(branch) = lexeme.classify() else {
            self.advance();
            debug!(argument = index, raw = text, "No parameter rule matched");
            return self.fail(Fault::NoMatch);
        };

        record.branch = Some(branch);
        record.kind = match branch {
            Branch::LongSwitch | Branch::LongSetting | Branch::LongData => ParameterKind::Long,
            Branch::Property => ParameterKind::Property,
            _ if lexeme.is_short_plus() => ParameterKind::ShortPlus,
            _ => ParameterKind::ShortDash,
        };

        let matched = match branch {
            Branch::LongSwitch => {
                record.name = Some(lexeme.tail(2));
                record.span = 1;
                self.advance();
                true
            }
            Branch::LongSetting => {
                let colon = lexeme.colon().unwrap_or_default();
                record.name = Some(lexeme.slice(2, colon));
                self.take_value(record, &lexeme, separator_value(&lexeme, colon))
            }
            Branch::LongData => {
                let equals = lexeme.equals().unwrap_or_default();
                record.name = Some(lexeme.slice(2, equals));
                self.take_value(record, &lexeme, ValueSource::Inline(equals + 1))
            }
            Branch::ShortSwitch => {
                record.short_name = lexeme.char_at(1);
                record.span = 1;
                self.advance();
                true
            }
            Branch::ShortSetting => {
                record.short_name = lexeme.char_at(1);
                self.take_value(record, &lexeme, separator_value(&lexeme, 2))
            }
            Branch::ShortData => {
                record.short_name = lexeme.char_at(1);
                self.take_value(record, &lexeme, ValueSource::Inline(3))
            }
            Branch::Cluster => {
                let last = lexeme.len() - 1;
                if self.next_cluster_char(record, &lexeme) == last {
                    record.span = 1;
                    self.advance();
                }
                true
            }
            Branch::ClusterSetting => {
                let colon = lexeme.colon().unwrap_or_default();
                if self.next_cluster_char(record, &lexeme) == colon - 1 {
                    self.take_value(record, &lexeme, separator_value(&lexeme, colon))
                } else {
                    true
                }
            }
            Branch::ClusterData => {
                let equals = lexeme.equals().unwrap_or_default();
                if self.next_cluster_char(record, &lexeme) == equals - 1 {
                    self.take_value(record, &lexeme, ValueSource::Inline(equals + 1))
                } else {
                    true
                }
            }
            Branch::Property => {
                let colon = lexeme.colon().unwrap_or_default();
                record.name = Some(lexeme.slice(0, colon));
                self.take_value(record, &lexeme, ValueSource::NextArgument)
            }
        };

        if matched {
            debug!(
                branch = branch.code(),
                argument = index,
                cluster_offset = record.cluster_offset,
                span = record.span,
                "Scanned parameter"
            );
        }
        matched
    }

    /// Scans the next parameter, or returns `None` once the arguments are
    /// exhausted.
    ///
    /// Errors do not end the scan: the cursor has already moved past the
    /// offending argument, so calling again continues with the next one.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtoken_core::{ScanError, ScannerState};
    ///
    /// let args = ["-", "--name=value"];
    /// let mut state = ScannerState::start(&args, 0);
    ///
    /// let err = state.next_parameter().unwrap().unwrap_err();
    /// assert!(matches!(err, ScanError::Unrecognized { index: 0, .. }));
    ///
    /// let param = state.next_parameter().unwrap().unwrap();
    /// assert_eq!(param.value.as_deref(), Some("value"));
    ///
    /// assert!(state.next_parameter().is_none());
    /// ```
    pub fn next_parameter(&mut self) -> Option<Result<Parameter, ScanError>> {
        let mut record = Parameter::new();
        if self.step(&mut record) {
            return Some(Ok(record));
        }

        let index = record.argument_index;
        let raw = record.raw_text;
        match self.fault? {
            Fault::NoArgumentsAvailable => None,
            Fault::NoValueAvailable => Some(Err(ScanError::MissingValue { index, raw })),
            Fault::NoMatch => Some(Err(ScanError::Unrecognized { index, raw })),
        }
    }

    /// Emits the next cluster character and returns its offset.
    fn next_cluster_char(&mut self, record: &mut Parameter, lexeme: &Lexeme) -> usize {
        self.cluster_cursor += 1;
        record.cluster_offset = self.cluster_cursor;
        record.short_name = lexeme.char_at(self.cluster_cursor);
        self.cluster_cursor
    }

    /// Completes a value-bearing rule. Always moves past the current
    /// argument; a missing next argument is reported after the move.
    fn take_value(&mut self, record: &mut Parameter, lexeme: &Lexeme, source: ValueSource) -> bool {
        match source {
            ValueSource::Inline(start) => {
                record.value = Some(lexeme.tail(start));
                record.span = 1;
                self.advance();
                true
            }
            ValueSource::NextArgument => {
                // Within a cluster the earlier characters were already
                // emitted, so only the triggering argument counts on failure.
                let in_cluster = record.branch.is_some_and(Branch::is_cluster);
                self.advance();
                match self.argument(self.argument_cursor) {
                    Some(value) => {
                        record.value = Some(value.to_string());
                        record.span = 2;
                        self.advance();
                        true
                    }
                    None => {
                        record.span = if in_cluster { 1 } else { 2 };
                        debug!(
                            argument = record.argument_index,
                            raw = %record.raw_text,
                            "Value argument missing"
                        );
                        self.fail(Fault::NoValueAvailable)
                    }
                }
            }
        }
    }

    fn fail(&mut self, fault: Fault) -> bool {
        self.fault = Some(fault);
        false
    }
}

/// Inline value when text continues past the separator, otherwise the next
/// argument.
fn separator_value(lexeme: &Lexeme, separator: usize) -> ValueSource {
    if lexeme.len() > separator + 1 {
        ValueSource::Inline(separator + 1)
    } else {
        ValueSource::NextArgument
    }
}

impl<S: AsRef<str>> Iterator for ScannerState<'_, S> {
    type Item = Result<Parameter, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_parameter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs one step from index 0 and reports the record, argument
    /// cursor, and fault.
    fn scan_one(args: &[&str]) -> (bool, Parameter, usize, Option<Fault>) {
        let mut state = ScannerState::start(args, 0);
        let mut record = Parameter::new();
        let ok = state.step(&mut record);
        (ok, record, state.argument_cursor(), state.fault())
    }

    #[test]
    fn test_long_switch() {
        let (ok, record, cursor, fault) = scan_one(&["--verbose"]);
        assert!(ok);
        assert_eq!(record.kind, ParameterKind::Long);
        assert_eq!(record.branch, Some(Branch::LongSwitch));
        assert_eq!(record.name.as_deref(), Some("verbose"));
        assert_eq!(record.value, None);
        assert_eq!(record.span, 1);
        assert_eq!(cursor, 1);
        assert_eq!(fault, None);
    }

    #[test]
    fn test_long_setting_inline() {
        let (ok, record, cursor, _) = scan_one(&["--file:a.txt", "rest"]);
        assert!(ok);
        assert_eq!(record.branch, Some(Branch::LongSetting));
        assert_eq!(record.name.as_deref(), Some("file"));
        assert_eq!(record.value.as_deref(), Some("a.txt"));
        assert_eq!(record.span, 1);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_long_setting_from_next_argument() {
        let (ok, record, cursor, _) = scan_one(&["--file:", "a.txt"]);
        assert!(ok);
        assert_eq!(record.value.as_deref(), Some("a.txt"));
        assert_eq!(record.span, 2);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_long_setting_missing_value_advances_first() {
        let (ok, record, cursor, fault) = scan_one(&["--file:"]);
        assert!(!ok);
        assert_eq!(fault, Some(Fault::NoValueAvailable));
        assert_eq!(cursor, 1);
        assert_eq!(record.name.as_deref(), Some("file"));
        assert_eq!(record.span, 2);
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_long_data_allows_empty_value() {
        let (ok, record, _, _) = scan_one(&["--file="]);
        assert!(ok);
        assert_eq!(record.branch, Some(Branch::LongData));
        assert_eq!(record.value.as_deref(), Some(""));
    }

    #[test]
    fn test_short_switch_plus() {
        let (ok, record, _, _) = scan_one(&["+x"]);
        assert!(ok);
        assert_eq!(record.kind, ParameterKind::ShortPlus);
        assert_eq!(record.short_name, Some('x'));
        assert_eq!(record.cluster_offset, 0);
    }

    #[test]
    fn test_short_setting_next_argument_is_literal() {
        let (ok, record, cursor, _) = scan_one(&["-o:", "-b"]);
        assert!(ok);
        assert_eq!(record.branch, Some(Branch::ShortSetting));
        assert_eq!(record.value.as_deref(), Some("-b"));
        assert_eq!(record.span, 2);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_short_data() {
        let (ok, record, _, _) = scan_one(&["-o=out.txt"]);
        assert!(ok);
        assert_eq!(record.branch, Some(Branch::ShortData));
        assert_eq!(record.short_name, Some('o'));
        assert_eq!(record.value.as_deref(), Some("out.txt"));
    }

    #[test]
    fn test_cluster_with_setting_from_next_argument() {
        let args = ["-ab:", "value"];
        let mut state = ScannerState::start(&args, 0);
        let mut record = Parameter::new();

        assert!(state.step(&mut record));
        assert_eq!(record.short_name, Some('a'));
        assert_eq!(record.value, None);
        assert_eq!(record.span, 0);
        assert_eq!(state.argument_cursor(), 0);

        assert!(state.step(&mut record));
        assert_eq!(record.short_name, Some('b'));
        assert_eq!(record.cluster_offset, 2);
        assert_eq!(record.value.as_deref(), Some("value"));
        assert_eq!(record.span, 2);
        assert_eq!(state.argument_cursor(), 2);
        assert_eq!(state.cluster_cursor(), 0);
    }

    #[test]
    fn test_cluster_setting_missing_value_reports_single_span() {
        let args = ["-ab:"];
        let mut state = ScannerState::start(&args, 0);
        let mut record = Parameter::new();

        assert!(state.step(&mut record));
        assert!(!state.step(&mut record));
        assert_eq!(state.fault(), Some(Fault::NoValueAvailable));
        assert_eq!(record.short_name, Some('b'));
        assert_eq!(record.span, 1);
        assert_eq!(state.argument_cursor(), 1);
        assert_eq!(state.cluster_cursor(), 0);
    }

    #[test]
    fn test_cluster_data() {
        let args = ["+abc=v"];
        let mut state = ScannerState::start(&args, 0);
        let names: Vec<_> = state.by_ref().map(|p| p.unwrap()).collect();
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|p| p.kind == ParameterKind::ShortPlus));
        assert_eq!(names[2].short_name, Some('c'));
        assert_eq!(names[2].value.as_deref(), Some("v"));
        assert_eq!(names[2].span, 1);
        assert_eq!(names[1].value, None);
    }

    #[test]
    fn test_property_missing_value() {
        let (ok, record, cursor, fault) = scan_one(&["name:"]);
        assert!(!ok);
        assert_eq!(record.kind, ParameterKind::Property);
        assert_eq!(record.span, 2);
        assert_eq!(fault, Some(Fault::NoValueAvailable));
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_prefixed_trailing_colon_is_property() {
        for (raw, name) in [("-:", "-"), ("+:", "+"), ("--:", "--")] {
            let (ok, record, cursor, fault) = scan_one(&[raw, "V"]);
            assert!(ok, "{raw:?} should match");
            assert_eq!(record.kind, ParameterKind::Property);
            assert_eq!(record.branch, Some(Branch::Property));
            assert_eq!(record.name.as_deref(), Some(name));
            assert_eq!(record.value.as_deref(), Some("V"));
            assert_eq!(record.span, 2);
            assert_eq!(cursor, 2);
            assert_eq!(fault, None);
        }
    }

    #[test]
    fn test_no_match_advances_and_keeps_diagnostics() {
        let (ok, record, cursor, fault) = scan_one(&["plain", "--x"]);
        assert!(!ok);
        assert_eq!(fault, Some(Fault::NoMatch));
        assert_eq!(cursor, 1);
        assert_eq!(record.kind, ParameterKind::None);
        assert_eq!(record.branch, None);
        assert_eq!(record.raw_text, "plain");
        assert_eq!(record.argument_index, 0);
    }

    #[test]
    fn test_exhaustion_clears_record_and_keeps_cursor() {
        let args = ["--x"];
        let mut state = ScannerState::start(&args, 1);
        let mut record = Parameter {
            raw_text: "stale".to_string(),
            ..Parameter::default()
        };
        assert!(!state.step(&mut record));
        assert_eq!(state.fault(), Some(Fault::NoArgumentsAvailable));
        assert_eq!(state.argument_cursor(), 1);
        assert_eq!(record, Parameter::default());
    }

    #[test]
    fn test_success_clears_previous_fault() {
        let args = ["-", "-v"];
        let mut state = ScannerState::start(&args, 0);
        let mut record = Parameter::new();
        assert!(!state.step(&mut record));
        assert_eq!(state.fault(), Some(Fault::NoMatch));
        assert!(state.step(&mut record));
        assert_eq!(state.fault(), None);
    }

    #[test]
    fn test_iterator_reports_missing_value_then_ends() {
        let args = ["-v", "--out:"];
        let state = ScannerState::start(&args, 0);
        let results: Vec<_> = state.collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(ScanError::MissingValue {
                index: 1,
                raw: "--out:".to_string()
            })
        );
    }
}
