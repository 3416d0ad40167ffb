//! Scanner state: the argument view plus the two progress cursors.

use std::fmt::Write as _;

use crate::Fault;

/// Mutable state for one scanning session.
///
/// Holds a read-only view of the arguments, the argument cursor, the
/// in-cluster character cursor, and the fault left by the last step.
/// Independent sessions need independent states; nothing is shared.
///
/// The cluster cursor is nonzero only while a `-xyz` style cluster is
/// partially consumed, and is reset whenever the argument cursor advances.
#[derive(Debug, Clone)]
pub struct ScannerState<'a, S = String> {
    pub(crate) arguments: &'a [S],
    pub(crate) argument_cursor: usize,
    pub(crate) cluster_cursor: usize,
    pub(crate) fault: Option<Fault>,
}

impl<'a, S: AsRef<str>> ScannerState<'a, S> {
    /// Begins a session at `start_index`.
    ///
    /// A start index at or past the end yields immediate exhaustion.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtoken_core::ScannerState;
    ///
    /// let args = ["--verbose", "-x"];
    /// let state = ScannerState::start(&args, 1);
    /// assert_eq!(ScannerState::count(&state), 2);
    /// assert_eq!(state.argument_cursor(), 1);
    /// assert_eq!(state.cluster_cursor(), 0);
    /// assert_eq!(state.fault(), None);
    /// ```
    pub fn start(arguments: &'a [S], start_index: usize) -> Self {
        Self {
            arguments,
            argument_cursor: start_index,
            cluster_cursor: 0,
            fault: None,
        }
    }

    /// Begins a session over a full program argument vector, skipping the
    /// program path at index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtoken_core::ScannerState;
    ///
    /// let argv = ["/usr/bin/tool", "--help"];
    /// let mut state = ScannerState::from_program_args(&argv);
    /// let param = state.next_parameter().unwrap().unwrap();
    /// assert_eq!(param.name.as_deref(), Some("help"));
    /// ```
    pub fn from_program_args(arguments: &'a [S]) -> Self {
        Self::start(arguments, 1)
    }

    /// Total number of arguments.
    pub fn count(&self) -> usize {
        self.arguments.len()
    }

    /// Index of the argument the next step examines.
    pub fn argument_cursor(&self) -> usize {
        self.argument_cursor
    }

    /// Character index of the last cluster character emitted, or 0.
    pub fn cluster_cursor(&self) -> usize {
        self.cluster_cursor
    }

    /// Fault left by the last step, or `None` if it succeeded.
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    /// Returns `true` once the argument cursor has reached the end.
    pub fn is_exhausted(&self) -> bool {
        self.argument_cursor >= self.arguments.len()
    }

    /// Arguments not yet fully consumed, starting with the current one.
    ///
    /// Useful for callers that stop tokenizing (for example at a `--`
    /// marker) and treat the rest as positional operands.
    pub fn remaining(&self) -> &'a [S] {
        let start = self.argument_cursor.min(self.arguments.len());
        &self.arguments[start..]
    }

    /// Raw text of the argument at `index`.
    pub(crate) fn argument(&self, index: usize) -> Option<&'a str> {
        self.arguments.get(index).map(|arg| arg.as_ref())
    }

    /// Moves to the next argument and clears the cluster cursor.
    pub(crate) fn advance(&mut self) {
        self.argument_cursor += 1;
        self.cluster_cursor = 0;
    }

    /// Human-readable dump of the state fields. Not a stable format.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtoken_core::ScannerState;
    ///
    /// let args = ["-ab"];
    /// let state = ScannerState::start(&args, 0);
    /// let dump = state.trace();
    /// assert!(dump.contains("count: 1"));
    /// assert!(dump.contains("fault: none"));
    /// ```
    pub fn trace(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Parser State:");
        let _ = writeln!(
            out,
            "\tcount: {}, argument_cursor: {}, cluster_cursor: {}",
            self.count(),
            self.argument_cursor,
            self.cluster_cursor
        );
        let _ = writeln!(
            out,
            "\tfault: {}",
            self.fault.map_or("none", |fault| fault.as_str())
        );
        out
    }
}
