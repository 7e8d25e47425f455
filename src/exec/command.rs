// src/exec/command.rs

//! Construction of the command line handed to the OS.

use std::ffi::OsString;

use crate::config::LauncherConfig;

/// Fully assembled invocation: `program` followed by `args`.
///
/// With an interpreter configured this is
/// `[interpreter, script, forwarded...]`, otherwise
/// `[script, forwarded...]`. Built fresh for every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    program: OsString,
    args: Vec<OsString>,
    forwarded: usize,
}

impl ResolvedCommand {
    /// Assemble the command for `config`, forwarding `forwarded` verbatim
    /// and in order.
    pub fn build(config: &LauncherConfig, forwarded: Vec<String>) -> Self {
        let script = config.script().as_os_str().to_os_string();
        let n_forwarded = forwarded.len();
        let forwarded = forwarded.into_iter().map(OsString::from);

        match config.interpreter() {
            Some(interpreter) => {
                let mut args = Vec::with_capacity(n_forwarded + 1);
                args.push(script);
                args.extend(forwarded);
                Self {
                    program: OsString::from(interpreter),
                    args,
                    forwarded: n_forwarded,
                }
            }
            None => Self {
                program: script,
                args: forwarded.collect(),
                forwarded: n_forwarded,
            },
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The caller-supplied arguments at the tail of the command.
    pub fn forwarded_args(&self) -> &[OsString] {
        &self.args[self.args.len() - self.forwarded..]
    }

    /// Complete argument vector, program first.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Human-readable, shell-quoted rendering for logs and `--esplaunch-dry-run`.
    pub fn display(&self) -> String {
        let parts: Vec<String> = self
            .argv()
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        shell_words::join(parts)
    }
}
