//! Terminal pane: one shell session per open Terminal window.

use system_shell::{ShellEnv, ShellSession};
use virtual_fs::{node_path, FileStore, NodeId};

/// Terminal state for one open window. Dropped with the window; the session
/// performs no cleanup against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalPane {
    session: ShellSession,
}

impl TerminalPane {
    /// Starts a session at the given home directory.
    pub fn new(home: NodeId) -> Self {
        Self {
            session: ShellSession::new(home, ShellEnv::default()),
        }
    }

    /// Submits one input line, returning its output lines.
    pub fn submit(&mut self, fs: &mut FileStore, line: &str) -> Vec<String> {
        self.session.execute(fs, line)
    }

    /// Full rendered transcript.
    pub fn transcript(&self) -> &[String] {
        self.session.transcript()
    }

    /// Prompt path for the input row.
    pub fn cwd_path(&self, fs: &FileStore) -> String {
        node_path(fs, self.session.cwd())
    }
}
