//! Line-oriented command shell over the virtual file tree.
//!
//! Plain text in, plain text out: every store failure is rendered as an error
//! line in the transcript, mirroring a real terminal, and no command ever
//! returns an error to the caller.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use chrono::Local;
use virtual_fs::{node_path, resolve_path, FileStore, NodeId, NodeKind};

/// Transcript lines printed when a terminal session starts.
pub const BANNER: [&str; 4] = [
    "BuildOS v2.5.0",
    "Copyright (c) 2025 BuildPro Inc.",
    "",
    "Type \"help\" for commands.",
];

const HELP: [&str; 10] = [
    "Available commands:",
    "  ls - List directory contents",
    "  cd <path> - Change directory",
    "  mkdir <name> - Create directory",
    "  touch <name> - Create file",
    "  rm <name> - Remove file/directory",
    "  cat <name> - Display file content",
    "  whoami - Current user",
    "  date - Current system time",
    "  clear - Clear terminal",
];

/// Prompt identity for one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellEnv {
    /// User name shown in the prompt and by `whoami`.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
}

impl Default for ShellEnv {
    fn default() -> Self {
        Self {
            user: "root".to_string(),
            host: "buildos".to_string(),
        }
    }
}

/// Transient per-terminal state: one cwd plus an append-only transcript.
///
/// Sessions are dropped when their window closes; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSession {
    cwd: NodeId,
    env: ShellEnv,
    transcript: Vec<String>,
}

impl ShellSession {
    /// Creates a session rooted at `home` with the stock banner.
    pub fn new(home: NodeId, env: ShellEnv) -> Self {
        Self {
            cwd: home,
            env,
            transcript: BANNER.iter().map(|line| line.to_string()).collect(),
        }
    }

    /// Current working directory node.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Rendered transcript lines.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Executes one input line against the shared store.
    ///
    /// Returns the command's output lines. The prompt line and the output are
    /// also appended to the transcript, except for `clear`, which empties it.
    pub fn execute(&mut self, fs: &mut FileStore, line: &str) -> Vec<String> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = parts.collect();

        if command == "clear" {
            self.transcript.clear();
            return Vec::new();
        }

        // Prompt reflects the cwd before the command runs.
        let prompt = format!(
            "{}@{}:{}$ {}",
            self.env.user,
            self.env.host,
            node_path(fs, self.cwd),
            line
        );

        let output = match command.as_str() {
            "" => Vec::new(),
            "help" => HELP.iter().map(|line| line.to_string()).collect(),
            "ls" => self.run_ls(fs),
            "cd" => self.run_cd(fs, args.first().copied()),
            "mkdir" => self.run_create(fs, args.first().copied(), NodeKind::Folder),
            "touch" => self.run_create(fs, args.first().copied(), NodeKind::File),
            "rm" => self.run_rm(fs, args.first().copied()),
            "cat" => self.run_cat(fs, args.first().copied()),
            "whoami" => vec![self.env.user.clone()],
            "date" => vec![Local::now().format("%a %b %e %Y %H:%M:%S %z").to_string()],
            _ => vec![format!("command not found: {command}")],
        };

        self.transcript.push(prompt);
        self.transcript.extend(output.iter().cloned());
        output
    }

    fn run_ls(&self, fs: &FileStore) -> Vec<String> {
        match fs.list_children(self.cwd) {
            Ok(children) => {
                let names: Vec<String> = children
                    .iter()
                    .map(|node| {
                        if node.is_folder() {
                            format!("[{}]", node.name)
                        } else {
                            node.name.clone()
                        }
                    })
                    .collect();
                vec![names.join("  ")]
            }
            Err(err) => vec![format!("ls: {err}")],
        }
    }

    fn run_cd(&mut self, fs: &FileStore, target: Option<&str>) -> Vec<String> {
        let Some(target) = target else {
            return Vec::new();
        };
        match resolve_path(fs, self.cwd, target) {
            Some(id) if fs.get(id).is_some_and(|node| node.is_folder()) => {
                self.cwd = id;
                Vec::new()
            }
            _ => vec![format!("cd: no such file or directory: {target}")],
        }
    }

    fn run_create(&self, fs: &mut FileStore, name: Option<&str>, kind: NodeKind) -> Vec<String> {
        let Some(name) = name else {
            return Vec::new();
        };
        match fs.create_node(self.cwd, name, kind, "") {
            Ok(_) => match kind {
                NodeKind::Folder => vec![format!("Directory created: {name}")],
                NodeKind::File => vec![format!("File created: {name}")],
            },
            Err(err) => vec![format!("cannot create '{name}': {err}")],
        }
    }

    fn run_rm(&self, fs: &mut FileStore, name: Option<&str>) -> Vec<String> {
        let Some(name) = name else {
            return Vec::new();
        };
        match fs.child_by_name(self.cwd, name) {
            Some(id) => match fs.delete_node(id) {
                Ok(()) => vec![format!("Deleted: {name}")],
                Err(err) => vec![format!("rm: cannot remove '{name}': {err}")],
            },
            None => vec![format!("rm: cannot remove '{name}': No such file or directory")],
        }
    }

    fn run_cat(&self, fs: &FileStore, name: Option<&str>) -> Vec<String> {
        let Some(name) = name else {
            return Vec::new();
        };
        let file = fs
            .child_by_name(self.cwd, name)
            .and_then(|id| fs.get(id))
            .filter(|node| node.is_file());
        match file {
            Some(node) => vec![node.content().unwrap_or_default().to_string()],
            None => vec![format!("cat: {name}: No such file or directory")],
        }
    }
}
