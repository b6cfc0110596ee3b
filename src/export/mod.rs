//! Graphviz export of a machine's transition table.
//!
//! The output is a `digraph` with one labelled edge per declared
//! transition, in declaration order, ready for `dot -Tpng`.

use crate::core::{Event, State};
use crate::fsm::Fsm;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// File extension appended by [`export_dot`] when missing.
pub const DOT_EXTENSION: &str = ".dot";

/// Graph-level presentation settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Graph identifier.
    pub name: String,
    /// Layout direction, e.g. `LR` or `TB`.
    pub rankdir: String,
    pub size: String,
    /// Node fill color.
    pub fill_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            name: "FSM".to_string(),
            rankdir: "LR".to_string(),
            size: "100".to_string(),
            fill_color: "skyblue".to_string(),
        }
    }
}

/// Render the transition table with default options.
pub fn to_dot<S: State, E: Event, Env, A>(fsm: &Fsm<S, E, Env, A>) -> String {
    to_dot_with(fsm, &DotOptions::default())
}

/// Render the transition table.
pub fn to_dot_with<S: State, E: Event, Env, A>(
    fsm: &Fsm<S, E, Env, A>,
    options: &DotOptions,
) -> String {
    DotGraph { fsm, options }.to_string()
}

struct DotGraph<'a, S: State, E: Event, Env, A> {
    fsm: &'a Fsm<S, E, Env, A>,
    options: &'a DotOptions,
}

impl<S: State, E: Event, Env, A> fmt::Display for DotGraph<'_, S, E, Env, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.options;
        writeln!(f, "digraph {} {{", quote(&options.name))?;
        writeln!(f, "\trankdir={}", options.rankdir)?;
        writeln!(f, "\tsize={}", quote(&options.size))?;
        writeln!(
            f,
            "\tnode[width=1 fixedsize=false shape=ellipse style=filled fillcolor={}]",
            quote(&options.fill_color)
        )?;
        for transition in self.fsm.transitions() {
            writeln!(
                f,
                "\t{} -> {} [label={}]",
                quote(transition.from.name()),
                quote(transition.to.name()),
                quote(transition.event.name())
            )?;
        }
        writeln!(f, "}}")
    }
}

/// Write the table to `path` in dot format, appending `.dot` if the path
/// does not already end with it. Returns the path actually written.
pub fn export_dot<S: State, E: Event, Env, A>(
    fsm: &Fsm<S, E, Env, A>,
    path: impl AsRef<Path>,
) -> io::Result<PathBuf> {
    export_dot_with(fsm, path, &DotOptions::default())
}

pub fn export_dot_with<S: State, E: Event, Env, A>(
    fsm: &Fsm<S, E, Env, A>,
    path: impl AsRef<Path>,
    options: &DotOptions,
) -> io::Result<PathBuf> {
    let path = with_dot_extension(path.as_ref());
    std::fs::write(&path, to_dot_with(fsm, options))?;
    info!("Output the FSM to \"{}\"", path.display());
    Ok(path)
}

/// Count the edge statements in dot text produced by [`to_dot`].
pub fn count_edges(dot: &str) -> usize {
    dot.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('"') && line.contains("\" -> \""))
        .count()
}

fn with_dot_extension(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(DOT_EXTENSION) {
        return path.to_path_buf();
    }
    let mut file = path.as_os_str().to_owned();
    file.push(DOT_EXTENSION);
    PathBuf::from(file)
}

fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    // One edge statement per line, so line breaks are escaped too.
    for c in id.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::{Callbacks, Transition};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn machine() -> Fsm<&'static str, &'static str, (), ()> {
        Fsm::new(
            vec![
                Transition::new("start", "Idle", "Running"),
                Transition::new("stop", "Running", "Idle"),
                Transition::new("ping", "Idle", "Idle"),
            ],
            Callbacks::new(),
        )
        .unwrap()
    }

    fn scratch_path(stem: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!("{stem}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn dot_lists_one_edge_per_transition() {
        let dot = to_dot(&machine());

        assert!(dot.starts_with("digraph \"FSM\" {\n"));
        assert!(dot.contains("\trankdir=LR\n"));
        assert!(dot.contains("fillcolor=\"skyblue\""));
        assert!(dot.contains("\t\"Idle\" -> \"Running\" [label=\"start\"]\n"));
        assert!(dot.contains("\t\"Idle\" -> \"Idle\" [label=\"ping\"]\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(count_edges(&dot), 3);
    }

    #[test]
    fn edges_follow_declaration_order() {
        let dot = to_dot(&machine());
        let start = dot.find("label=\"start\"").unwrap();
        let stop = dot.find("label=\"stop\"").unwrap();
        let ping = dot.find("label=\"ping\"").unwrap();

        assert!(start < stop && stop < ping);
    }

    #[test]
    fn options_override_presentation() {
        let options = DotOptions {
            name: "amf".into(),
            rankdir: "TB".into(),
            ..DotOptions::default()
        };

        let dot = to_dot_with(&machine(), &options);

        assert!(dot.starts_with("digraph \"amf\" {"));
        assert!(dot.contains("rankdir=TB"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: DotOptions = serde_json::from_str(r#"{"rankdir": "TB"}"#).unwrap();

        assert_eq!(options.rankdir, "TB");
        assert_eq!(options.fill_color, "skyblue");
    }

    #[test]
    fn names_are_escaped() {
        assert_eq!(quote("Entry event"), "\"Entry event\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("Wait\nING\r"), "\"Wait\\nING\\r\"");
    }

    #[test]
    fn multi_line_names_keep_one_edge_per_line() {
        let fsm: Fsm<String, String, (), ()> = Fsm::new(
            vec![
                Transition::new("go".to_string(), "Wait\nING".to_string(), "Done".to_string()),
                Transition::new("back".to_string(), "Done".to_string(), "Idle".to_string()),
            ],
            Callbacks::new(),
        )
        .unwrap();

        let dot = to_dot(&fsm);

        assert_eq!(count_edges(&dot), 2);
        assert!(dot.contains("\t\"Wait\\nING\" -> \"Done\" [label=\"go\"]\n"));
    }

    #[test]
    fn extension_is_appended_once() {
        assert_eq!(with_dot_extension(Path::new("out/fsm")), PathBuf::from("out/fsm.dot"));
        assert_eq!(
            with_dot_extension(Path::new("out/fsm.dot")),
            PathBuf::from("out/fsm.dot")
        );
    }

    #[test]
    fn export_writes_file_with_extension() {
        let base = scratch_path("tabled-fsm-export");

        let written = export_dot(&machine(), &base).unwrap();

        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("dot"));
        let contents = std::fs::read_to_string(&written).unwrap();
        assert_eq!(contents, to_dot(&machine()));
        std::fs::remove_file(written).unwrap();
    }

    #[test]
    fn export_propagates_io_errors() {
        let missing_dir = scratch_path("tabled-fsm-missing").join("nested").join("fsm");

        let err = export_dot(&machine(), missing_dir).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
