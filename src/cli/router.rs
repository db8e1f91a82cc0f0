//! Command tree assembly and dispatch
//!
//! The [`Router`] owns the root command. It attaches the built-in `completion`
//! and `version` commands plus any number of [`CommandProvider`] subtrees, then
//! maps each invocation to exactly one action:
//!
//! - a node with children (the root, `completion`, provider namespaces) prints its help
//! - `version` and `completion <shell>` run their built-in actions
//! - any other leaf runs the owning provider's action
//!
//! Every non-error byte goes to the writer passed to [`Router::dispatch`].
//! Usage errors are returned untouched for the caller to report.

use crate::cli::common::{find_node, write_help};
use crate::cli::completion::{self, COMPLETION_COMMAND};
use crate::cli::version::{self, VERSION_COMMAND};
use crate::error::{ActionError, RouterError};
use crate::version::BIN_NAME;
use clap::ArgMatches;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// Names owned by the router itself; providers may not reuse them
const RESERVED_NAMES: [&str; 3] = [COMPLETION_COMMAND, VERSION_COMMAND, "help"];

/// A source of one command subtree attached under the root
///
/// The router never looks inside a provider's subtree beyond walking the
/// matched path, so providers can be swapped freely (stubs in tests).
pub trait CommandProvider {
    /// Build the subtree: its name, help text, flags and children
    fn build_subtree(&self) -> clap::Command;

    /// Run the leaf action selected within this subtree
    ///
    /// `matches` are the matches of the subtree's own root node. This is only
    /// called when the matched path ends at a node without children.
    fn run(&self, matches: &ArgMatches, out: &mut dyn Write) -> Result<(), ActionError>;
}

/// Root command dispatcher
pub struct Router {
    providers: Vec<(String, Box<dyn CommandProvider>)>,
}

impl Router {
    /// Create a router with only the built-in commands
    pub fn new() -> Self {
        Router {
            providers: Vec::new(),
        }
    }

    /// Attach a provider's subtree as a child of the root
    ///
    /// # Errors
    ///
    /// Returns `RouterError::DuplicateCommand` if the subtree's name is
    /// already taken by a built-in command or an earlier provider.
    pub fn with_provider<P>(mut self, provider: P) -> Result<Self, RouterError>
    where
        P: CommandProvider + 'static,
    {
        let name = provider.build_subtree().get_name().to_string();
        let taken = RESERVED_NAMES.contains(&name.as_str())
            || self.providers.iter().any(|(existing, _)| *existing == name);
        if taken {
            return Err(RouterError::DuplicateCommand(name));
        }

        self.providers.push((name, Box::new(provider)));
        Ok(self)
    }

    /// Names of the attached provider subtrees, in attach order
    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|(name, _)| name.as_str())
    }

    /// Build the full command tree
    ///
    /// The tree is rebuilt from scratch on every call and contains no state
    /// other than what the providers return.
    pub fn command(&self) -> clap::Command {
        let root = clap::Command::new(BIN_NAME)
            .bin_name(BIN_NAME)
            .about("tictactoe: CLI to the TicTacToe Game")
            .subcommand(completion::command())
            .subcommand(version::command());

        self.providers
            .iter()
            .fold(root, |root, (_, provider)| root.subcommand(provider.build_subtree()))
    }

    /// Parse `args` (including the program name) and run the matching action
    ///
    /// Help, version text, completion scripts and provider output are written
    /// to `out`. Explicit help requests (`--help`, `help <command>`) are
    /// successful dispatches.
    ///
    /// # Errors
    ///
    /// - `RouterError::Usage` for unknown commands or malformed flags
    /// - `RouterError::Action` if the selected action fails
    /// - `RouterError::Io` if writing help or version text fails
    pub fn dispatch<I, T>(&self, args: I, out: &mut dyn Write) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut root = self.command();
        let matches = match root.try_get_matches_from_mut(args) {
            Ok(matches) => matches,
            Err(err) if is_requested_output(&err) => {
                debug!(kind = ?err.kind(), "rendering requested help");
                write!(out, "{}", err.render())?;
                out.flush()?;
                return Ok(());
            }
            Err(err) => return Err(RouterError::Usage(err)),
        };
        root.build();

        let path = matched_path(&matches);
        debug!(path = %path.join(" "), "resolved command path");

        let Some(node) = find_node(&mut root, &path) else {
            return Err(unknown_path(&mut root, &path));
        };
        if node.has_subcommands() {
            debug!("namespace matched, printing help");
            write_help(node, out)?;
            return Ok(());
        }

        match path[0].as_str() {
            VERSION_COMMAND => version::run_version(out)?,
            COMPLETION_COMMAND => {
                let Some(shell) = path.get(1).and_then(|name| completion::shell_for(name)) else {
                    return Err(unknown_path(&mut root, &path));
                };
                let mut tree = self.command();
                completion::run_completion(shell, &mut tree, out)?;
            }
            name => {
                let provider = self
                    .providers
                    .iter()
                    .find(|(provider_name, _)| provider_name == name)
                    .map(|(_, provider)| provider);
                let (Some(provider), Some(provider_matches)) =
                    (provider, matches.subcommand_matches(name))
                else {
                    return Err(unknown_path(&mut root, &path));
                };
                debug!(provider = name, "delegating to provider");
                provider.run(provider_matches, out)?;
            }
        }

        Ok(())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Help and version requests are output, not failures
fn is_requested_output(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Names of the matched commands below the root, outermost first
fn matched_path(matches: &ArgMatches) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = matches;
    while let Some((name, sub)) = current.subcommand() {
        path.push(name.to_string());
        current = sub;
    }
    path
}

fn unknown_path(root: &mut clap::Command, path: &[String]) -> RouterError {
    RouterError::Usage(root.error(
        ErrorKind::InvalidSubcommand,
        format!("no action for '{}'", path.join(" ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Provider that records every leaf it is asked to run
    struct StubProvider {
        name: &'static str,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl StubProvider {
        fn new(name: &'static str) -> (Self, Rc<RefCell<Vec<String>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            (
                StubProvider {
                    name,
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl CommandProvider for StubProvider {
        fn build_subtree(&self) -> clap::Command {
            clap::Command::new(self.name)
                .about("Stub commands")
                .subcommand(
                    clap::Command::new("ping")
                        .about("Reply with pong")
                        .arg(clap::Arg::new("count").long("count")),
                )
                .subcommand(
                    clap::Command::new("group")
                        .about("Nested stub group")
                        .subcommand(clap::Command::new("inner").about("Inner leaf")),
                )
        }

        fn run(&self, matches: &ArgMatches, out: &mut dyn Write) -> Result<(), ActionError> {
            let path = matched_path(matches).join(" ");
            let count = matched_path_leaf(matches)
                .try_get_one::<String>("count")
                .ok()
                .flatten()
                .cloned()
                .unwrap_or_default();
            self.calls.borrow_mut().push(format!("{}{}", path, count));
            writeln!(out, "pong")?;
            Ok(())
        }
    }

    fn matched_path_leaf(matches: &ArgMatches) -> &ArgMatches {
        let mut current = matches;
        while let Some((_, sub)) = current.subcommand() {
            current = sub;
        }
        current
    }

    fn run(router: &Router, args: &[&str]) -> (Result<(), RouterError>, String) {
        let mut out = Vec::new();
        let result = router.dispatch(args.iter().copied(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn stub_router() -> (Router, Rc<RefCell<Vec<String>>>) {
        let (stub, calls) = StubProvider::new("stub");
        let router = Router::new().with_provider(stub).unwrap();
        (router, calls)
    }

    #[test]
    fn test_verify_command_tree() {
        let (router, _) = stub_router();
        router.command().debug_assert();
    }

    #[test]
    fn test_root_children_in_attach_order() {
        let (router, _) = stub_router();
        let cmd = router.command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, vec!["completion", "version", "stub"]);
    }

    #[test]
    fn test_no_args_prints_root_help() {
        let (router, calls) = stub_router();
        let (result, out) = run(&router, &["tictactoe"]);
        assert!(result.is_ok());
        assert!(out.contains("tictactoe: CLI to the TicTacToe Game"));
        assert!(out.contains("completion"));
        assert!(out.contains("version"));
        assert!(out.contains("stub"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_help_flag_goes_to_out() {
        let (router, _) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "--help"]);
        assert!(result.is_ok());
        assert!(out.contains("Usage: tictactoe"));
    }

    #[test]
    fn test_help_subcommand_goes_to_out() {
        let (router, _) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "help", "completion"]);
        assert!(result.is_ok());
        assert!(out.contains("Generate shell completion scripts"));
    }

    #[test]
    fn test_version_writes_version_line() {
        let (router, _) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "version"]);
        assert!(result.is_ok());
        assert_eq!(out, format!("{}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_completion_namespace_prints_own_help() {
        let (router, _) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "completion"]);
        assert!(result.is_ok());
        assert!(out.contains("tictactoe completion"));
        for shell in ["bash", "zsh", "fish", "powershell"] {
            assert!(out.contains(shell), "missing {}", shell);
        }
    }

    #[test]
    fn test_completion_includes_provider_subtree() {
        let (router, _) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "completion", "fish"]);
        assert!(result.is_ok());
        assert!(out.contains("tictactoe"));
        assert!(out.contains("stub"));
        assert!(out.contains("ping"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_completion_to_closed_output_is_io_error() {
        let (router, _) = stub_router();
        let result = router.dispatch(["tictactoe", "completion", "zsh"], &mut ClosedPipe);
        match result {
            Err(err @ RouterError::Io(_)) => assert_eq!(err.exit_code(), 1),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_leaf_dispatches_once() {
        let (router, calls) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "stub", "ping", "--count", "3"]);
        assert!(result.is_ok());
        assert_eq!(out, "pong\n");
        assert_eq!(*calls.borrow(), vec!["ping3".to_string()]);
    }

    #[test]
    fn test_provider_nested_leaf_dispatches() {
        let (router, calls) = stub_router();
        let (result, _) = run(&router, &["tictactoe", "stub", "group", "inner"]);
        assert!(result.is_ok());
        assert_eq!(*calls.borrow(), vec!["group inner".to_string()]);
    }

    #[test]
    fn test_provider_namespace_prints_help_without_running() {
        let (router, calls) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "stub"]);
        assert!(result.is_ok());
        assert!(out.contains("Stub commands"));
        assert!(out.contains("ping"));
        assert!(calls.borrow().is_empty());

        let (result, out) = run(&router, &["tictactoe", "stub", "group"]);
        assert!(result.is_ok());
        assert!(out.contains("Nested stub group"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_unknown_command_is_usage_error() {
        let (router, calls) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "nonexistent"]);
        match result {
            Err(RouterError::Usage(err)) => {
                assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
            }
            other => panic!("Expected usage error, got {:?}", other),
        }
        assert!(out.is_empty());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let (router, _) = stub_router();
        let (result, out) = run(&router, &["tictactoe", "version", "--bogus"]);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_shell_is_usage_error() {
        let (router, _) = stub_router();
        let (result, _) = run(&router, &["tictactoe", "completion", "elvish"]);
        assert!(matches!(result, Err(RouterError::Usage(_))));
    }

    #[test]
    fn test_duplicate_provider_rejected() {
        let (first, _) = StubProvider::new("stub");
        let (second, _) = StubProvider::new("stub");
        let result = Router::new().with_provider(first).unwrap().with_provider(second);
        match result {
            Err(RouterError::DuplicateCommand(name)) => assert_eq!(name, "stub"),
            _ => panic!("Expected DuplicateCommand error"),
        }
    }

    #[test]
    fn test_reserved_name_rejected() {
        for reserved in ["completion", "version", "help"] {
            let (stub, _) = StubProvider::new(reserved);
            assert!(matches!(
                Router::new().with_provider(stub),
                Err(RouterError::DuplicateCommand(_))
            ));
        }
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let (router, _) = stub_router();
        for args in [
            vec!["tictactoe"],
            vec!["tictactoe", "completion", "bash"],
            vec!["tictactoe", "completion", "zsh"],
            vec!["tictactoe", "version"],
        ] {
            let (_, first) = run(&router, &args);
            let (_, second) = run(&router, &args);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_matched_path_empty_for_root() {
        let (router, _) = stub_router();
        let matches = router.command().try_get_matches_from(["tictactoe"]).unwrap();
        assert!(matched_path(&matches).is_empty());
    }

    #[test]
    fn test_provider_names() {
        let (router, _) = stub_router();
        assert_eq!(router.provider_names().collect::<Vec<_>>(), vec!["stub"]);
    }
}
