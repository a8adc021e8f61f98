//! REPL Module
//!
//! Prompt, read a line, dispatch it, print the reply. Generic over the
//! console streams so the loop can run against in-memory buffers.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::commands::{CommandRegistry, Control, Reply, Session};
use crate::error::Result;

/// Trims, splits on whitespace and lowercases a line of input.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Interactive loop over one session.
pub struct Repl {
    registry: CommandRegistry,
    session: Session,
    prompt: String,
}

impl Repl {
    pub fn new(registry: CommandRegistry, session: Session, prompt: impl Into<String>) -> Self {
        Self {
            registry,
            session,
            prompt: prompt.into(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Handle Line ==
    /// Runs one line of input and returns what to print.
    ///
    /// Unknown commands and handler errors become plain output lines; they
    /// never stop the loop.
    pub async fn handle_line(&mut self, line: &str) -> Reply {
        let tokens = clean_input(line);
        let Some(name) = tokens.first() else {
            return Reply::default();
        };
        let arg = tokens.get(1).map(String::as_str).unwrap_or("");

        match self.registry.execute(&mut self.session, name, arg).await {
            Some(Ok(reply)) => reply,
            Some(Err(err)) => {
                warn!(command = %name, error = %err, "command failed");
                Reply::lines(vec![err.to_string()])
            }
            None => {
                debug!(command = %name, "unknown command");
                Reply::lines(vec!["Unknown command".to_string()])
            }
        }
    }

    // == Run ==
    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Only console I/O failures are returned as errors. Bytes that are not
    /// valid UTF-8 are replaced rather than treated as a read failure.
    pub async fn run<R, W>(&mut self, mut input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            output.write_all(self.prompt.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                output.write_all(b"\n").await?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            let reply = self.handle_line(&line).await;
            for text in &reply.lines {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }

            if reply.control == Control::Exit {
                break;
            }
        }

        output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PokeApiClient;
    use crate::config::Config;

    fn repl() -> Repl {
        let config = Config::default().with_base_url("http://127.0.0.1:9");
        let client = PokeApiClient::new(&config).unwrap();
        Repl::new(CommandRegistry::builtin(), Session::new(client), "Pokedex > ")
    }

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("  hello  world  "), vec!["hello", "world"]);
        assert_eq!(
            clean_input("Charmander Bulbasaur PIKACHU"),
            vec!["charmander", "bulbasaur", "pikachu"]
        );
        assert_eq!(
            clean_input("explore\tpastoria-city-area"),
            vec!["explore", "pastoria-city-area"]
        );
        assert!(clean_input("   ").is_empty());
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut repl = repl();

        let reply = repl.handle_line("fly").await;

        assert_eq!(reply.lines, vec!["Unknown command"]);
        assert_eq!(reply.control, Control::Continue);
    }

    #[tokio::test]
    async fn test_blank_line_is_ignored() {
        let mut repl = repl();
        assert_eq!(repl.handle_line("   ").await, Reply::default());
    }

    #[tokio::test]
    async fn test_exit_signals_termination() {
        let mut repl = repl();

        let reply = repl.handle_line("EXIT").await;

        assert_eq!(reply.control, Control::Exit);
        assert_eq!(reply.lines, vec!["Closing the Pokedex... Goodbye!"]);
    }

    #[tokio::test]
    async fn test_handler_error_is_printed() {
        let mut repl = repl();

        let reply = repl.handle_line("mapb").await;

        assert_eq!(reply.lines, vec!["you're on the first page"]);
        assert_eq!(reply.control, Control::Continue);
    }

    #[tokio::test]
    async fn test_run_stops_at_exit() {
        let mut repl = repl();
        let input: &[u8] = b"help\nfly\nexit\nmap\n";
        let mut output = Vec::new();

        repl.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Pokedex > Welcome to the Pokedex!"));
        assert!(text.contains("map: Displays the next page of location areas."));
        assert!(text.contains("Pokedex > Unknown command\n"));
        assert!(text.ends_with("Pokedex > Closing the Pokedex... Goodbye!\n"));
        assert!(!repl.session().paged, "map after exit must not run");
    }

    #[tokio::test]
    async fn test_run_survives_invalid_utf8_line() {
        let mut repl = repl();
        let input: &[u8] = b"caf\xe9\npokedex\nexit\n";
        let mut output = Vec::new();

        repl.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Pokedex > Unknown command\n\
             Pokedex > Your Pokedex is empty. Try catching something!\n\
             Pokedex > Closing the Pokedex... Goodbye!\n"
        );
    }

    #[tokio::test]
    async fn test_run_ends_cleanly_at_eof() {
        let mut repl = repl();
        let input: &[u8] = b"pokedex\n";
        let mut output = Vec::new();

        repl.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Pokedex > Your Pokedex is empty. Try catching something!\nPokedex > \n"
        );
    }
}
