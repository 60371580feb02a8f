//! Line commands for the interactive `browse` session.
//!
//! Anything that doesn't start with `:` is query text. Commands:
//! `:add <keyword>`, `:rm <keyword>`, `:pick <n>`, `:mode any|all`,
//! `:clear`, `:help`, `:q`.

use anyhow::{anyhow, bail, Result};
use pipeline::CombinationMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Replace the query text (may be empty)
    Query(String),
    Add(String),
    Remove(String),
    /// Select the n-th (1-based) current suggestion
    Pick(usize),
    Mode(CombinationMode),
    Clear,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(ReplCommand::Query(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name {
        "q" | "quit" => ReplCommand::Quit,
        "help" | "h" => ReplCommand::Help,
        "clear" => ReplCommand::Clear,
        "add" | "rm" if arg.is_empty() => bail!(":{} needs a keyword", name),
        "add" => ReplCommand::Add(arg.to_string()),
        "rm" => ReplCommand::Remove(arg.to_string()),
        "pick" => {
            let n: usize = arg
                .parse()
                .map_err(|_| anyhow!(":pick needs a suggestion number, got {:?}", arg))?;
            if n == 0 {
                bail!("suggestions are numbered from 1");
            }
            ReplCommand::Pick(n)
        }
        "mode" => ReplCommand::Mode(parse_mode(arg)?),
        other => bail!("unknown command :{} (try :help)", other),
    };
    Ok(command)
}

pub fn parse_mode(s: &str) -> Result<CombinationMode> {
    match s.to_ascii_lowercase().as_str() {
        "any" => Ok(CombinationMode::Any),
        "all" => Ok(CombinationMode::All),
        _ => Err(anyhow!("mode must be `any` or `all`, got {:?}", s)),
    }
}

pub const HELP: &str = "\
  <text>          update the query and show suggestions
  :pick <n>       add suggestion n as a keyword
  :add <keyword>  add a keyword directly
  :rm <keyword>   remove a keyword
  :mode any|all   how keywords combine
  :clear          remove all keywords
  :q              quit";
