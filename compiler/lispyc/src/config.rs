//! Command-line arguments and REPL settings.

/// Version printed by the banner and `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive loop over stdin.
    Repl,
    /// Evaluate one expression and exit.
    Eval(String),
    /// Print the parse tree of one expression and exit.
    Parse(String),
    Help,
    Version,
}

/// A parsed command line: the command plus global flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub color: bool,
}

impl Invocation {
    /// Parse arguments (without the program name).
    ///
    /// Flags may appear anywhere. An `eval`/`parse` expression may be split
    /// over several arguments; they are joined with spaces, so
    /// `lispy eval + 1 2` works without quoting.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut color = true;
        let mut words = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--no-color" => color = false,
                "-h" | "--help" => {
                    return Ok(Invocation {
                        command: Command::Help,
                        color,
                    })
                }
                "-V" | "--version" => {
                    return Ok(Invocation {
                        command: Command::Version,
                        color,
                    })
                }
                flag if flag.starts_with("--") => return Err(format!("unknown option `{flag}`")),
                word => words.push(word),
            }
        }

        let command = match words.split_first() {
            None => Command::Repl,
            Some((&"eval", rest)) => Command::Eval(expression(rest, "eval")?),
            Some((&"parse", rest)) => Command::Parse(expression(rest, "parse")?),
            Some((&"help", _)) => Command::Help,
            Some((&"version", _)) => Command::Version,
            Some((other, _)) => return Err(format!("unknown command `{other}`")),
        };

        Ok(Invocation { command, color })
    }
}

fn expression(words: &[&str], command: &str) -> Result<String, String> {
    if words.is_empty() {
        Err(format!("`{command}` needs an expression"))
    } else {
        Ok(words.join(" "))
    }
}

/// Settings for the interactive loop and diagnostic output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// Lines printed once before the first prompt.
    pub banner: Vec<String>,
    /// Colored diagnostics.
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "> ".to_string(),
            banner: vec![
                format!("Lispy version {VERSION}"),
                "Press Ctrl+C to exit".to_string(),
                String::new(),
            ],
            color: true,
        }
    }
}

impl ReplConfig {
    /// Build the config for an invocation, honoring `NO_COLOR`.
    pub fn for_invocation(invocation: &Invocation) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        ReplConfig {
            color: invocation.color && !no_color_env,
            ..ReplConfig::default()
        }
    }

    /// Config for tests and piped use: no banner, no prompt, no color.
    pub fn quiet() -> Self {
        ReplConfig {
            prompt: String::new(),
            banner: Vec::new(),
            color: false,
        }
    }
}
