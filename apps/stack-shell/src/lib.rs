//! # stack-shell Library
//!
//! Drives a [`Stack<String>`](lifo_core::Stack) from line-oriented input.
//!
//! ## Module Organization
//! ```text
//! stack_shell/
//! ├── lib.rs          ◄─── You are here (tracing setup & read loop)
//! ├── config.rs       ◄─── LIFO_* environment configuration
//! ├── command.rs      ◄─── Line → Command
//! ├── session.rs      ◄─── Command → Stack call → Output
//! ├── reply.rs        ◄─── Output / error → text or JSON
//! └── error.rs        ◄─── ShellError + ErrorCode
//! ```
//!
//! ## Example
//! ```rust
//! use stack_shell::{run, ShellConfig};
//!
//! let input = "push 1\npush 2\npop\npop\npop\n";
//! let mut out = Vec::new();
//! let executed = run(input.as_bytes(), &mut out, &ShellConfig::default()).unwrap();
//!
//! assert_eq!(executed, 5);
//! assert!(String::from_utf8(out).unwrap().ends_with("error[EMPTY_STACK]: cannot pop an empty stack\n"));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod reply;
pub mod session;

use std::io::{BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use command::Command;
use reply::render;
use session::Session;

pub use config::{ConfigError, OutputFormat, ShellConfig};
pub use error::{ErrorCode, ShellError, ShellResult};

/// Installs the global tracing subscriber.
///
/// RUST_LOG wins over `config.log_filter`. Output goes to stderr so replies
/// on stdout stay machine-readable.
pub fn init_tracing(config: &ShellConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Reads commands from `input` until EOF or `quit`, writing one reply per
/// command to `output`.
///
/// Stack errors, parse errors and lines that are not valid UTF-8 are
/// reported and the loop continues. Only read or write failures end the
/// loop early.
///
/// ## Returns
/// The number of commands executed (skipped and rejected lines excluded).
pub fn run<R, W>(mut input: R, mut output: W, config: &ShellConfig) -> ShellResult<usize>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(config.initial_capacity);
    let mut executed = 0;
    let mut buf = Vec::new();
    let mut line_no = 0;

    write_prompt(&mut output, config)?;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let parsed = match std::str::from_utf8(&buf) {
            Ok(line) => Command::parse_line(line),
            Err(_) => Err(ShellError::InvalidInput { line: line_no }),
        };

        let command = match parsed {
            Ok(Some(command)) => command,
            Ok(None) => {
                write_prompt(&mut output, config)?;
                continue;
            }
            Err(err) => {
                debug!(line = line_no, error = %err, code = %err.code(), "Rejected input line");
                writeln!(output, "{}", render(&Err(err), config.output))?;
                write_prompt(&mut output, config)?;
                continue;
            }
        };

        let quit = command == Command::Quit;
        let result = session.execute(command);
        executed += 1;

        if let Err(err) = &result {
            debug!(line = line_no, error = %err, code = %err.code(), "Command failed");
        }
        writeln!(output, "{}", render(&result, config.output))?;

        if quit {
            break;
        }
        write_prompt(&mut output, config)?;
    }

    output.flush()?;
    info!(executed, size = session.stack().size(), "Session finished");

    Ok(executed)
}

fn write_prompt<W: Write>(output: &mut W, config: &ShellConfig) -> ShellResult<()> {
    if config.prompt {
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}
