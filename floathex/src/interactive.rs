/*!
Line-oriented interactive front end.

Each input line is one request against a [`Session`]. Failures are reported
as messages and never end the loop.
*/

use anyhow::Result;
use floatcodec::float_text::accepts_prefix;
use floatcodec::{Endianness, Precision, Session};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "\
commands:
  mode <half|single|double>   select precision (resets fields)
  endian <big|little>         select byte order (resets fields)
  float <value>               convert a decimal value to hex
  hex <digits>                convert hex digits to a decimal value
  check <text>                test text against the float input gate
  show                        print the current selection and fields
  help                        print this message
  quit                        leave";

/// What the loop should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading
    Reply(String),
    /// Stop reading
    Quit,
}

/// Interactive console state
pub struct Console {
    session: Session,
}

impl Console {
    /// Create a console driving `session`
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle a single input line
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let (command, arg) = line
            .split_once(char::is_whitespace)
            .map(|(command, arg)| (command, arg.trim()))
            .unwrap_or((line, ""));

        debug!(command, arg, "console command");

        let reply = match command.to_lowercase().as_str() {
            "" => return Outcome::Reply(String::new()),
            "quit" | "exit" => return Outcome::Quit,
            "help" | "?" => HELP.to_string(),
            "show" => self.show(),
            "mode" => match arg.parse::<Precision>() {
                Ok(precision) => {
                    self.session.set_mode(precision);
                    self.show()
                }
                Err(e) => format!("error: {e}"),
            },
            "endian" => match arg.parse::<Endianness>() {
                Ok(endianness) => {
                    self.session.set_endianness(endianness);
                    self.show()
                }
                Err(e) => format!("error: {e}"),
            },
            "float" => match self.session.float_to_hex(arg) {
                Ok(hex) => format!("hex: {hex}"),
                Err(e) => format!("error: {e}"),
            },
            "hex" => match self.session.hex_to_float(arg) {
                Ok(float) => format!("float: {float}"),
                Err(e) => format!("error: {e}"),
            },
            "check" => {
                if accepts_prefix(arg) {
                    "accepted".to_string()
                } else {
                    "rejected".to_string()
                }
            }
            other => format!("error: unknown command {other:?} (try \"help\")"),
        };

        Outcome::Reply(reply)
    }

    fn show(&self) -> String {
        format!(
            "mode: {}  endian: {}  float: {}  hex: {}",
            self.session.precision(),
            self.session.endianness(),
            self.session.float_text(),
            self.session.hex_text()
        )
    }

    /// Read commands from `input` until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("interactive session started");
        writeln!(output, "{}", self.show())?;

        for line in input.lines() {
            match self.handle_line(&line?) {
                Outcome::Reply(reply) if reply.is_empty() => {}
                Outcome::Reply(reply) => writeln!(output, "{reply}")?,
                Outcome::Quit => break,
            }
            output.flush()?;
        }

        info!("interactive session ended");
        Ok(())
    }
}
