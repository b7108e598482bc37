use std::io::{self, BufRead, Write};

use crate::{
    completion::{CompletionClient, Result, Transport},
    config::{DEFAULT_BOT_LABEL, DEFAULT_USER_LABEL},
};

pub struct ChatRepl<T: Chat> {
    chat: T,
    display_user: String,
    display_bot: String,
}

pub trait Chat {
    fn chat(&mut self, message: &str) -> Result<String>;
}

impl<T: Transport> Chat for CompletionClient<T> {
    fn chat(&mut self, message: &str) -> Result<String> {
        self.complete(message)
    }
}

impl<T: Chat> ChatRepl<T> {
    const GREETING: &'static str = "Welcome to the CosmosRP ChatBot! Type 'exit' to quit.";
    const FAREWELL: &'static str = "ChatBot terminated.";
    const EXIT: &'static str = "exit";

    pub fn new(chat: T) -> Self {
        Self {
            chat,
            display_user: DEFAULT_USER_LABEL.to_string(),
            display_bot: DEFAULT_BOT_LABEL.to_string(),
        }
    }
    pub fn set_user_name(&mut self, name: &str) {
        self.display_user = name.to_string();
    }
    pub fn set_bot_display(&mut self, name: &str) {
        self.display_bot = name.to_string();
    }
    pub fn repl(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run(stdin.lock(), io::stdout().lock(), io::stderr().lock())
    }
    /// Runs turns until `exit` or end of input. A failed turn is reported on
    /// `err` and the next prompt follows; only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        mut err: E,
    ) -> io::Result<()> {
        writeln!(out, "{}", Self::GREETING)?;
        loop {
            self.user_first(&mut out)?;
            let Some(message) = Self::user_input(&mut input)? else {
                writeln!(out)?;
                break;
            };
            if Self::is_exit(&message) {
                break;
            }
            match self.chat.chat(&message) {
                Ok(reply) => writeln!(out, "{}: {}", self.display_bot, reply)?,
                Err(e) => {
                    tracing::warn!(kind = %e.kind, "turn failed");
                    writeln!(err, "Error while fetching response from the model: {}", e)?;
                }
            }
        }
        writeln!(out, "{}", Self::FAREWELL)?;
        out.flush()
    }
    fn user_first<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}: ", self.display_user)?;
        out.flush()
    }
    fn user_input<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // undecodable bytes become U+FFFD
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
    fn is_exit(message: &str) -> bool {
        message.trim().eq_ignore_ascii_case(Self::EXIT)
    }
}
