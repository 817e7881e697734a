use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Console handle pairing the input and output streams, so interactive
/// flows can be driven by tests with in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process stdio
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The raw output stream, for view functions
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `text` without a trailing newline, flush, and read one answer
    /// line. `None` means the input stream is closed.
    ///
    /// Only the line terminator is stripped: a lone space is a meaningful
    /// answer in editing dialogs and must survive.
    pub fn prompt_opt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Like `prompt_opt`, but a closed input stream reads as an empty
    /// answer (which every dialog treats as "skip")
    pub fn prompt(&mut self, text: &str) -> io::Result<String> {
        Ok(self.prompt_opt(text)?.unwrap_or_default())
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)
    }

    /// Recover the output stream, consuming the console
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}
