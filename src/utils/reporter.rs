use {
    indicatif::{ProgressBar, ProgressStyle},
    std::{
        io::{self, Stderr, Stdout, Write},
        time::Duration,
    },
};

/// Receives progress of a bump run.
///
/// `succeed` gets the bare new version; `fail` gets a message ready for display.
pub trait ProgressReporter {
    fn start(&mut self, label: &str);
    fn succeed(&mut self, version: &str);
    fn fail(&mut self, message: &str);
}

/// Picks the reporter for the output mode decided at startup.
pub fn for_mode(interactive: bool) -> Box<dyn ProgressReporter> {
    if interactive {
        Box::new(Spinner::default())
    } else {
        Box::new(PlainReporter::stdio())
    }
}

/// Terminal spinner, used when stdout is attached to a tty.
#[derive(Default)]
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl ProgressReporter for Spinner {
    fn start(&mut self, label: &str) {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"]);
        bar.set_style(style);
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(bar);
    }

    fn succeed(&mut self, version: &str) {
        let message = format!("Bumped version tag to {version}");
        match self.bar.take() {
            Some(bar) => bar.finish_with_message(message),
            None => println!("✔ {message}"),
        }
    }

    fn fail(&mut self, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        eprintln!("✖ {message}");
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}

/// Plain output for pipes and scripts: the new version alone on stdout,
/// failures on stderr.
pub struct PlainReporter<O, E> {
    out: O,
    err: E,
}

impl PlainReporter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> PlainReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ProgressReporter for PlainReporter<O, E> {
    fn start(&mut self, _label: &str) {}

    fn succeed(&mut self, version: &str) {
        // nothing useful can be reported if stdout itself is gone
        let _ = self.out.write_all(version.as_bytes());
        let _ = self.out.flush();
    }

    fn fail(&mut self, message: &str) {
        let _ = writeln!(self.err, "{message}");
    }
}
