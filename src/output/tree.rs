//! Text formatter for tree output
//!
//! `TreeFormatter` renders the entries it receives from `TreeWalker` as lines
//! of text in one of the three styles, writing as it goes.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Entry, Position, Summary, TreeOutput};

use super::config::{OutputConfig, Style};
use super::utils::{line_prefix, name_suffix};

/// Formatter that writes one line per entry to any `WriteColor` target.
pub struct TreeFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Formatter writing to stdout, colored when `config.use_color` is set.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_name(&mut self, name: &str, is_dir: bool, is_symlink: bool) -> io::Result<()> {
        if is_symlink {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        } else if is_dir {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(self.out, "{}", name)?;
        if is_symlink || is_dir {
            self.out.reset()?;
        }
        Ok(())
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn root(&mut self, name: &str, path: &Path) -> io::Result<()> {
        let style = self.config.style;
        match style {
            Style::Outline => {
                self.write_name(name, true, false)?;
                writeln!(self.out, "/")?;
            }
            Style::Tree | Style::Indent if self.config.show_root => {
                self.write_name(&path.display().to_string(), true, false)?;
                writeln!(self.out)?;
            }
            Style::Tree | Style::Indent => {}
        }
        Ok(())
    }

    fn entry(&mut self, entry: &Entry, position: Position<'_>) -> io::Result<()> {
        let style = self.config.style;
        write!(self.out, "{}", line_prefix(style, position))?;
        self.write_name(&entry.name, entry.is_dir, entry.is_symlink)?;
        writeln!(self.out, "{}", name_suffix(style, entry.is_dir))?;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        if self.config.summary {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} directories, {} files",
                summary.directories, summary.files
            )?;
        }
        self.out.flush()
    }
}
