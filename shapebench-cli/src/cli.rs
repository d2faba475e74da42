//! Command-line surface and run loop

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use shapebench_core::rustybuzz::ttf_parser::Tag;
use shapebench_core::rustybuzz::Variation;
use shapebench_core::{FontData, LineReader, LineShaper, TextSource, ALL_CODEPOINTS_MARKER};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::output::{collect_glyphs, JsonFormatter, OutputFormatter, TextFormatter};

/// Shape lines of text with a font and print the resulting glyphs
#[derive(Debug, Parser)]
#[command(name = "shapebench", version, about)]
pub struct Cli {
    /// Set input text
    #[arg(long, value_name = "string")]
    pub text: Option<String>,

    /// Set input text file name ("-" reads standard input)
    #[arg(long, value_name = "filename")]
    pub text_file: Option<PathBuf>,

    /// Set input Unicode codepoints as hex numbers, or * for every
    /// codepoint the font covers. If no text is provided, standard
    /// input is used.
    #[arg(short = 'u', long, value_name = "list of hex numbers")]
    pub unicodes: Option<String>,

    /// Set text context before each line
    #[arg(long, value_name = "string", default_value = "")]
    pub text_before: String,

    /// Set text context after each line
    #[arg(long, value_name = "string", default_value = "")]
    pub text_after: String,

    /// Set font file name
    #[arg(long, value_name = "filename")]
    pub font_file: PathBuf,

    /// Set face index in a font collection
    #[arg(long, value_name = "index", default_value_t = 0)]
    pub face_index: u32,

    /// Set comma-separated variation axis settings, e.g. "wght=500,wdth=90"
    #[arg(long, value_name = "list")]
    pub variations: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One bracketed glyph list per input line
    Text,
    /// JSON array of lines with glyph metadata
    Json,
}

impl Cli {
    /// Execute the run: resolve input, load the font, shape every line.
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        // Text options resolve (and the text file opens) before the font is
        // touched, so configuration and acquisition errors surface first.
        let source = TextSource::resolve(
            self.text.clone(),
            self.unicodes.clone(),
            self.text_file.clone(),
        )?;
        log::debug!("resolved input source: {source:?}");

        let variations = match &self.variations {
            Some(spec) => parse_variations(spec)?,
            None => Vec::new(),
        };

        let expand_all =
            matches!(&source, TextSource::Codepoints(data) if data.as_slice() == ALL_CODEPOINTS_MARKER);
        let reader = if expand_all {
            None
        } else {
            Some(source.open()?)
        };

        let font = FontData::load_indexed(&self.font_file, self.face_index)?;
        let mut face = font.face()?;
        face.set_variations(&variations);

        let mut reader = match reader {
            Some(reader) => reader,
            // Deferred `*` expansion: every codepoint the font covers.
            None => LineReader::from_bytes(font.covered_text()?.into_bytes()),
        };

        let mut formatter = self.make_formatter()?;
        let mut shaper = LineShaper::new();
        let mut lines = 0usize;
        while let Some(line) = reader.next_line()? {
            let line = String::from_utf8_lossy(line);
            let glyphs = shaper.shape_line_in_context(
                &face,
                &self.text_before,
                &line,
                &self.text_after,
                &[],
                collect_glyphs,
            );
            formatter.format_line(&line, &glyphs)?;
            lines += 1;
        }
        formatter.finish()?;
        log::info!("shaped {lines} line(s) with {}", self.font_file.display());

        Ok(())
    }

    fn make_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("failed creating output file `{}`", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Parse a comma-separated list of `tag=value` variation settings.
///
/// Tags shorter than four characters are space-padded, as in OpenType.
pub fn parse_variations(spec: &str) -> Result<Vec<Variation>> {
    let mut variations = Vec::new();
    for item in spec.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let (tag, value) = item
            .split_once('=')
            .ok_or_else(|| anyhow!("failed parsing variation at: '{item}'"))?;
        let tag = tag.trim();
        if tag.is_empty() || tag.len() > 4 || !tag.is_ascii() {
            return Err(anyhow!("failed parsing variation tag at: '{item}'"));
        }
        let mut bytes = [b' '; 4];
        bytes[..tag.len()].copy_from_slice(tag.as_bytes());

        let value: f32 = value
            .trim()
            .parse()
            .map_err(|_| anyhow!("failed parsing variation value at: '{item}'"))?;

        variations.push(Variation {
            tag: Tag::from_bytes(&bytes),
            value,
        });
    }
    Ok(variations)
}
