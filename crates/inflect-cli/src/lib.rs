// inflect-cli: shared option parsing, logging setup and output for the
// inflect-singular and inflect-plural tools.

use std::io::{self, BufRead, Write};
use std::process;

use inflect_core::{Inflection, Word, WordView};
use inflect_en::InflectionEngine;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing` directives).
pub const LOG_ENV: &str = "INFLECT_LOG";

/// Filter used when `INFLECT_LOG` is unset or invalid.
const DEFAULT_LOG: &str = "warn";

/// Candidate separator used when `--separator` is not given.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Errors reported by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("failed to read stdin: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
    #[error("{0} input line(s) were not valid UTF-8 and were skipped")]
    InvalidInput(usize),
}

/// Which way a tool converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Singular,
    Plural,
}

impl Direction {
    pub fn tool_name(self) -> &'static str {
        match self {
            Direction::Singular => "inflect-singular",
            Direction::Plural => "inflect-plural",
        }
    }

    pub fn inflect<W: WordView>(self, engine: &InflectionEngine<'_>, word: &W) -> Inflection<W> {
        match self {
            Direction::Singular => engine.singularize_word(word),
            Direction::Plural => engine.pluralize_word(word),
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Print only the first candidate.
    pub first: bool,
    /// Print only the candidates, not the input word.
    pub quiet: bool,
    pub separator: String,
    pub help: bool,
    /// Words given on the command line. Empty means read stdin.
    pub words: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            first: false,
            quiet: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            help: false,
            words: Vec::new(),
        }
    }
}

/// Parse command-line arguments (without the program name).
///
/// Anything starting with `-` is an option until a lone `--`; after it every
/// argument is a word.
pub fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            options.words.extend(iter.by_ref().cloned());
            break;
        }
        if let Some(val) = arg.strip_prefix("--separator=") {
            options.separator = val.to_string();
            continue;
        }
        match arg.as_str() {
            "-f" | "--first" => options.first = true,
            "-q" | "--quiet" => options.quiet = true,
            "-h" | "--help" => options.help = true,
            "-s" | "--separator" => {
                let Some(val) = iter.next() else {
                    return Err(CliError::MissingValue(arg.clone()));
                };
                options.separator = val.clone();
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CliError::UnknownOption(arg.clone()));
            }
            _ => options.words.push(arg.clone()),
        }
    }

    Ok(options)
}

/// Help text for one of the tools.
pub fn usage(direction: Direction) -> String {
    let name = direction.tool_name();
    let what = match direction {
        Direction::Singular => "singular",
        Direction::Plural => "plural",
    };
    let mut invariant: Vec<String> = InflectionEngine::english().uninflected().words().collect();
    invariant.sort();
    let invariant = invariant.join(", ");
    format!(
        "{name}: Print the {what} form(s) of English words.\n\
         \n\
         Usage: {name} [OPTIONS] [WORD...]\n\
         \n\
         Words are read from the arguments, or one per line from stdin when\n\
         none are given. Each output line is WORD<TAB>CANDIDATES; ambiguous\n\
         words list every candidate in rule order. Lines that are not valid\n\
         UTF-8 are reported on stderr and skipped, and the exit code is 1.\n\
         \n\
         Words that never change: {invariant}\n\
         \n\
         Options:\n\
         \x20 -f, --first             Print only the first candidate\n\
         \x20 -s, --separator SEP     Candidate separator (default \"{DEFAULT_SEPARATOR}\")\n\
         \x20 -q, --quiet             Print only the candidates\n\
         \x20 -h, --help              Print this help\n\
         \n\
         Environment:\n\
         \x20 {LOG_ENV}              Log filter, e.g. \"trace\" (default \"{DEFAULT_LOG}\")\n"
    )
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Format one output line (without the trailing newline).
pub fn format_line<W: AsRef<str>>(word: &str, inflection: &Inflection<W>, options: &Options) -> String {
    let candidates = if options.first {
        inflection.first().map(|w| w.as_ref().to_owned()).unwrap_or_default()
    } else {
        let all: Vec<&str> = inflection.iter().map(AsRef::as_ref).collect();
        all.join(&options.separator)
    };
    if options.quiet {
        candidates
    } else {
        format!("{word}\t{candidates}")
    }
}

/// Counts reported by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Words inflected and written.
    pub words: usize,
    /// Input lines skipped because they were not valid UTF-8.
    pub invalid_lines: usize,
}

/// Inflect the words in `options`, or every non-blank line of `input` when
/// none were given, writing one line per word to `out`.
///
/// Input lines are validated one at a time. A line that is not UTF-8 is
/// reported to `diagnostics` with its line number and skipped; the lines
/// after it are still processed. Surrounding ASCII whitespace is trimmed.
pub fn run<R: BufRead, W: Write, D: Write>(
    direction: Direction,
    options: &Options,
    input: R,
    mut out: W,
    mut diagnostics: D,
) -> Result<RunSummary, CliError> {
    let engine = InflectionEngine::english();
    let mut summary = RunSummary::default();

    let mut emit = |word: &Word, out: &mut W| -> Result<(), CliError> {
        let inflection = direction.inflect(&engine, word);
        if inflection.is_ambiguous() {
            tracing::debug!(word = word.as_str(), candidates = inflection.len(), "ambiguous word");
        }
        writeln!(out, "{}", format_line(word.as_str(), &inflection, options))
            .map_err(CliError::Write)?;
        summary.words += 1;
        Ok(())
    };

    if options.words.is_empty() {
        let mut invalid_lines = 0;
        for (index, line) in input.split(b'\n').enumerate() {
            let line = line.map_err(CliError::Read)?;
            let bytes = line.trim_ascii();
            if bytes.is_empty() {
                continue;
            }
            match Word::from_utf8(bytes) {
                Ok(word) => emit(&word, &mut out)?,
                Err(e) => {
                    invalid_lines += 1;
                    tracing::warn!(line = index + 1, error = %e, "skipping input line");
                    writeln!(diagnostics, "error: line {}: {e}", index + 1)
                        .map_err(CliError::Write)?;
                }
            }
        }
        summary.invalid_lines = invalid_lines;
    } else {
        for word in &options.words {
            emit(&Word::new(word.as_str()), &mut out)?;
        }
    }

    out.flush().map_err(CliError::Write)?;
    tracing::info!(
        tool = direction.tool_name(),
        words = summary.words,
        invalid_lines = summary.invalid_lines,
        "done"
    );
    Ok(summary)
}

/// Shared `main` of both tools.
pub fn main_with(direction: Direction) {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args).unwrap_or_else(|e| fatal(&e.to_string()));

    if options.help {
        print!("{}", usage(direction));
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let out = io::BufWriter::new(stdout.lock());
    match run(direction, &options, stdin.lock(), out, stderr.lock()) {
        Ok(summary) if summary.invalid_lines > 0 => {
            fatal(&CliError::InvalidInput(summary.invalid_lines).to_string())
        }
        Ok(_) => {}
        Err(e) => fatal(&e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Process helpers
// ---------------------------------------------------------------------------

/// Install a stderr `tracing` subscriber filtered by `INFLECT_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_to_string(direction: Direction, options: &Options, input: &str) -> String {
        let mut out = Vec::new();
        run(direction, options, input.as_bytes(), &mut out, io::sink()).unwrap();
        String::from_utf8(out).unwrap()
    }

    // -- Option parsing --

    #[test]
    fn defaults() {
        let o = parse_args(&[]).unwrap();
        assert_eq!(o, Options::default());
        assert_eq!(o.separator, ",");
    }

    #[test]
    fn flags_and_words() {
        let o = parse_args(&args(&["-f", "mice", "--quiet", "geese"])).unwrap();
        assert!(o.first);
        assert!(o.quiet);
        assert_eq!(o.words, ["mice", "geese"]);
    }

    #[test]
    fn separator_forms() {
        assert_eq!(parse_args(&args(&["-s", "|"])).unwrap().separator, "|");
        assert_eq!(parse_args(&args(&["--separator", " "])).unwrap().separator, " ");
        assert_eq!(parse_args(&args(&["--separator=;"])).unwrap().separator, ";");
    }

    #[test]
    fn separator_without_value_is_an_error() {
        let err = parse_args(&args(&["-s"])).unwrap_err();
        assert!(matches!(err, CliError::MissingValue(ref o) if o == "-s"));
        assert_eq!(err.to_string(), "-s requires a value");
    }

    #[test]
    fn unknown_option_is_an_error() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown option: --frobnicate");
    }

    #[test]
    fn double_dash_ends_options() {
        let o = parse_args(&args(&["--", "-x", "--help"])).unwrap();
        assert!(!o.help);
        assert_eq!(o.words, ["-x", "--help"]);
    }

    #[test]
    fn help_flag() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
        assert!(usage(Direction::Plural).starts_with("inflect-plural:"));
        assert!(usage(Direction::Singular).contains(LOG_ENV));
    }

    #[test]
    fn help_lists_words_that_never_change() {
        let text = usage(Direction::Plural);
        assert!(text.contains(
            "Words that never change: data, deer, feedback, fish, info, moose, series, sheep, species"
        ));
    }

    // -- Output --

    #[test]
    fn format_line_variants() {
        let amb = Inflection::Multiple(vec!["roofs".to_string(), "rooves".to_string()]);
        let mut o = Options::default();
        assert_eq!(format_line("roof", &amb, &o), "roof\troofs,rooves");
        o.separator = " | ".to_string();
        assert_eq!(format_line("roof", &amb, &o), "roof\troofs | rooves");
        o.first = true;
        assert_eq!(format_line("roof", &amb, &o), "roof\troofs");
        o.quiet = true;
        assert_eq!(format_line("roof", &amb, &o), "roofs");
    }

    // -- Running --

    #[test]
    fn words_from_arguments() {
        let o = parse_args(&args(&["child", "Roof"])).unwrap();
        let out = run_to_string(Direction::Plural, &o, "ignored\n");
        assert_eq!(out, "child\tchildren\nRoof\tRoofs,Rooves\n");
    }

    #[test]
    fn words_from_input_skip_blank_lines() {
        let o = Options::default();
        let out = run_to_string(Direction::Singular, &o, "mice\n\n  \n  geese  \nsheep\n");
        assert_eq!(out, "mice\tmouse\ngeese\tgoose\nsheep\tsheep\n");
    }

    #[test]
    fn run_reports_the_word_count() {
        let o = Options::default();
        let summary =
            run(Direction::Singular, &o, "a\nb\n\nc\n".as_bytes(), io::sink(), io::sink()).unwrap();
        assert_eq!(summary, RunSummary { words: 3, invalid_lines: 0 });
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let out = run_to_string(Direction::Plural, &Options::default(), "child\r\nbox\r\n");
        assert_eq!(out, "child\tchildren\nbox\tboxes\n");
    }

    // -- Invalid input --

    #[test]
    fn invalid_utf8_line_is_skipped_and_reported() {
        let input: &[u8] = b"mice\n\xFFbad\ngeese\n";
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();
        let summary = run(
            Direction::Singular,
            &Options::default(),
            input,
            &mut out,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "mice\tmouse\ngeese\tgoose\n");
        assert_eq!(summary, RunSummary { words: 2, invalid_lines: 1 });
        let report = String::from_utf8(diagnostics).unwrap();
        assert!(report.starts_with("error: line 2: word is not valid UTF-8"), "{report}");
    }

    #[test]
    fn invalid_input_error_message() {
        assert_eq!(
            CliError::InvalidInput(2).to_string(),
            "2 input line(s) were not valid UTF-8 and were skipped"
        );
    }
}
