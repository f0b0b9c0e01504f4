use {
    crate::common::{debug_println, DEBUG},
    anyhow::Context,
    clap::{Parser, Subcommand, ValueEnum},
    primality::PrimeChecker,
    std::{
        io::{BufRead, Write},
        sync::atomic::Ordering,
    },
};

#[derive(Debug, Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether numbers are prime
    Check {
        /// Numbers to check [leave unspecified to read one per line from stdin]
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,

        #[command(flatten)]
        check_options: CheckOptions,
    },
    /// Print the smallest u with u*u >= n for each number
    Bound {
        /// Numbers to bound [leave unspecified to read one per line from stdin]
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// `true` or `false`
    Bool,
    /// `Prime.` or `Composite.`
    Word,
}

#[derive(Debug, Parser)]
struct CheckOptions {
    /// How to print each verdict
    #[arg(long, default_value = "bool")]
    format: Format,
}

#[derive(Clone, Copy, Debug)]
enum Query {
    Check(Format),
    Bound,
}

impl Query {
    fn answer(self, checker: PrimeChecker) -> String {
        match self {
            Query::Check(format) => {
                let prime = checker.is_prime();
                debug_println!(
                    "{checker}: trying divisors up to {}, prime: {prime}",
                    checker.upper_bound()
                );
                match (format, prime) {
                    (Format::Bool, _) => prime.to_string(),
                    (Format::Word, true) => "Prime.".to_owned(),
                    (Format::Word, false) => "Composite.".to_owned(),
                }
            }
            Query::Bound => checker.upper_bound().to_string(),
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    let (numbers, query) = match cli.command {
        Command::Check {
            numbers,
            check_options,
        } => (numbers, Query::Check(check_options.format)),
        Command::Bound { numbers } => (numbers, Query::Bound),
    };
    let mut stdout = std::io::stdout().lock();
    if numbers.is_empty() {
        answer_lines(std::io::stdin().lock(), query, &mut stdout)
    } else {
        answer_args(&numbers, query, &mut stdout)
    }
}

fn answer_args(numbers: &[String], query: Query, output: &mut impl Write) -> anyhow::Result<()> {
    for (i, number) in numbers.iter().enumerate() {
        let checker = number
            .parse::<PrimeChecker>()
            .with_context(|| format!("argument {}", i + 1))?;
        writeln!(output, "{}", query.answer(checker))?;
    }
    Ok(())
}

fn answer_lines(input: impl BufRead, query: Query, output: &mut impl Write) -> anyhow::Result<()> {
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let checker = line
            .parse::<PrimeChecker>()
            .with_context(|| format!("line {}", i + 1))?;
        writeln!(output, "{}", query.answer(checker))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        clap::CommandFactory,
        primality::{InvalidArgument, Reason},
        rstest::rstest,
        std::path::PathBuf,
    };

    fn run_case(mut path: PathBuf, query: Query) {
        let input = std::fs::read_to_string(&path).unwrap();
        path.set_extension("stdout");
        let expected_output = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read expected output file at path {path:?}: {e}")
        });
        let mut output = Vec::new();
        answer_lines(input.as_bytes(), query, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected_output);
    }

    #[rstest]
    fn check_bool(#[files("cases/check/*.stdin")] path: PathBuf) {
        run_case(path, Query::Check(Format::Bool));
    }

    #[rstest]
    fn check_word(#[files("cases/check_word/*.stdin")] path: PathBuf) {
        run_case(path, Query::Check(Format::Word));
    }

    #[rstest]
    fn bound(#[files("cases/bound/*.stdin")] path: PathBuf) {
        run_case(path, Query::Bound);
    }

    #[test]
    fn answers_arguments_in_order() {
        let numbers = ["37", "36", "2"].map(String::from);
        let mut output = Vec::new();
        answer_args(&numbers, Query::Check(Format::Bool), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "true\nfalse\ntrue\n");
    }

    #[rstest]
    #[case("7\n-4\n9\n", "line 2", Reason::Negative)]
    #[case("7\n\n4.5\n", "line 3", Reason::NotAnInteger)]
    fn stops_at_first_invalid_line(
        #[case] input: &str,
        #[case] location: &str,
        #[case] reason: Reason,
    ) {
        let mut output = Vec::new();
        let err = answer_lines(input.as_bytes(), Query::Check(Format::Bool), &mut output)
            .unwrap_err();
        assert_eq!(err.to_string(), location);
        assert_eq!(err.downcast_ref::<InvalidArgument>().unwrap().reason, reason);
        assert_eq!(String::from_utf8(output).unwrap(), "true\n");
    }

    #[test]
    fn names_the_bad_argument() {
        let numbers = ["5", "five"].map(String::from);
        let err = answer_args(&numbers, Query::Bound, &mut Vec::new()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            r#"argument 2: invalid argument "five": not an integer"#
        );
    }

    #[test]
    fn parses_negative_numbers_as_values() {
        let cli = Cli::try_parse_from(["prime_checker", "check", "--format", "word", "-3"]).unwrap();
        let Command::Check {
            numbers,
            check_options,
        } = cli.command
        else {
            panic!("expected check command");
        };
        assert_eq!(numbers, ["-3"]);
        assert!(matches!(check_options.format, Format::Word));
    }

    #[test]
    fn bound_help_describes_the_square_root_bound() {
        let command = Cli::command();
        let about = command
            .find_subcommand("bound")
            .and_then(|bound| bound.get_about())
            .unwrap()
            .to_string();
        assert_eq!(about, "Print the smallest u with u*u >= n for each number");
    }
}
