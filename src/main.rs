use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use std::io::{self, Read};
use verdict_lang::Operator;
use verdict_lang::cli::{self, CheckOptions, CheckResult, CliError};

#[derive(ClapParser)]
#[command(name = "verdict")]
#[command(about = "Verdict - A rule expression language for evaluating conditions against key-value data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate rules and evaluate them against a data context
    Check {
        /// Rule expressions; several are combined with the joiner
        #[arg(required = true)]
        rules: Vec<String>,

        /// JSON object data context (reads from stdin if not provided)
        #[arg(short, long)]
        data: Option<String>,

        /// Operator joining multiple rules
        #[arg(short, long, value_enum, default_value = "or")]
        joiner: JoinerArg,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the parsed rule tree for inspection
    Ast {
        /// Rule expressions; several are combined with the joiner
        #[arg(required = true)]
        rules: Vec<String>,

        /// Operator joining multiple rules
        #[arg(short, long, value_enum, default_value = "or")]
        joiner: JoinerArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum JoinerArg {
    And,
    Or,
}

impl From<JoinerArg> for Operator {
    fn from(j: JoinerArg) -> Self {
        match j {
            JoinerArg::And => Operator::And,
            JoinerArg::Or => Operator::Or,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            rules,
            data,
            joiner,
            syntax_only,
        } => run_check(rules, data, joiner.into(), syntax_only),
        Commands::Ast { rules, joiner } => match cli::render_ast(&rules, joiner.into()) {
            Ok(tree) => {
                println!("{}", tree);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    rules: Vec<String>,
    data: Option<String>,
    joiner: Operator,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match data {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        rules,
        joiner,
        input,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => println!("{}", output),
    }
    Ok(())
}
