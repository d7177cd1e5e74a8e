//! Label entropy and the error of always guessing the majority label.
use clap::{App, Arg};
use decision_tree::evaluate::error_rate;
use decision_tree::information::entropy;
use decision_tree::logging::{log, LogLevel};
use decision_tree::majority::majority_label;
use decision_tree::{table, Result, TreeError};
use std::fs;
use std::process;

fn main() {
    let matches = App::new("inspect")
        .version("1.0")
        .author("Pearce Keesling")
        .about("Reports label entropy and the majority-vote error of a table")
        .arg(
            Arg::with_name("input")
                .help("labeled table")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("where to write the report")
                .required(true)
                .index(2),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    if let Err(err) = run(input, output, LogLevel::from_env()) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(input: &str, output: &str, level: LogLevel) -> Result<()> {
    let data = table::read(input)?;
    let majority = majority_label(&data).ok_or(TreeError::EmptyDataset)?;
    let actual: Vec<&str> = data.labels().collect();
    let guesses = vec![majority.as_str(); actual.len()];

    let report = format!(
        "entropy: {}\nerror: {}\n",
        entropy(&data),
        error_rate(guesses.as_slice(), actual.as_slice())?
    );
    log(level, LogLevel::Verbose, &format!("majority label: {}", majority));
    log(level, LogLevel::Normal, report.trim_end());
    fs::write(output, report)?;
    Ok(())
}
