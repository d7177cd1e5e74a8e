use clap::{App, Arg, ArgMatches};
use decision_tree::evaluate::{error_rate, Metrics};
use decision_tree::logging::{log, LogLevel};
use decision_tree::render::render;
use decision_tree::{table, Dataset, DecisionTree, Result, TrainConfig};
use std::fs;
use std::process;

const ARGS: [(&str, &str); 6] = [
    ("train-input", "labeled table to grow the tree from"),
    ("test-input", "table to predict"),
    ("max-depth", "maximum tree depth, 0 for a single leaf"),
    ("train-out", "where to write training-set predictions"),
    ("test-out", "where to write test-set predictions"),
    ("metrics-out", "where to write train and test error rates"),
];

fn main() {
    let app = App::new("decision tree")
        .version("1.0")
        .author("Pearce Keesling")
        .about("Grows a binary decision tree by information gain and scores it");
    let matches = ARGS
        .iter()
        .enumerate()
        .fold(app, |app, (index, (name, help))| {
            app.arg(
                Arg::with_name(*name)
                    .help(*help)
                    .required(true)
                    .index(index as u64 + 1),
            )
        })
        .get_matches();

    if let Err(err) = run(&matches, LogLevel::from_env()) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches, level: LogLevel) -> Result<()> {
    let arg = |name| value(matches, name);
    let config: TrainConfig = arg("max-depth").parse()?;
    let train = table::read(arg("train-input"))?;
    let tree = DecisionTree::train(&train, config)?;
    log(level, LogLevel::Normal, render(&tree).trim_end());

    let train_error = predict_into(&tree, &train, arg("train-out"), level)?;
    let test = table::read(arg("test-input"))?;
    let test_error = predict_into(&tree, &test, arg("test-out"), level)?;

    let metrics = Metrics {
        train_error,
        test_error,
    };
    fs::write(arg("metrics-out"), metrics.to_string())?;
    log(
        level,
        LogLevel::Verbose,
        &format!("wrote {}", arg("metrics-out")),
    );
    Ok(())
}

// Every positional is required, so clap has already rejected missing ones.
fn value<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.value_of(name).unwrap_or_default()
}

/// Writes one predicted label per line and returns the error rate against
/// the table's own label column.
fn predict_into(tree: &DecisionTree, data: &Dataset, path: &str, level: LogLevel) -> Result<f64> {
    let predicted = tree.predict(data.records());
    let contents: String = predicted.iter().map(|label| format!("{}\n", label)).collect();
    fs::write(path, contents)?;

    let actual: Vec<&str> = data.labels().collect();
    let rate = error_rate(predicted.as_slice(), actual.as_slice())?;
    log(
        level,
        LogLevel::Verbose,
        &format!("wrote {} predictions to {}, error {}", predicted.len(), path, rate),
    );
    Ok(rate)
}
