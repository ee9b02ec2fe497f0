//! Command-line trainer: fit a tree on a training file, persist the
//! readable model, and report accuracy on a test file.
use arbol::reader::read_data_file;
use arbol::{ArbolError, DecisionTree};
use clap::Parser;
use log::info;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Training data file: CSV with a header row, 0/1 values, class label
    /// in the last column
    train: String,
    /// Test data file in the same layout
    test: String,
    /// Output path for the human-readable model text
    model: String,
    /// Also save the fitted tree as json to this path
    #[arg(long)]
    json: Option<String>,
}

fn run(args: &Args) -> Result<(), ArbolError> {
    let train = read_data_file(&args.train)?;
    info!(
        "loaded {} training rows with {} attributes",
        train.n_rows(),
        train.n_attributes()
    );

    let tree = DecisionTree::fit(&train)?;
    info!(
        "fitted a tree with {} leaves at depth {}",
        tree.root.n_leaves(),
        tree.root.depth()
    );
    tree.save_text(&args.model)?;
    if let Some(path) = &args.json {
        tree.save(path)?;
    }

    let test = read_data_file(&args.test)?;
    let (correct, total) = tree.evaluate(&test);
    println!("Percentage Correct = ({correct}/{total})");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
