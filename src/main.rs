//! Thin command-line driver around the digitnet library.
//!
//! Dataset download stays outside this binary: the four standard MNIST
//! files (optionally gzip-compressed) must already be present in the data
//! directory.

use std::path::{Path, PathBuf};
use std::process;

use digitnet::data::idx;
use digitnet::network::snapshot;
use digitnet::{evaluate, train, Dataset, EngineConfig, NetworkEngine, Result};

const TRAIN_IMAGES: &str = "train-images-idx3-ubyte";
const TRAIN_LABELS: &str = "train-labels-idx1-ubyte";
const TEST_IMAGES: &str = "t10k-images-idx3-ubyte";
const TEST_LABELS: &str = "t10k-labels-idx1-ubyte";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
    }

    let outcome = match args[1].as_str() {
        "train" if args.len() >= 3 => {
            cmd_train(Path::new(&args[2]), args.get(3).map(String::as_str))
        }
        "test" if args.len() >= 4 => cmd_test(Path::new(&args[2]), Path::new(&args[3])),
        "show" if args.len() >= 4 => match args[3].parse::<usize>() {
            Ok(index) => cmd_show(Path::new(&args[2]), index),
            Err(_) => {
                eprintln!("error: '{}' is not a valid sample index", args[3]);
                process::exit(1);
            }
        },
        _ => usage(&args[0]),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <command>");
    eprintln!("  train <data-dir> [snapshot-out]  - train on the dataset and save weights");
    eprintln!("  test <snapshot> <data-dir>       - evaluate a saved snapshot on the test set");
    eprintln!("  show <data-dir> <index>          - print one training image as ASCII art");
    process::exit(1);
}

/// Resolves a dataset file inside `dir`, preferring the gzip-compressed
/// name when both exist.
fn resolve(dir: &Path, stem: &str) -> PathBuf {
    let gz = dir.join(format!("{stem}.gz"));
    if gz.exists() {
        gz
    } else {
        dir.join(stem)
    }
}

fn load_pair(dir: &Path, images: &str, labels: &str) -> Result<Dataset> {
    Dataset::from_idx_files(&resolve(dir, images), &resolve(dir, labels))
}

fn cmd_train(data_dir: &Path, snapshot_out: Option<&str>) -> Result<()> {
    let training = load_pair(data_dir, TRAIN_IMAGES, TRAIN_LABELS)?;
    let held_out = load_pair(data_dir, TEST_IMAGES, TEST_LABELS)?;
    println!(
        "Training set: {} samples, test set: {} samples",
        training.len(),
        held_out.len()
    );

    let mut engine = NetworkEngine::new(EngineConfig::default());
    println!(
        "Training for {} epochs ({} input units, {} hidden units, lr {}, momentum {})",
        engine.config.epochs,
        engine.config.input_units,
        engine.config.hidden_units,
        engine.config.learning_rate,
        engine.config.momentum
    );

    let history = train(&mut engine, &training, &held_out);
    for stats in &history {
        println!(
            "Epoch {:>3}/{}  train error {:>6.2}%  test error {:>6.2}%  ({} ms)",
            stats.epoch,
            stats.total_epochs,
            stats.train_error_rate * 100.0,
            stats.test_error_rate * 100.0,
            stats.elapsed_ms
        );
    }

    let snapshot_path = PathBuf::from(snapshot_out.unwrap_or("weights.txt"));
    snapshot::save_file(&engine, &snapshot_path)?;
    println!("Weights saved to {}", snapshot_path.display());

    let report_path = snapshot_path.with_extension("json");
    write_report(&report_path, &engine.config, &history)?;
    println!("Training report saved to {}", report_path.display());

    if let Some(last) = history.last() {
        println!("Final test error rate: {:.2}%", last.test_error_rate * 100.0);
    }
    Ok(())
}

fn write_report(
    path: &Path,
    config: &EngineConfig,
    history: &[digitnet::EpochStats],
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let report = serde_json::json!({
        "config": config,
        "epochs": history,
    });
    serde_json::to_writer_pretty(writer, &report)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    Ok(())
}

fn cmd_test(snapshot_path: &Path, data_dir: &Path) -> Result<()> {
    let mut engine = snapshot::load_file(snapshot_path, EngineConfig::default())?;
    let held_out = load_pair(data_dir, TEST_IMAGES, TEST_LABELS)?;

    let report = evaluate(&mut engine, &held_out);
    println!("Correct: {}/{}", report.hits, report.total);
    println!("Error rate: {:.2}%", report.error_rate * 100.0);
    println!("Predicted labels: {}", report.predictions);
    Ok(())
}

fn cmd_show(data_dir: &Path, index: usize) -> Result<()> {
    let images = idx::read_images_file(&resolve(data_dir, TRAIN_IMAGES))?;
    let labels = idx::read_labels_file(&resolve(data_dir, TRAIN_LABELS))?;

    if index >= images.len() {
        eprintln!(
            "error: index {index} out of range (dataset has {} images)",
            images.len()
        );
        process::exit(1);
    }

    println!("{}", images[index].to_ascii());
    println!("Label: {}", labels[index]);
    Ok(())
}
