//! Legacy plain-text weight persistence.
//!
//! Layout, one decimal value per line: input unit count, hidden unit
//! count, every input-stage mask element in (unit, row, column) order,
//! every hidden-stage weight in (unit, input) order, every output-stage
//! weight in (unit, hidden) order. The output unit count is not stored —
//! it is always the fixed ten. No header, no version, no checksum.

use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;
use std::str::FromStr;

use crate::data::image::IMAGE_SIZE;
use crate::error::{DigitnetError, Result};
use crate::network::config::EngineConfig;
use crate::network::engine::NetworkEngine;

/// Writes the engine's weights as newline-separated decimal text.
pub fn save<W: Write>(engine: &NetworkEngine, mut dest: W) -> Result<()> {
    writeln!(dest, "{}", engine.config.input_units)?;
    writeln!(dest, "{}", engine.config.hidden_units)?;

    for mask in &engine.input.masks {
        for row in 0..mask.rows {
            for col in 0..mask.cols {
                writeln!(dest, "{}", mask.get(row, col))?;
            }
        }
    }
    for i in 0..engine.hidden.units {
        for j in 0..engine.hidden.fan_in {
            writeln!(dest, "{}", engine.hidden.weights.get(i, j))?;
        }
    }
    for i in 0..engine.output.units {
        for j in 0..engine.output.fan_in {
            writeln!(dest, "{}", engine.output.weights.get(i, j))?;
        }
    }
    Ok(())
}

pub fn save_file(engine: &NetworkEngine, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    save(engine, &mut writer)?;
    writer.flush()?;
    info!("weights saved to {}", path.display());
    Ok(())
}

/// Reads a snapshot and builds a fresh engine at the persisted shape.
///
/// Unit counts come from the snapshot's first two lines; every other
/// hyperparameter is taken from `defaults`. A missing or non-numeric line
/// fails the whole load — the caller never sees a half-filled engine.
pub fn load<R: BufRead>(source: R, defaults: EngineConfig) -> Result<NetworkEngine> {
    let mut lines = source.lines();

    let input_units: usize = next_value(&mut lines)?;
    let hidden_units: usize = next_value(&mut lines)?;
    let config = EngineConfig {
        input_units,
        hidden_units,
        ..defaults
    };
    let mut engine = NetworkEngine::new(config);

    for i in 0..input_units {
        for row in 0..IMAGE_SIZE {
            for col in 0..IMAGE_SIZE {
                engine.input.masks[i].set(row, col, next_value(&mut lines)?);
            }
        }
    }
    for i in 0..hidden_units {
        for j in 0..input_units {
            engine.hidden.weights.set(i, j, next_value(&mut lines)?);
        }
    }
    for i in 0..engine.output.units {
        for j in 0..hidden_units {
            engine.output.weights.set(i, j, next_value(&mut lines)?);
        }
    }

    Ok(engine)
}

pub fn load_file(path: &Path, defaults: EngineConfig) -> Result<NetworkEngine> {
    let file = File::open(path)?;
    let engine = load(BufReader::new(file), defaults)?;
    info!("weights loaded from {}", path.display());
    Ok(engine)
}

fn next_value<T: FromStr, B: BufRead>(lines: &mut Lines<B>) -> Result<T> {
    let line = lines.next().ok_or_else(|| DigitnetError::MalformedSnapshot {
        reason: "unexpected end of snapshot".into(),
    })??;
    line.trim()
        .parse()
        .map_err(|_| DigitnetError::MalformedSnapshot {
            reason: format!("not a number: '{line}'"),
        })
}
