//! Training dataset generation from a directory of match logs.
//!
//! Lists the match documents directly inside an input directory (no
//! recursion), encodes each one into samples, and collects them in document
//! order. Documents can be encoded concurrently on a rayon pool; the result
//! is the same as a sequential run. Progress goes to stderr.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::document::read_document;
use crate::encoding::{encode_match, EncodeError, FeatureVector, Label, Sample};

/// Errors that can occur while building a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to list '{path}': {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },

    #[error("failed to write samples: {0}")]
    Write(#[source] io::Error),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// What to do when a document cannot be read or encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop and return the error.
    Abort,
    /// Report the error on stderr and leave the document out.
    Skip,
}

/// Configuration for dataset generation.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding one JSON match log per file.
    pub input_dir: PathBuf,
    /// Number of parallel threads for concurrent documents.
    pub threads: usize,
    /// Handling of unreadable or malformed documents.
    pub on_error: ErrorPolicy,
    /// Shuffle samples after encoding.
    pub shuffle: bool,
    /// Random seed for shuffling (0 = use entropy).
    pub seed: u64,
    /// Suppress per-document progress output.
    pub quiet: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            input_dir: PathBuf::from("data"),
            threads: 1,
            on_error: ErrorPolicy::Abort,
            shuffle: false,
            seed: 0,
            quiet: false,
        }
    }
}

/// Encoded samples plus bookkeeping from one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub samples: Vec<Sample>,
    /// Documents encoded successfully.
    pub documents_read: usize,
    /// Documents left out under `ErrorPolicy::Skip`.
    pub documents_skipped: usize,
}

impl Dataset {
    /// Feature vectors, parallel to `labels()`.
    pub fn features(&self) -> impl Iterator<Item = &FeatureVector> + '_ {
        self.samples.iter().map(|s| &s.features)
    }

    /// Integer labels, parallel to `features()`.
    pub fn labels(&self) -> Vec<u8> {
        self.samples.iter().map(|s| s.label.value()).collect()
    }

    /// Returns the features as an [n, 100] matrix and the labels as an [n] vector.
    #[cfg(feature = "tensor")]
    pub fn to_arrays(
        &self,
    ) -> Result<(ndarray::Array2<f32>, ndarray::Array1<i64>), ndarray::ShapeError> {
        let flat: Vec<f32> = self.features().flat_map(|f| f.iter().copied()).collect();
        let shape = (self.samples.len(), crate::encoding::FEATURE_LEN);
        let features = ndarray::Array2::from_shape_vec(shape, flat)?;
        let labels = self.samples.iter().map(|s| s.label.value() as i64).collect();
        Ok((features, labels))
    }

    /// Adds one document's result, applying the error policy.
    fn absorb(
        &mut self,
        result: Result<Vec<Sample>, DatasetError>,
        policy: ErrorPolicy,
    ) -> Result<(), DatasetError> {
        match result {
            Ok(samples) => {
                self.samples.extend(samples);
                self.documents_read += 1;
                Ok(())
            }
            Err(e) if policy == ErrorPolicy::Skip => {
                eprintln!("Skipping document: {}", e);
                self.documents_skipped += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let list_err = |source| DatasetError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Reads and encodes a single match document.
pub fn encode_file(path: &Path) -> Result<Vec<Sample>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;
    let encode_err = |source: EncodeError| DatasetError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let doc = read_document(BufReader::new(file)).map_err(|e| encode_err(e.into()))?;
    encode_match(&doc).map_err(encode_err)
}

/// Builds a dataset from every document in `config.input_dir`.
///
/// When `config.threads > 1`, documents are encoded concurrently using rayon.
pub fn build_dataset(config: &DatasetConfig) -> Result<Dataset, DatasetError> {
    let paths = list_documents(&config.input_dir)?;

    let mut dataset = if config.threads > 1 {
        build_parallel(config, &paths)?
    } else {
        build_sequential(config, &paths)?
    };

    if config.shuffle {
        let mut rng = if config.seed != 0 {
            SmallRng::seed_from_u64(config.seed)
        } else {
            SmallRng::from_entropy()
        };
        dataset.samples.shuffle(&mut rng);
    }

    Ok(dataset)
}

/// Sequential build: encodes documents one at a time, stopping at the first
/// error under `ErrorPolicy::Abort`.
fn build_sequential(config: &DatasetConfig, paths: &[PathBuf]) -> Result<Dataset, DatasetError> {
    let mut dataset = Dataset::default();
    for (i, path) in paths.iter().enumerate() {
        if !config.quiet {
            eprintln!("Reading file ({} / {}): {}", i + 1, paths.len(), path.display());
        }
        dataset.absorb(encode_file(path), config.on_error)?;
    }
    Ok(dataset)
}

/// Parallel build: encodes documents concurrently, then merges results in
/// listing order so output does not depend on scheduling.
///
/// Under `ErrorPolicy::Abort` workers stop picking up new documents after the
/// first failure. Documents already in flight still finish, and the error
/// returned is whichever failure rayon observed, not necessarily the first in
/// listing order.
fn build_parallel(config: &DatasetConfig, paths: &[PathBuf]) -> Result<Dataset, DatasetError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let started = AtomicUsize::new(0);
    let encode = |path: &PathBuf| {
        if !config.quiet {
            let n = started.fetch_add(1, Ordering::Relaxed) + 1;
            eprintln!("Reading file ({} / {}): {}", n, paths.len(), path.display());
        }
        encode_file(path)
    };

    if config.on_error == ErrorPolicy::Abort {
        let encoded: Vec<Vec<Sample>> = pool.install(|| {
            paths
                .par_iter()
                .map(encode)
                .collect::<Result<Vec<_>, DatasetError>>()
        })?;
        return Ok(Dataset {
            documents_read: encoded.len(),
            samples: encoded.into_iter().flatten().collect(),
            documents_skipped: 0,
        });
    }

    let results: Vec<Result<Vec<Sample>, DatasetError>> =
        pool.install(|| paths.par_iter().map(encode).collect());

    let mut dataset = Dataset::default();
    for result in results {
        dataset.absorb(result, config.on_error)?;
    }
    Ok(dataset)
}

/// One JSONL output line.
#[derive(Serialize)]
struct SampleLine<'a> {
    features: &'a [f32],
    label: u8,
}

/// Writes samples as JSONL (one `{"features": [...], "label": n}` per line).
pub fn write_jsonl<W: Write>(samples: &[Sample], out: &mut W) -> io::Result<()> {
    for sample in samples {
        let line = SampleLine {
            features: &sample.features,
            label: sample.label.value(),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of a dataset to stderr.
pub fn print_summary(dataset: &Dataset) {
    let total = dataset.samples.len();
    let wins = dataset
        .samples
        .iter()
        .filter(|s| s.label == Label::FirstPlayerWin)
        .count();
    let losses = total - wins;

    eprintln!("=== Dataset Summary ===");
    eprintln!("Documents read: {}", dataset.documents_read);
    eprintln!("Documents skipped: {}", dataset.documents_skipped);
    eprintln!("Samples: {}", total);
    eprintln!(
        "Avg samples/document: {:.1}",
        total as f64 / dataset.documents_read.max(1) as f64
    );
    eprintln!("Label distribution:");
    eprintln!(
        "  {:>6}: {} ({:.1}%)",
        "win",
        wins,
        100.0 * wins as f64 / total.max(1) as f64
    );
    eprintln!(
        "  {:>6}: {} ({:.1}%)",
        "loss",
        losses,
        100.0 * losses as f64 / total.max(1) as f64
    );
}
