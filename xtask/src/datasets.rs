use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use triad::{WorkloadConfig, WorkloadGenerator};

#[derive(Serialize)]
struct Metadata<'a> {
    generated_at_unix: u64,
    sizes: &'a [usize],
    total_files: usize,
    total_size_mb: f64,
    config: &'a WorkloadConfig,
}

/// Serializes `data` to `dir/name` and returns the file size in bytes.
fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, data: &T) -> Result<u64> {
    let path = dir.join(name);
    let json = serde_json::to_string(data)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(fs::metadata(&path)?.len())
}

#[allow(clippy::cast_precision_loss)]
fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

pub fn generate(out: &Path, sizes: &[usize], config: &WorkloadConfig) -> Result<()> {
    println!("Generating benchmark datasets in {}", out.display());
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let mut gen = WorkloadGenerator::from_config(config);
    let mut total_bytes = 0;
    let mut files = 0;

    for (idx, &size) in sizes.iter().enumerate() {
        println!("\n[{}/{}] Generating {size} elements...", idx + 1, sizes.len());

        let words = gen.generate_words(size, config.min_word_len, config.max_word_len)?;
        let name = format!("trie_words_{size}.json");
        let bytes = write_json(out, &name, &words)?;
        println!("   Trie: {name} ({:.2} MB)", megabytes(bytes));
        total_bytes += bytes;

        let array = gen.generate_array(size, config.max_array_value)?;
        let name = format!("fenwick_array_{size}.json");
        let bytes = write_json(out, &name, &array)?;
        println!("   Fenwick: {name} ({:.2} MB)", megabytes(bytes));
        total_bytes += bytes;

        let integers = gen.generate_integers(size, config.max_integer)?;
        let name = format!("skiplist_integers_{size}.json");
        let bytes = write_json(out, &name, &integers)?;
        println!("   Skip List: {name} ({:.2} MB)", megabytes(bytes));
        total_bytes += bytes;

        files += 3;
    }

    let metadata = Metadata {
        generated_at_unix: SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
        sizes,
        total_files: files,
        total_size_mb: (megabytes(total_bytes) * 100.0).round() / 100.0,
        config,
    };
    let path = out.join("metadata.json");
    fs::write(&path, serde_json::to_string_pretty(&metadata)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("\nComplete: {files} files created ({:.2} MB)", megabytes(total_bytes));
    Ok(())
}
