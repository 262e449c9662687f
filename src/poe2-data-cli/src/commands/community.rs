//! Community data download fallback
//!
//! Sequential downloads of the configured snapshot files. A failed file is
//! reported and skipped; the remaining files still download.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};

use poe2_data::community::{download_url, DOWNLOAD_TIMEOUT_SECS, SNAPSHOT_FILES};

/// Download the community snapshot files into `output`.
///
/// Returns the number of files saved.
pub fn run(output: &Path) -> Result<usize> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build();

    println!("Downloading community data to {}", output.display());

    let mut downloaded = 0;
    for file in SNAPSHOT_FILES {
        let Some(url) = download_url(file) else {
            eprintln!("  Warning: no mirror configured for {}", file.name);
            continue;
        };

        println!("  Fetching {} from {}...", file.name, file.mirror);
        match fetch(&agent, &url) {
            Ok(bytes) => {
                let dest = output.join(file.name);
                fs::write(&dest, &bytes)
                    .with_context(|| format!("Failed to write {}", dest.display()))?;
                println!(
                    "    {} bytes, sha256 {}",
                    bytes.len(),
                    hex::encode(Sha256::digest(&bytes))
                );
                downloaded += 1;
            }
            Err(e) => {
                eprintln!("  Warning: failed to download {}: {}", file.name, e);
            }
        }
    }

    println!(
        "\nDownloaded {} / {} files",
        downloaded,
        SNAPSHOT_FILES.len()
    );
    Ok(downloaded)
}

fn fetch(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>> {
    match agent.get(url).call() {
        Ok(resp) => {
            let mut bytes = Vec::new();
            resp.into_reader()
                .read_to_end(&mut bytes)
                .with_context(|| format!("Failed to read response body from {}", url))?;
            Ok(bytes)
        }
        Err(ureq::Error::Status(code, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            bail!("server returned {}: {}", code, body);
        }
        Err(e) => bail!("request failed: {}", e),
    }
}
