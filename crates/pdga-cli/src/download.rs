//! Fetch-and-cache of the PDGA provider exports.
//!
//! Exports are cached per calendar day; a cached file is never re-fetched.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use pdga_model::RecordKind;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info};

const USER_AGENT_VALUE: &str = concat!("pdga-ingest/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const BUFFER_SIZE: usize = 65536;

/// One downloadable provider export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub kind: RecordKind,
    pub url: &'static str,
    /// Cache file name prefix; the date and `.csv` are appended.
    pub file_stem: &'static str,
}

pub const DISC_SOURCE: Source = Source {
    kind: RecordKind::Disc,
    url: "https://www.pdga.com/technical-standards/equipment-certification/discs/export",
    file_stem: "pdga-approved-disc-golf-discs",
};

pub const COMPANY_SOURCE: Source = Source {
    kind: RecordKind::Company,
    url: "https://www.pdga.com/technical-standards/manufacturers/csv?attach=page",
    file_stem: "pdga-manufacturers",
};

pub const SOURCES: &[Source] = &[DISC_SOURCE, COMPANY_SOURCE];

impl Source {
    pub fn for_kind(kind: RecordKind) -> &'static Source {
        match kind {
            RecordKind::Disc => &DISC_SOURCE,
            RecordKind::Company => &COMPANY_SOURCE,
        }
    }

    pub fn cache_file_name(&self, date: NaiveDate) -> String {
        format!("{}_{}.csv", self.file_stem, date.format("%Y-%m-%d"))
    }

    pub fn cache_path(&self, data_dir: &Path, date: NaiveDate) -> PathBuf {
        data_dir.join(self.cache_file_name(date))
    }
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("export body is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to re-encode export: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no cached export at {path} and downloads are disabled")]
    NotCached { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, DownloadError>;

/// Returns today's cache file for `source`, downloading it when absent.
pub fn fetch_and_cache(source: &Source, data_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = source.cache_path(data_dir, date);
    if path.exists() {
        info!(path = %path.display(), "using cached export");
        return Ok(path);
    }

    info!(url = source.url, "downloading export");
    let client = Client::builder()
        .user_agent(USER_AGENT_VALUE)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client.get(source.url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status {
            url: source.url.to_string(),
            status,
        });
    }
    let body = String::from_utf8(response.bytes()?.to_vec())?;

    fs::create_dir_all(data_dir).map_err(|source| DownloadError::Io {
        path: data_dir.to_path_buf(),
        source,
    })?;
    let records = rewrite_csv(&body, &path)?;
    let digest = file_sha256(&path)?;
    info!(path = %path.display(), records, sha256 = %digest, "cached export");
    Ok(path)
}

/// Returns the cache file without touching the network.
pub fn cached(source: &Source, data_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = source.cache_path(data_dir, date);
    if path.exists() {
        Ok(path)
    } else {
        Err(DownloadError::NotCached { path })
    }
}

/// Parses `body` as CSV and writes it back out to `path`, returning the record count.
///
/// Round-tripping through the CSV parser normalizes quoting and line endings.
pub fn rewrite_csv(body: &str, path: &Path) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.trim_start_matches('\u{feff}').as_bytes());
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)?;
    let mut count = 0usize;
    for record in reader.records() {
        writer.write_record(&record?)?;
        count += 1;
    }
    writer.flush().map_err(|source| DownloadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = count, "rewrote export");
    Ok(count.saturating_sub(1))
}

/// SHA-256 of a file as lowercase hex.
pub fn file_sha256(path: &Path) -> Result<String> {
    let io_error = |source: std::io::Error| DownloadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer).map_err(io_error)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn cache_names_carry_the_date() {
        assert_eq!(
            DISC_SOURCE.cache_file_name(date()),
            "pdga-approved-disc-golf-discs_2024-03-09.csv"
        );
        assert_eq!(
            COMPANY_SOURCE.cache_file_name(date()),
            "pdga-manufacturers_2024-03-09.csv"
        );
    }

    #[test]
    fn existing_cache_skips_the_network() {
        let dir = TempDir::new().unwrap();
        let path = DISC_SOURCE.cache_path(dir.path(), date());
        fs::write(&path, "a,b\n1,2\n").unwrap();
        assert_eq!(fetch_and_cache(&DISC_SOURCE, dir.path(), date()).unwrap(), path);
        assert_eq!(cached(&DISC_SOURCE, dir.path(), date()).unwrap(), path);
    }

    #[test]
    fn missing_cache_is_reported_offline() {
        let dir = TempDir::new().unwrap();
        let error = cached(&COMPANY_SOURCE, dir.path(), date()).unwrap_err();
        assert!(matches!(error, DownloadError::NotCached { .. }));
    }

    #[test]
    fn rewrite_normalizes_quoting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let body = "\u{feff}Name,Model\r\n\"Discraft\",\"Buzzz\"\r\n\"Destiny/Dynamic Discs\",\"Escape, Lucid\"\r\n";
        assert_eq!(rewrite_csv(body, &path).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Name,Model\nDiscraft,Buzzz\nDestiny/Dynamic Discs,\"Escape, Lucid\"\n"
        );
    }

    #[test]
    fn sha256_of_known_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, "abc").unwrap();
        assert_eq!(
            file_sha256(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
