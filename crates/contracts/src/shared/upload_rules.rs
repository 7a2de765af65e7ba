//! Upload validation rules
//!
//! Checks a chosen file's name and size before the form is submitted.
//! The extension check always runs first; the first failing check wins.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];
pub const DEFAULT_MAX_SIZE_MB: u32 = 10;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Allow-list and size limit for uploaded documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadRules {
    /// Lowercase extensions without the leading dot
    pub allowed_extensions: Vec<String>,
    pub max_size_mb: u32,
}

impl Default for UploadRules {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            max_size_mb: DEFAULT_MAX_SIZE_MB,
        }
    }
}

/// Why a file was refused
#[derive(Debug, Clone, PartialEq)]
pub enum UploadRejection {
    UnsupportedFormat {
        extension: String,
        allowed: Vec<String>,
    },
    TooLarge {
        size_mb: f64,
        max_size_mb: u32,
    },
}

impl UploadRejection {
    /// User-facing text shown in the blocking alert
    pub fn message(&self) -> String {
        match self {
            UploadRejection::UnsupportedFormat { allowed, .. } => format!(
                "Formato de archivo no permitido. Use {}",
                describe_extensions(allowed)
            ),
            UploadRejection::TooLarge { max_size_mb, .. } => {
                format!("El archivo no debe superar {} MB", max_size_mb)
            }
        }
    }
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for UploadRejection {}

/// Extension as `name.split('.').pop()` sees it, lowercased.
/// A name without a dot is its own extension.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Bytes to megabytes (bytes / 1024 / 1024)
pub fn size_in_mb(size_bytes: f64) -> f64 {
    size_bytes / BYTES_PER_MB
}

impl UploadRules {
    pub fn is_extension_allowed(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    /// Validate a file by name and size in bytes.
    ///
    /// Exactly `max_size_mb` passes; only strictly larger files are refused.
    pub fn check(&self, name: &str, size_bytes: f64) -> Result<(), UploadRejection> {
        let extension = file_extension(name);
        if !self.is_extension_allowed(&extension) {
            return Err(UploadRejection::UnsupportedFormat {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        let size_mb = size_in_mb(size_bytes);
        if size_mb > f64::from(self.max_size_mb) {
            return Err(UploadRejection::TooLarge {
                size_mb,
                max_size_mb: self.max_size_mb,
            });
        }

        Ok(())
    }
}

/// "PDF, JPG o PNG". JPEG is shown as JPG when both are allowed.
fn describe_extensions(allowed: &[String]) -> String {
    let mut labels: Vec<String> = Vec::new();
    let has_jpg = allowed.iter().any(|e| e.eq_ignore_ascii_case("jpg"));
    for ext in allowed {
        if has_jpg && ext.eq_ignore_ascii_case("jpeg") {
            continue;
        }
        let label = ext.to_uppercase();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    match labels.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} o {}", rest.join(", "), last),
    }
}
