//! Foto-Upload an den konfigurierten Endpunkt (multipart/form-data).

use std::path::PathBuf;

use anyhow::Context;

/// Sendet ausgewählte Fotos als Multipart-Formular an einen festen
/// Upload-Endpunkt. Ein unabhängiges Teilsystem: kein Bezug zu
/// Marker-IDs, Ergebnis wird vom Aufrufer nur geloggt.
pub struct PhotoUploader {
    endpoint: String,
}

impl PhotoUploader {
    /// Erstellt einen Uploader für den übergebenen Endpunkt.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Lädt die Dateien als `photo`-Parts hoch und liefert den
    /// Antworttext des Servers.
    pub fn upload(&self, paths: &[PathBuf]) -> anyhow::Result<String> {
        anyhow::ensure!(!paths.is_empty(), "keine Dateien ausgewählt");

        let mut form = reqwest::blocking::multipart::Form::new();
        for path in paths {
            form = form
                .file("photo", path)
                .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
        }

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .with_context(|| format!("Upload an {} fehlgeschlagen", self.endpoint))?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "Upload abgelehnt: HTTP {status}");

        Ok(response.text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_without_files_is_rejected() {
        let uploader = PhotoUploader::new("http://localhost:3001/upload");
        assert!(uploader.upload(&[]).is_err());
    }

    #[test]
    fn test_missing_file_is_reported_before_any_request() {
        let uploader = PhotoUploader::new("http://localhost:3001/upload");
        let result = uploader.upload(&[PathBuf::from("/nonexistent/photo.jpg")]);
        let message = format!("{:#}", result.expect_err("fehlende Datei muss scheitern"));
        assert!(message.contains("nicht lesbar"));
    }
}
