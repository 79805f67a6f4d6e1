//! Upload session — serializes document uploads and owns the latest result.
//!
//! Each upload takes a generation ticket; a finished pipeline run only
//! installs its result while its ticket is still current, so a newer upload
//! that started in the meantime wins (last-write-wins, serialized by the
//! counter rather than by clearing shared state mid-flight).
//!
//! A failed upload never destroys the previous successful result: the
//! session replaces its stored [`StudyAids`] only on success.

use std::path::Path;

use rand::RngCore;

use crate::error::StudyError;
use crate::pipeline::observer::NoopObserver;
use crate::pipeline::runner::StudyPipeline;
use crate::pipeline::validation;
use crate::source::DocumentKind;
use crate::types::{StudyAids, StudyConfig};

/// Proof that an upload was started; carries its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

/// A single-user upload session.
///
/// Single-threaded by construction (`&mut self` everywhere); the generation
/// counter provides the ordering discipline between overlapping uploads.
#[derive(Debug)]
pub struct Session {
    config: StudyConfig,
    pipeline: StudyPipeline,
    generation: u64,
    current: Option<StudyAids>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StudyConfig::default())
    }
}

impl Session {
    /// Create a session with the given config.
    pub fn new(config: StudyConfig) -> Self {
        let pipeline = StudyPipeline::for_config(&config);
        Self {
            config,
            pipeline,
            generation: 0,
            current: None,
        }
    }

    /// The latest successful result, if any.
    pub fn current(&self) -> Option<&StudyAids> {
        self.current.as_ref()
    }

    /// The session config.
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Start a new upload, invalidating any in-flight one.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.generation += 1;
        UploadTicket {
            generation: self.generation,
        }
    }

    /// Install a finished result if `ticket` is still current.
    ///
    /// Returns `false` when a newer upload has started since the ticket was
    /// issued; the stale result is discarded.
    pub fn complete_upload(&mut self, ticket: UploadTicket, aids: StudyAids) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.current = Some(aids);
        true
    }

    /// Process an upload from raw bytes with a declared MIME type.
    ///
    /// Rejects unsupported types before touching the bytes; extraction and
    /// processing failures are terminal for this attempt and leave the
    /// previous result in place.
    pub fn process_mime(
        &mut self,
        mime: &str,
        bytes: &[u8],
        rng: &mut dyn RngCore,
    ) -> Result<&StudyAids, StudyError> {
        let kind = DocumentKind::from_mime(mime)?;
        self.process_bytes(kind, bytes, rng)
    }

    /// Process an upload of a known document kind.
    pub fn process_bytes(
        &mut self,
        kind: DocumentKind,
        bytes: &[u8],
        rng: &mut dyn RngCore,
    ) -> Result<&StudyAids, StudyError> {
        let ticket = self.begin_upload();
        let text = kind.extract(bytes)?;
        self.process_text(ticket, &text, rng)
    }

    /// Read and process a file, inferring the kind from its extension.
    ///
    /// The read suspends cooperatively; the pipeline itself runs
    /// synchronously once the text is available.
    pub async fn process_file(
        &mut self,
        path: &Path,
        rng: &mut dyn RngCore,
    ) -> Result<&StudyAids, StudyError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let kind = DocumentKind::from_extension(ext)?;

        let ticket = self.begin_upload();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| StudyError::extraction(kind, e))?;
        let text = kind.extract(&bytes)?;
        self.process_text(ticket, &text, rng)
    }

    fn process_text(
        &mut self,
        ticket: UploadTicket,
        text: &str,
        rng: &mut dyn RngCore,
    ) -> Result<&StudyAids, StudyError> {
        let aids = self
            .pipeline
            .run(text, &self.config, rng, &mut NoopObserver);

        let violations = validation::validate(&aids);
        if !violations.is_empty() {
            return Err(StudyError::Processing(violations.join("; ")));
        }

        if !self.complete_upload(ticket, aids) {
            return Err(StudyError::Processing(
                "upload superseded by a newer one".to_string(),
            ));
        }
        match self.current.as_ref() {
            Some(aids) => Ok(aids),
            None => Err(StudyError::Processing("no result installed".to_string())),
        }
    }
}
