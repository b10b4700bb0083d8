use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::watch;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, SignaiError};
use crate::history::{History, TranslationRecord};
use crate::media::{MediaUploader, MediaUploaderFactory, derive_thumbnail_url};
use crate::source::{FileSource, PickedMediaSource};
use crate::status::PipelineStatus;
use crate::translate::{TranslationService, TranslationServiceFactory};

pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "m4v", "webm"];

/// Upload orchestrator: picked video -> hosted URL -> translation.
///
/// One run at a time per instance; a second `run` while one is in flight
/// is rejected with [`SignaiError::Busy`].
pub struct Workflow {
    uploader: Box<dyn MediaUploader>,
    translator: Box<dyn TranslationService>,
    scratch_dir: PathBuf,
    status: watch::Sender<PipelineStatus>,
    running: AtomicBool,
}

/// Releases the run slot and returns status to idle on every exit path.
struct RunGuard<'a> {
    running: &'a AtomicBool,
    status: &'a watch::Sender<PipelineStatus>,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.status.send_replace(PipelineStatus::Idle);
        self.running.store(false, Ordering::Release);
    }
}

impl Workflow {
    pub fn new(config: &Config) -> Result<Self> {
        let uploader = MediaUploaderFactory::create_uploader(config)?;
        let translator = TranslationServiceFactory::create_service(config)?;
        Ok(Self::with_services(uploader, translator, config.scratch.resolve_dir()))
    }

    pub fn with_services(
        uploader: Box<dyn MediaUploader>,
        translator: Box<dyn TranslationService>,
        scratch_dir: PathBuf,
    ) -> Self {
        let (status, _) = watch::channel(PipelineStatus::Idle);
        Self {
            uploader,
            translator,
            scratch_dir,
            status,
            running: AtomicBool::new(false),
        }
    }

    /// Observe status transitions
    pub fn subscribe(&self) -> watch::Receiver<PipelineStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> PipelineStatus {
        *self.status.borrow()
    }

    /// Run the pipeline for one picked video.
    ///
    /// `on_complete` is invoked exactly once on success and never on failure.
    /// Status is back to idle when this returns, whatever the outcome.
    pub async fn run<F>(&self, source: &dyn PickedMediaSource, on_complete: F) -> Result<TranslationRecord>
    where
        F: FnOnce(&TranslationRecord) + Send,
    {
        if self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejecting {}: a run is already in progress", source.describe());
            return Err(SignaiError::Busy);
        }
        let _guard = RunGuard { running: &self.running, status: &self.status };

        info!("Processing picked video: {}", source.describe());
        match self.execute(source).await {
            Ok(record) => {
                self.set_status(PipelineStatus::Rendering);
                on_complete(&record);
                info!("Translation \"{}\" completed", record.title);
                Ok(record)
            }
            Err(e) => {
                warn!("Pipeline aborted: {}", e);
                self.set_status(PipelineStatus::Failed);
                Err(e)
            }
        }
    }

    async fn execute(&self, source: &dyn PickedMediaSource) -> Result<TranslationRecord> {
        // Step 1: Read the picked item and stage it in a scratch file
        self.set_status(PipelineStatus::Preparing);
        let picked = source.read_bytes().await?;
        let scratch = self.write_scratch(&picked).await?;
        drop(picked);

        let bytes = fs::read(scratch.path()).await.map_err(|e| {
            SignaiError::LocalIoFailed(format!("Failed to read scratch file: {}", e))
        })?;

        // Step 2: Upload to the media host
        self.set_status(PipelineStatus::Uploading);
        let hosted_url = self.uploader.upload(bytes).await?;
        let thumbnail_url = derive_thumbnail_url(&hosted_url);

        // Step 3: Request the translation
        self.set_status(PipelineStatus::AwaitingTranslation);
        let translation = self.translator.translate(&hosted_url).await?;

        if let Err(e) = scratch.close() {
            warn!("Failed to remove scratch file: {}", e);
        }

        Ok(TranslationRecord::new(translation, Some(thumbnail_url)))
    }

    async fn write_scratch(&self, bytes: &[u8]) -> Result<NamedTempFile> {
        fs::create_dir_all(&self.scratch_dir).await.map_err(|e| {
            SignaiError::LocalIoFailed(format!(
                "Failed to create scratch directory {}: {}",
                self.scratch_dir.display(),
                e
            ))
        })?;

        let scratch = tempfile::Builder::new()
            .prefix("signai-")
            .suffix(".mov")
            .tempfile_in(&self.scratch_dir)
            .map_err(|e| SignaiError::LocalIoFailed(format!("Failed to create scratch file: {}", e)))?;

        fs::write(scratch.path(), bytes).await.map_err(|e| {
            SignaiError::LocalIoFailed(format!("Failed to write scratch file: {}", e))
        })?;

        Ok(scratch)
    }

    fn set_status(&self, status: PipelineStatus) {
        info!("Pipeline status: {}", status);
        self.status.send_replace(status);
    }

    /// Run the pipeline for a single video file and record the result
    pub async fn process_single_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        history: &mut History,
    ) -> Result<TranslationRecord> {
        let input_path = input_path.as_ref();
        if !input_path.is_file() {
            return Err(SignaiError::LocalIoFailed(format!(
                "File not found: {}",
                input_path.display()
            )));
        }

        let source = FileSource::new(input_path);
        let record = self.run(&source, |_| {}).await?;
        history.push(record.clone());
        Ok(record)
    }

    /// Run the pipeline for every video under a directory, one after another.
    /// Returns how many files failed.
    pub async fn process_directory<P: AsRef<Path>>(
        &self,
        input_dir: P,
        history: &mut History,
    ) -> Result<usize> {
        let input_dir = input_dir.as_ref();
        info!("Processing directory: {}", input_dir.display());

        if !input_dir.is_dir() {
            return Err(SignaiError::Config("Input path is not a directory".to_string()));
        }

        let video_files = find_video_files(input_dir);
        info!("Found {} video files to process", video_files.len());

        let mut failures = 0;
        for video_path in video_files {
            match self.process_single_file(&video_path, history).await {
                Ok(_) => info!("Successfully processed: {}", video_path.display()),
                Err(e) => {
                    failures += 1;
                    warn!("Failed to process {}: {}", video_path.display(), e);
                }
            }
        }

        Ok(failures)
    }
}

/// Video files under `dir`, sorted by path
pub fn find_video_files(dir: &Path) -> Vec<PathBuf> {
    let mut video_files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    video_files.sort();
    video_files
}
