//! Sequential page runner: create screen, upload elements, export, time it all.

use crate::mockup::{ElementDescriptor, ExportOptions, MockupClient, ScreenSpec};
use crate::rpc::ImageContent;
use crate::transport::Transport;
use crate::{Error, Result};
use log::{info, warn};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

/// Produces a page's element list; pure, no I/O
pub type ElementsFn = fn() -> Vec<ElementDescriptor>;

/// One page of a plan
#[derive(Debug, Clone)]
pub struct PageSpec {
    pub index: usize,
    pub name: String,
    pub elements: ElementsFn,
}

impl PageSpec {
    pub fn new(index: usize, name: impl Into<String>, elements: ElementsFn) -> Self {
        Self {
            index,
            name: name.into(),
            elements,
        }
    }
}

/// Ordered pages plus screens that already exist remotely
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pages: Vec<PageSpec>,
    resumed: BTreeMap<usize, String>,
}

impl Plan {
    pub fn new(pages: Vec<PageSpec>) -> Self {
        Self {
            pages,
            resumed: BTreeMap::new(),
        }
    }

    /// Treat page `index` as already created under `screen_id`; it will only be exported
    pub fn resume(mut self, index: usize, screen_id: impl Into<String>) -> Result<Self> {
        if !self.pages.iter().any(|p| p.index == index) {
            return Err(Error::Config(format!("no page with index {} to resume", index)));
        }
        self.resumed.insert(index, screen_id.into());
        Ok(self)
    }

    pub fn pages(&self) -> &[PageSpec] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn resumed_screen(&self, index: usize) -> Option<&str> {
        self.resumed.get(&index).map(String::as_str)
    }
}

/// What to do when a step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Propagate the error and end the run
    Abort,
    /// Record the failure on the page's row and move on
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "continue" => Ok(FailurePolicy::Continue),
            other => Err(Error::Config(format!(
                "unknown failure policy `{}` (expected abort or continue)",
                other
            ))),
        }
    }
}

/// Failure policy per step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPolicy {
    pub create: FailurePolicy,
    pub upload: FailurePolicy,
    pub export: FailurePolicy,
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self {
            create: FailurePolicy::Abort,
            upload: FailurePolicy::Abort,
            export: FailurePolicy::Continue,
        }
    }
}

/// How a timed step ended
#[derive(Debug, Clone, PartialEq)]
pub enum StepTiming {
    Succeeded { elapsed_ms: u64 },
    Failed { elapsed_ms: u64, reason: String },
    /// The step did not run (resumed page, or an earlier step failed)
    Skipped,
}

impl StepTiming {
    /// Elapsed time of a successful step
    pub fn succeeded_ms(&self) -> Option<u64> {
        match self {
            StepTiming::Succeeded { elapsed_ms } => Some(*elapsed_ms),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepTiming::Failed { .. })
    }
}

/// An exported image kept for later reference
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub sha256: String,
    pub bytes: usize,
    /// Where it was written, if an output directory was configured
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub index: usize,
    pub name: String,
    pub screen_id: Option<String>,
    pub creation: StepTiming,
    pub num_elements: usize,
    pub export: StepTiming,
    pub artifacts: Vec<Artifact>,
}

/// Settings shared by every page of a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Template for new screens; the name is replaced per page
    pub screen: ScreenSpec,
    pub export: ExportOptions,
    pub policy: StepPolicy,
    pub output_dir: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            screen: ScreenSpec::named(""),
            export: ExportOptions::default(),
            policy: StepPolicy::default(),
            output_dir: None,
        }
    }
}

pub struct Orchestrator<T: Transport> {
    mockups: MockupClient<T>,
    options: RunOptions,
}

impl<T: Transport> Orchestrator<T> {
    pub fn new(mockups: MockupClient<T>, options: RunOptions) -> Self {
        Self { mockups, options }
    }

    pub fn mockups(&self) -> &MockupClient<T> {
        &self.mockups
    }

    /// Run every page of `plan` in order, writing progress lines to `out`.
    ///
    /// Results come back sorted by page index.
    pub fn run(&mut self, plan: &Plan, out: &mut dyn Write) -> Result<Vec<PageResult>> {
        let total = plan.page_count();
        let mut results = Vec::with_capacity(total);

        for page in plan.pages() {
            writeln!(out, "\n[{}/{}] {}", page.index, total, page.name)?;
            let result = match plan.resumed_screen(page.index) {
                Some(screen_id) => self.resume_page(page, screen_id, out)?,
                None => self.build_page(page, out)?,
            };
            results.push(result);
        }

        results.sort_by_key(|r| r.index);
        Ok(results)
    }

    fn build_page(&mut self, page: &PageSpec, out: &mut dyn Write) -> Result<PageResult> {
        let mut result = PageResult {
            index: page.index,
            name: page.name.clone(),
            screen_id: None,
            creation: StepTiming::Skipped,
            num_elements: 0,
            export: StepTiming::Skipped,
            artifacts: Vec::new(),
        };

        let spec = ScreenSpec {
            name: page.name.clone(),
            ..self.options.screen.clone()
        };

        let start = Instant::now();
        let screen = match self.mockups.create_screen(&spec) {
            Ok(screen) => screen,
            Err(e) => {
                result.creation = recover(self.options.policy.create, "create", e, elapsed_ms(start), out)?;
                return Ok(result);
            }
        };
        result.screen_id = Some(screen.id.clone());

        let elements = (page.elements)();
        result.num_elements = elements.len();
        if let Err(e) = self.mockups.bulk_add_elements(&screen.id, &elements) {
            result.creation = recover(self.options.policy.upload, "upload", e, elapsed_ms(start), out)?;
            return Ok(result);
        }

        let creation_ms = elapsed_ms(start);
        result.creation = StepTiming::Succeeded { elapsed_ms: creation_ms };
        writeln!(
            out,
            "  Created: {} | {} elements | {} ms",
            screen.id, result.num_elements, creation_ms
        )?;

        self.export_page(&mut result, &screen.id, out)?;
        Ok(result)
    }

    fn resume_page(&mut self, page: &PageSpec, screen_id: &str, out: &mut dyn Write) -> Result<PageResult> {
        let num_elements = (page.elements)().len();
        writeln!(out, "  Existing screen: {} | {} elements", screen_id, num_elements)?;
        let mut result = PageResult {
            index: page.index,
            name: page.name.clone(),
            screen_id: Some(screen_id.to_string()),
            creation: StepTiming::Skipped,
            num_elements,
            export: StepTiming::Skipped,
            artifacts: Vec::new(),
        };
        self.export_page(&mut result, screen_id, out)?;
        Ok(result)
    }

    fn export_page(&mut self, result: &mut PageResult, screen_id: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "  Exporting {}...", self.options.export.format.as_str().to_uppercase())?;
        let start = Instant::now();
        match self.mockups.export(screen_id, self.options.export) {
            Ok(export) => {
                let ms = elapsed_ms(start);
                result.export = StepTiming::Succeeded { elapsed_ms: ms };
                writeln!(out, "  Export: {} ms", ms)?;
                match self.keep_images(result, &export.images) {
                    Ok(artifacts) => result.artifacts = artifacts,
                    Err(e) => {
                        result.export = recover(self.options.policy.export, "export", e, ms, out)?;
                    }
                }
            }
            Err(e) => {
                result.export = recover(self.options.policy.export, "export", e, elapsed_ms(start), out)?;
            }
        }
        Ok(())
    }

    fn keep_images(&self, result: &PageResult, images: &[ImageContent]) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::with_capacity(images.len());
        for (i, img) in images.iter().enumerate() {
            let sha256 = hex::encode(Sha256::digest(&img.data));
            let path = match &self.options.output_dir {
                Some(dir) => {
                    std::fs::create_dir_all(dir)?;
                    let suffix = if i == 0 { String::new() } else { format!("-{}", i + 1) };
                    let file = dir.join(format!(
                        "{:02}-{}{}.{}",
                        result.index,
                        slug(&result.name),
                        suffix,
                        img.extension()
                    ));
                    std::fs::write(&file, &img.data)?;
                    info!("wrote {} ({} bytes)", file.display(), img.data.len());
                    Some(file)
                }
                None => None,
            };
            artifacts.push(Artifact {
                sha256,
                bytes: img.data.len(),
                path,
            });
        }
        Ok(artifacts)
    }
}

/// Apply `policy` to a failed step: propagate, or turn it into a `Failed` timing
fn recover(
    policy: FailurePolicy,
    step: &str,
    err: Error,
    elapsed_ms: u64,
    out: &mut dyn Write,
) -> Result<StepTiming> {
    match policy {
        FailurePolicy::Abort => Err(err),
        FailurePolicy::Continue => {
            warn!("{} failed after {} ms: {}", step, elapsed_ms, err);
            let mut title = step.to_string();
            if let Some(first) = title.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            writeln!(out, "  {} FAILED after {} ms: {}", title, elapsed_ms, err)?;
            Ok(StepTiming::Failed {
                elapsed_ms,
                reason: err.to_string(),
            })
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}
