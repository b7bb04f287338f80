//! GUI binary for pdf2pptx.
//!
//! A single window with three actions — browse source PDF, browse destination
//! folder, convert — plus a status label. Conversion runs on a worker thread
//! so the window stays responsive; while the worker runs, a non-dismissable
//! busy indicator is shown and both browse buttons and the convert button are
//! disabled. Completion is reported over an mpsc channel as
//! `Ok(output)` / `Err(message)`: the UI thread never sees a raw error value,
//! only the rendered string.
//!
//! Job state machine: Idle → Busy → {Finished, Error} → Idle-equivalent.
//! At most one job is in flight; a second convert request while busy is
//! rejected with a visible message.

use eframe::egui;
use pdf2pptx::{
    convert_sync, open_in_file_browser, validate_destination_path, validate_source_path,
    ConversionConfig, ConversionOutput,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 250.0])
            .with_min_inner_size([360.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "pdf2pptx converter",
        options,
        Box::new(|_cc| Ok(Box::new(ConverterApp::new()))),
    )
}

/// One in-flight conversion: the worker thread plus the channel it reports on.
///
/// Owning the handle (instead of reusing a long-lived worker object) is what
/// makes the at-most-one-job rule checkable: a job exists exactly while this
/// struct does.
struct ConversionJob {
    rx: mpsc::Receiver<Result<ConversionOutput, String>>,
    _handle: thread::JoinHandle<()>,
}

/// Dismissable dialog shown after a job finishes.
enum ResultDialog {
    Finished(String),
    Error(String),
}

struct ConverterApp {
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
    status: String,
    job: Option<ConversionJob>,
    result: Option<ResultDialog>,
    simulate: bool,
}

impl ConverterApp {
    fn new() -> Self {
        Self {
            source: None,
            destination: None,
            status: "Idle".to_string(),
            job: None,
            result: None,
            // Developer switch: exercise the Busy/Finished plumbing without a
            // PDF engine installed.
            simulate: std::env::var("PDF2PPTX_SIMULATE").is_ok_and(|v| v == "1"),
        }
    }

    fn set_status(&mut self, msg: &str) {
        self.status = msg.to_string();
    }

    fn browse_source(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select PDF file")
            .add_filter("PDF documents", &["pdf"])
            .pick_file();
        if let Some(path) = picked {
            self.source = Some(path);
        }
    }

    fn browse_destination(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select Destination Folder")
            .pick_folder();
        if let Some(path) = picked {
            self.destination = Some(path);
        }
    }

    fn start_conversion(&mut self) {
        if self.job.is_some() {
            self.result = Some(ResultDialog::Error(
                "A conversion is already running.".to_string(),
            ));
            return;
        }

        // Pre-flight validation, synchronously, before entering Busy. The
        // same checks run again inside the worker via `convert` itself.
        let preflight = validate_source_path(self.source.as_deref())
            .map(PathBuf::from)
            .and_then(|src| {
                validate_destination_path(self.destination.as_deref())
                    .map(|dst| (src, dst.to_path_buf()))
            });
        let (source, destination) = match preflight {
            Ok(paths) => paths,
            Err(e) => {
                self.set_status("Error");
                self.result = Some(ResultDialog::Error(e.to_string()));
                return;
            }
        };

        self.set_status("Busy");
        let simulate = self.simulate;

        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let result = run_job(&source, &destination, simulate);
            // The receiver may be gone if the window closed; nothing to do.
            let _ = tx.send(result.map_err(|e| e.to_string()));
        });

        self.job = Some(ConversionJob {
            rx,
            _handle: handle,
        });
    }

    /// Poll the worker channel; on completion, tear down the job and surface
    /// the result dialog.
    fn poll_job(&mut self) {
        let Some(job) = &self.job else { return };
        match job.rx.try_recv() {
            Ok(Ok(output)) => {
                self.job = None;
                self.set_status("Finished");
                let msg = if output.output_path.as_os_str().is_empty() {
                    "Finished".to_string()
                } else {
                    format!(
                        "Finished\n{} slides → {}",
                        output.stats.slide_count,
                        output.output_path.display()
                    )
                };
                self.result = Some(ResultDialog::Finished(msg));
            }
            Ok(Err(msg)) => {
                self.job = None;
                self.set_status("Error");
                self.result = Some(ResultDialog::Error(format!("Error: {msg}")));
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.job = None;
                self.set_status("Error");
                self.result = Some(ResultDialog::Error(
                    "Error: the conversion worker stopped unexpectedly".to_string(),
                ));
            }
        }
    }
}

/// Everything the worker does for one job: convert, then open the
/// destination folder. Runs on the worker thread.
fn run_job(
    source: &Path,
    destination: &Path,
    simulate: bool,
) -> Result<ConversionOutput, pdf2pptx::Pdf2PptxError> {
    let config = ConversionConfig::builder().simulate(simulate).build()?;
    let output = convert_sync(source, destination, &config)?;
    if !simulate {
        open_in_file_browser(destination)?;
    }
    Ok(output)
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();
        let busy = self.job.is_some();
        if busy {
            // Keep polling while the worker runs.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!busy, |ui| {
                match &self.source {
                    Some(path) => ui.label(format!("PDF file: {}", path.display())),
                    None => ui.label("Select .pdf file:"),
                };
                if ui.button("Browse File").clicked() {
                    self.browse_source();
                }

                ui.add_space(8.0);

                match &self.destination {
                    Some(path) => ui.label(format!("Destination Folder: {}", path.display())),
                    None => ui.label("Destination folder:"),
                };
                if ui.button("Browse Folder").clicked() {
                    self.browse_destination();
                }

                ui.add_space(12.0);

                if ui.button("Convert .pdf to .pptx").clicked() {
                    self.start_conversion();
                }
            });

            ui.add_space(12.0);
            ui.label(format!("Status: {}", self.status));
        });

        // Non-dismissable busy indicator.
        if busy {
            egui::Window::new("busy-indicator")
                .title_bar(false)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Converting…");
                    });
                });
        }

        // Dismissable result dialog.
        let mut dismissed = false;
        if let Some(result) = &self.result {
            let (title, text) = match result {
                ResultDialog::Finished(msg) => ("Finished", msg.as_str()),
                ResultDialog::Error(msg) => ("Error", msg.as_str()),
            };
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(text);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }
        if dismissed {
            self.result = None;
        }
    }
}
