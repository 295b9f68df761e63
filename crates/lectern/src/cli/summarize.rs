//! One-shot summarize command handler.

use lectern_core::{AppConfig, SummaryOutcome, SummaryRequest, SummaryStyle};
use lectern_error::{InputError, LecternResult};
use lectern_interface::ChatCompletion;
use lectern_models::HuggingFaceClient;
use lectern_summarizer::Summarizer;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Handle the `summarize` command.
///
/// Prints the summary to stdout and the run-info line to stderr. Exits with a
/// failure code when the call failed, mirroring what the form would show.
pub async fn handle_summarize_command(
    config: &AppConfig,
    style: SummaryStyle,
    max_tokens: u32,
    temperature: f32,
    file: Option<PathBuf>,
) -> LecternResult<ExitCode> {
    let notes = read_notes(file.as_deref(), std::io::stdin().lock())?;

    let summarizer = Summarizer::new(HuggingFaceClient::from_config(config), config);
    let request = SummaryRequest::new(notes, style, max_tokens, f64::from(temperature));

    let output = run_summary(&summarizer, &request).await;
    println!("{}", output.stdout);
    if let Some(status) = &output.stderr {
        eprintln!("{}", status);
    }

    Ok(output.exit_code())
}

/// What the command prints and whether it failed.
#[derive(Debug, Clone, PartialEq)]
struct CommandOutput {
    stdout: String,
    stderr: Option<String>,
    failed: bool,
}

impl CommandOutput {
    fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

async fn run_summary<C>(summarizer: &Summarizer<C>, request: &SummaryRequest) -> CommandOutput
where
    C: ChatCompletion,
{
    let outcome = summarizer.summarize(request).await;
    let failed = matches!(outcome, SummaryOutcome::Failed { .. });

    let (text, status) = outcome.into_display();
    CommandOutput {
        stdout: text,
        stderr: (!status.is_empty()).then_some(status),
        failed,
    }
}

/// Reads notes from `file`, or from `stdin` when no file is given.
fn read_notes(file: Option<&Path>, mut stdin: impl Read) -> Result<String, InputError> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| InputError::new(format!("Failed to read {}: {}", path.display(), e))),
        None => {
            let mut notes = String::new();
            stdin
                .read_to_string(&mut notes)
                .map_err(|e| InputError::new(format!("Failed to read standard input: {}", e)))?;
            Ok(notes)
        }
    }
}
