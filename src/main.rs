use anyhow::{Context, Result};
use clap::Parser;
use mockup_runner::layout::corporate;
use mockup_runner::mockup::{ExportOptions, MockupClient, ScreenSpec, ScreenStyle};
use mockup_runner::orchestrator::{FailurePolicy, Orchestrator, Plan, RunOptions, StepPolicy};
use mockup_runner::report::Report;
use mockup_runner::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_ID_OFFSET, DEFAULT_TIMEOUT_MS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build the corporate website mockup on an MCP mockup service and report timings
#[derive(Parser, Debug)]
#[command(name = "mockup-runner", version, about)]
struct Cli {
    /// MCP endpoint of the mockup service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Value sent in the mcp-session-id header
    #[arg(long, default_value = "ffba88af-54d6-46c3-ad55-8abdfa7df1e0")]
    session_id: String,

    /// Project that receives the screens
    #[arg(long, default_value = "proj_kLIQ1BZw2L")]
    project_id: String,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Request ids start right after this number
    #[arg(long, default_value_t = DEFAULT_ID_OFFSET)]
    id_offset: u64,

    /// Export scale factor
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Screen rendering style (flat or wireframe)
    #[arg(long, default_value = "flat", value_parser = parse_style)]
    style: ScreenStyle,

    /// Screen background colour
    #[arg(long, default_value = "#FFFFFF")]
    background: String,

    /// Export an existing screen instead of creating page INDEX (INDEX=SCREEN_ID)
    #[arg(long = "resume", value_name = "INDEX=SCREEN_ID", value_parser = parse_resume)]
    resume: Vec<(usize, String)>,

    /// Write exported images into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// What to do when screen creation fails (abort or continue)
    #[arg(long, default_value = "abort")]
    on_create_error: FailurePolicy,

    /// What to do when the element upload fails (abort or continue)
    #[arg(long, default_value = "abort")]
    on_upload_error: FailurePolicy,

    /// What to do when an export fails (abort or continue)
    #[arg(long, default_value = "continue")]
    on_export_error: FailurePolicy,

    /// Preview link printed with the summary
    #[arg(long, default_value = "http://localhost:3100")]
    preview_url: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_style(s: &str) -> std::result::Result<ScreenStyle, String> {
    match s {
        "flat" => Ok(ScreenStyle::Flat),
        "wireframe" => Ok(ScreenStyle::Wireframe),
        other => Err(format!("unknown style `{}`", other)),
    }
}

fn parse_resume(s: &str) -> std::result::Result<(usize, String), String> {
    let (index, id) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=SCREEN_ID, got `{}`", s))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad page index `{}`: {}", index, e))?;
    let id = id.trim();
    if id.is_empty() {
        return Err("screen id must not be empty".to_string());
    }
    Ok((index, id.to_string()))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ClientConfig {
        endpoint: cli.endpoint.clone(),
        session_id: cli.session_id.clone(),
        timeout_ms: cli.timeout_ms,
        id_offset: cli.id_offset,
        ..Default::default()
    };
    let mockups = MockupClient::connect(config, cli.project_id.clone())
        .context("failed to set up the MCP client")?;

    let mut plan = Plan::new(corporate::pages());
    for (index, screen_id) in &cli.resume {
        plan = plan.resume(*index, screen_id.clone())?;
    }

    let options = RunOptions {
        screen: ScreenSpec {
            background: cli.background.clone(),
            style: cli.style,
            ..ScreenSpec::named("")
        },
        export: ExportOptions {
            scale: cli.scale,
            ..Default::default()
        },
        policy: StepPolicy {
            create: cli.on_create_error,
            upload: cli.on_upload_error,
            export: cli.on_export_error,
        },
        output_dir: cli.output_dir.clone(),
    };

    println!("{}", "=".repeat(70));
    println!("CORPORATE WEBSITE: {} pages", plan.page_count());
    println!("Project: {}", cli.project_id);
    println!("{}", "=".repeat(70));

    let mut orchestrator = Orchestrator::new(mockups, options);
    let stdout = std::io::stdout();
    let results = orchestrator
        .run(&plan, &mut stdout.lock())
        .context("mockup run aborted")?;

    let report = Report {
        title: "Corporate Website Mockup",
        results: &results,
        page_count: plan.page_count(),
        project_id: &cli.project_id,
        preview_url: Some(&cli.preview_url),
    };
    println!("\n{}", report);
    Ok(())
}
