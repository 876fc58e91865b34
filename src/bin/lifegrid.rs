use std::{
    io::Write as _,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use lifegrid::{
    ConfiguratorAction, ConfiguratorState, DeviceCategory, Language, LifeGridError, RasterOptions,
    Rasterizer, Rgb, VisualizationType,
};

/// Exit status for rejected request parameters.
const EXIT_VALIDATION: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "lifegrid", version, about = "Render time-visualization wallpapers")]
struct Cli {
    /// Log more (-v info, -vv debug). `LIFEGRID_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wallpaper from query parameters.
    Render(RenderArgs),
    /// Build a wallpaper URL the way the web configurator does.
    Url(UrlArgs),
    /// List device presets.
    Devices,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Query string, e.g. `type=year&bg=111114&accent=FFD700`.
    #[arg(long, default_value = "")]
    query: String,

    /// Extra parameter; later values override the query string.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    params: Vec<(String, String)>,

    /// Render as of this instant instead of now.
    #[arg(long, value_parser = parse_instant)]
    now: Option<DateTime<Utc>>,

    /// Output path, `-` for stdout.
    #[arg(long)]
    out: PathBuf,

    /// Raster options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Additional font directory (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct UrlArgs {
    /// Endpoint base URL.
    #[arg(long, default_value = "http://localhost:8787")]
    base: String,

    /// Visualization: year, life or goal.
    #[arg(long = "type", value_parser = parse_kind)]
    kind: VisualizationType,

    /// Two-letter country code.
    #[arg(long)]
    country: String,

    /// Device preset name (see `lifegrid devices`).
    #[arg(long)]
    device: Option<String>,

    /// Background color, `RRGGBB`.
    #[arg(long, value_parser = parse_color)]
    bg: Option<Rgb>,

    /// Accent color, `RRGGBB`.
    #[arg(long, value_parser = parse_color)]
    accent: Option<Rgb>,

    /// Wallpaper language: en, zh-CN, zh-TW or ja.
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,

    /// Birth date, `YYYY-MM-DD`.
    #[arg(long)]
    dob: Option<NaiveDate>,

    /// Expected lifespan in years.
    #[arg(long)]
    lifespan: Option<u32>,

    /// Goal date, `YYYY-MM-DD`.
    #[arg(long)]
    goal: Option<NaiveDate>,

    /// Goal label.
    #[arg(long = "goal-name")]
    goal_name: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Url(args) => cmd_url(args).map(|()| ExitCode::SUCCESS),
        Command::Devices => cmd_devices().map(|()| ExitCode::SUCCESS),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("LIFEGRID_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    Ok((k.to_owned(), v.to_owned()))
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 instant: {e}"))
}

fn parse_kind(s: &str) -> Result<VisualizationType, String> {
    VisualizationType::from_code(s).ok_or_else(|| format!("unknown visualization '{s}'"))
}

fn parse_color(s: &str) -> Result<Rgb, String> {
    Rgb::from_hex(s.trim_start_matches('#')).ok_or_else(|| format!("expected RRGGBB, got '{s}'"))
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_code(s).ok_or_else(|| format!("unsupported language '{s}'"))
}

fn load_raster_options(
    config: Option<&Path>,
    font_dirs: Vec<PathBuf>,
) -> anyhow::Result<RasterOptions> {
    let mut options = match config {
        Some(path) => RasterOptions::from_json_file(path)?,
        None => RasterOptions::default(),
    };
    options.font_dirs.extend(font_dirs);
    Ok(options)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<ExitCode> {
    let options = load_raster_options(args.config.as_deref(), args.font_dirs)?;
    let rasterizer = Rasterizer::new(&options);

    let mut params = lifegrid::parse_query(&args.query);
    params.extend(args.params);
    let now = args.now.unwrap_or_else(Utc::now);

    let image = match lifegrid::render_wallpaper(params, now, &rasterizer) {
        Ok(image) => image,
        Err(err @ LifeGridError::Validation(_)) => {
            println!("{}", err.response_body());
            return Ok(ExitCode::from(EXIT_VALIDATION));
        }
        Err(err) => return Err(err).context("render wallpaper"),
    };

    if args.out == Path::new("-") {
        std::io::stdout()
            .lock()
            .write_all(&image.body)
            .context("write image to stdout")?;
    } else {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, &image.body)
            .with_context(|| format!("write image '{}'", args.out.display()))?;
        eprintln!(
            "wrote {} ({}, {} bytes, etag {})",
            args.out.display(),
            image.content_type(),
            image.body.len(),
            image.etag
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_url(args: UrlArgs) -> anyhow::Result<()> {
    let mut actions = vec![
        ConfiguratorAction::SelectType(args.kind),
        ConfiguratorAction::SelectCountry(args.country),
    ];
    if let Some(name) = &args.device {
        let device = lifegrid::find_device(name)
            .with_context(|| format!("unknown device '{name}' (see `lifegrid devices`)"))?;
        actions.push(ConfiguratorAction::SelectDevice(*device));
    }
    if let Some(bg) = args.bg {
        actions.push(ConfiguratorAction::SetBackground(bg));
    }
    if let Some(accent) = args.accent {
        actions.push(ConfiguratorAction::SetAccent(accent));
    }
    if let Some(lang) = args.lang {
        actions.push(ConfiguratorAction::SetLanguage(lang));
    }
    if args.dob.is_some() {
        actions.push(ConfiguratorAction::SetDateOfBirth(args.dob));
    }
    if let Some(years) = args.lifespan {
        actions.push(ConfiguratorAction::SetLifespan(years));
    }
    if args.goal.is_some() {
        actions.push(ConfiguratorAction::SetGoalDate(args.goal));
    }
    if let Some(name) = args.goal_name {
        actions.push(ConfiguratorAction::SetGoalName(name));
    }

    let state = actions
        .into_iter()
        .fold(ConfiguratorState::default(), |s, a| s.reduce(a));
    let url = state
        .to_url(&args.base)
        .context("configurator state is incomplete")?;
    println!("{url}");
    Ok(())
}

fn cmd_devices() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for category in [
        DeviceCategory::IPhone,
        DeviceCategory::Android,
        DeviceCategory::IPad,
    ] {
        writeln!(out, "{}:", category.label())?;
        for d in lifegrid::devices_in(category) {
            writeln!(
                out,
                "  {:<52} {:>4}x{:<4}  clock {:.2}",
                d.name, d.width, d.height, d.clock_fraction
            )?;
        }
    }
    Ok(())
}
