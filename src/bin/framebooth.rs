use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "framebooth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite captured photos with an optional template into a PNG.
    Compose(ComposeArgs),
    /// Render a template's editor preview as a PNG.
    Preview(PreviewArgs),
    /// Parse and validate a template JSON record.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Photo layout.
    #[arg(long, value_enum)]
    mode: ModeChoice,

    /// Captured photo (repeat once per slot, in capture order).
    #[arg(long = "photo", required = true)]
    photos: Vec<PathBuf>,

    /// Active template JSON. A malformed record is ignored with a warning.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Background used when no matching template is active (hex color).
    #[arg(long)]
    background: Option<String>,

    /// Strip photo resampling filter.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Template JSON.
    #[arg(long)]
    template: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Template JSON.
    #[arg(long)]
    template: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Single,
    Strip4,
}

impl From<ModeChoice> for framebooth::LayoutType {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Single => Self::Single,
            ModeChoice::Strip4 => Self::Strip4,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl From<FilterChoice> for framebooth::PhotoFilter {
    fn from(f: FilterChoice) -> Self {
        match f {
            FilterChoice::Nearest => Self::Nearest,
            FilterChoice::Triangle => Self::Triangle,
            FilterChoice::CatmullRom => Self::CatmullRom,
            FilterChoice::Lanczos3 => Self::Lanczos3,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn read_template(path: &Path) -> anyhow::Result<framebooth::Template> {
    let json = read_text(path)?;
    framebooth::Template::from_json(&json)
        .with_context(|| format!("load template '{}'", path.display()))
}

fn write_png(path: &Path, frame: &framebooth::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = frame.encode_png()?;
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {} ({}x{})", path.display(), frame.width, frame.height);
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let mut settings = framebooth::CompositeSettings::from_env();
    if let Some(bg) = &args.background {
        settings.default_background = framebooth::Rgba8::from_hex(bg)?;
    }
    if let Some(f) = args.filter {
        settings.photo_filter = f.into();
    }

    let photos = args
        .photos
        .iter()
        .map(|p| {
            let bytes = std::fs::read(p).with_context(|| format!("read photo '{}'", p.display()))?;
            framebooth::Photo::from_encoded(&bytes)
                .with_context(|| format!("decode photo '{}'", p.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let template = match &args.template {
        Some(path) => framebooth::parse_active_template(&read_text(path)?),
        None => None,
    };

    let mut compositor = framebooth::Compositor::new(settings);
    let frame = compositor.compose(args.mode.into(), &photos, template.as_ref())?;
    write_png(&args.out, &frame)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let template = read_template(&args.template)?;
    let frame = framebooth::render_preview(&template)?;
    write_png(&args.out, &frame)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let template = read_template(&args.template)?;
    println!(
        "ok: '{}' ({} layout, {} element(s))",
        template.name,
        template.layout_type,
        template.elements.len()
    );
    Ok(())
}
