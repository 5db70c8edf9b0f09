use anyhow::{Context, Result};
use ffhandlers::cli::{self, Commands};
use ffhandlers::config::Config;
use ffhandlers::engine::codec::{ENCODERS, format_args};
use ffhandlers::engine::{PixelFormat, RegisteredEncoder, SettingsBag};
use ffhandlers::logging;

// Format the factory would pick for a codec that doesn't dictate one
const REQUESTED_PIX_FMT: PixelFormat = PixelFormat::Yuv420p;

fn main() -> Result<()> {
    let cli = cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {:#}", e);
            eprintln!("Using built-in defaults.");
            Config::default()
        }
    };
    logging::init(&config.logging)?;

    match cli.command {
        Commands::Codecs => list_codecs(),
        Commands::Properties { codec, json } => {
            let encoder = lookup(codec.as_deref(), &config)?;
            let settings = build_settings(&encoder, &config, &[]);
            show_properties(&encoder, &settings, json)
        }
        Commands::Resolve { codec, set } => {
            let encoder = lookup(codec.as_deref(), &config)?;
            let settings = build_settings(&encoder, &config, &set);
            let fmt = encoder.resolve_pix_fmt(&settings, REQUESTED_PIX_FMT);
            for (key, value) in settings.effective() {
                if settings.has_user_value(key) {
                    println!("{} = {}", key, value);
                } else {
                    println!("{} = {} (default)", key, value);
                }
            }
            println!(
                "pix_fmt: {} ({}-bit {})",
                fmt,
                fmt.bit_depth(),
                fmt.chroma()
            );
            Ok(())
        }
        Commands::Apply { codec, set } => {
            let encoder = lookup(codec.as_deref(), &config)?;
            let settings = build_settings(&encoder, &config, &set);
            let session = encoder
                .start(&settings, REQUESTED_PIX_FMT)
                .with_context(|| format!("Failed to apply settings to {}", encoder.codec.name))?;
            println!("{}", format_args(&session.ffmpeg_args()));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    }
}

fn lookup(codec: Option<&str>, config: &Config) -> Result<RegisteredEncoder> {
    let name = codec.unwrap_or(&config.defaults.codec);
    RegisteredEncoder::lookup(name).with_context(|| format!("Unknown encoder: {}", name))
}

/// Handler defaults, then configured overrides, then command-line overrides
fn build_settings(
    encoder: &RegisteredEncoder,
    config: &Config,
    overrides: &[(String, String)],
) -> SettingsBag {
    let mut settings = encoder.defaults();
    config.defaults.apply_to(&mut settings);
    for (key, value) in overrides {
        settings.set_string(key, value.as_str());
    }
    settings
}

fn list_codecs() -> Result<()> {
    println!(
        "{:<10} {:<28} {:<8} {:<10} {:<10}",
        "ENCODER", "NAME", "HANDLER", "KEYFRAMES", "PIX_FMT"
    );
    for codec in ENCODERS {
        let encoder = RegisteredEncoder::new(codec);
        println!(
            "{:<10} {:<28} {:<8} {:<10} {:<10}",
            codec.name,
            encoder.info.name,
            yes_no(encoder.has_handler()),
            yes_no(encoder.has_keyframe_support()),
            yes_no(encoder.has_pixel_format_support()),
        );
    }
    Ok(())
}

fn show_properties(encoder: &RegisteredEncoder, settings: &SettingsBag, json: bool) -> Result<()> {
    let props = encoder.properties(None);

    if json {
        let out = serde_json::to_string_pretty(&props).context("Failed to serialize properties")?;
        println!("{}", out);
        return Ok(());
    }

    if props.is_empty() {
        println!("{} exposes no codec-specific properties", encoder.info.name);
        return Ok(());
    }

    for list in props.lists() {
        println!("{} ({})", list.description, list.name);
        let selected = list.index_of(settings.get_string(&list.name));
        for (idx, item) in list.items().iter().enumerate() {
            let marker = if idx == selected { '*' } else { ' ' };
            println!("{} [{}] {:<12} {}", marker, idx, item.value, item.label);
        }
    }
    Ok(())
}

fn init_config() -> Result<()> {
    let path = Config::config_path()?;
    if Config::exists() {
        println!("Config file exists: {}", path.display());
    } else {
        Config::ensure_default()?;
        println!("Created default config: {}", path.display());
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
