use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ffhandlers")]
#[command(about = "Inspect and apply codec-specific encoder handlers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List known encoders with their display names and capabilities
    Codecs,

    /// Show the UI properties a codec's handler exposes
    Properties {
        /// Encoder name (defaults to the configured codec)
        codec: Option<String>,

        /// Print the properties as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the output pixel format for a profile
    Resolve {
        /// Encoder name (defaults to the configured codec)
        codec: Option<String>,

        /// Override a setting, e.g. --set Codec.DNxHR.Profile=dnxhr_hq (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_setting)]
        set: Vec<(String, String)>,
    },

    /// Run the full handler lifecycle and print the resulting ffmpeg arguments
    Apply {
        /// Encoder name (defaults to the configured codec)
        codec: Option<String>,

        /// Override a setting, e.g. --set Codec.DNxHR.Profile=dnxhr_hq (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_setting)]
        set: Vec<(String, String)>,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

/// Parse a `KEY=VALUE` settings override
fn parse_setting(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn parse() -> Cli {
    Cli::parse()
}
