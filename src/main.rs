use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galleryview::{
    codec, constants, media, shuffle, url, Config, DisplayConfig, MediaKind, QueryParams, SortKey,
};

#[derive(Parser, Debug)]
#[command(name = "galleryview")]
#[command(version)]
#[command(about = "Build gallery URLs, encode display configs, and shuffle listings")]
#[command(long_about = "\
galleryview - helpers for a file-gallery frontend

Builds query-string URLs for the gallery's data API and address bar,
encodes and decodes the compact display-config string, reproduces the
seeded random ordering, and classifies media files by extension.

EXAMPLES:
    # API url for the root folder
    galleryview api-url folder dir=

    # Against a local backend
    galleryview --server-url local api-url folder dir=/2023 page=1

    # Encode a display config with a fresh random seed
    galleryview encode --sort random --random-seed

    # Reproduce an ordering
    galleryview shuffle --seed 42 a.jpg b.jpg c.mp4

    # Using environment variables
    export GALLERYVIEW_SERVER_URL=/api
    export GALLERYVIEW_PLAY_SECS=8
    galleryview info
")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the data API url for a route and key=value params
    ApiUrl {
        /// API route, e.g. folder
        path: String,
        /// Query params as key=value
        #[arg(value_parser = url::parse_pair)]
        params: Vec<(String, String)>,
    },
    /// Print the address-bar query string for key=value params
    UiUrl {
        #[arg(value_parser = url::parse_pair)]
        params: Vec<(String, String)>,
    },
    /// Encode a display config
    Encode {
        #[arg(long, default_value_t = SortKey::Name)]
        sort: SortKey,
        #[arg(long)]
        reverse: bool,
        #[arg(long)]
        raw: bool,
        #[arg(long)]
        recursive: bool,
        /// Seed for random ordering
        #[arg(long, conflicts_with = "random_seed")]
        seed: Option<u64>,
        /// Pick a new random seed
        #[arg(long)]
        random_seed: bool,
    },
    /// Decode a display config string and print it as JSON
    Decode { value: String },
    /// Print items in the order a seed shuffles them to
    Shuffle {
        #[arg(long)]
        seed: u64,
        items: Vec<String>,
    },
    /// Print the media kind and content type of each file name
    Classify { names: Vec<String> },
    /// Print the active settings as JSON
    Info,
}

#[derive(Serialize)]
struct DecodedConfig {
    #[serde(flatten)]
    config: DisplayConfig,
    known_sort: bool,
}

#[derive(Serialize)]
struct Classification<'a> {
    name: &'a str,
    extension: String,
    kind: MediaKind,
    content_type: String,
}

#[derive(Serialize)]
struct Info<'a> {
    app_name: &'a str,
    server_url: &'a str,
    play_secs: u32,
    video_extensions: &'a [&'a str],
    sort_keys: Vec<&'a str>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "galleryview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    cli.config.validate()?;

    tracing::debug!(
        server_url = %cli.config.server_url,
        play_secs = cli.config.play_secs,
        "Loaded configuration"
    );

    let urls = cli.config.url_builder();

    match cli.command {
        Command::ApiUrl { path, params } => {
            let params: QueryParams = params.into_iter().collect();
            if params.get(url::DIR_PARAM).is_none() {
                tracing::warn!("No dir param given, the API will reject this request");
            }
            println!("{}", urls.api_url(&path, &params));
        }
        Command::UiUrl { params } => {
            let params: QueryParams = params.into_iter().collect();
            println!("{}", urls.ui_url(&params));
        }
        Command::Encode {
            sort,
            reverse,
            raw,
            recursive,
            seed,
            random_seed,
        } => {
            let rand_seed = if random_seed {
                shuffle::fresh_seed()
            } else {
                seed.unwrap_or_default()
            };
            let cfg = DisplayConfig {
                sort: sort.to_string(),
                reverse,
                raw,
                recursive,
                rand_seed,
            };
            println!("{}", codec::encode_config(&cfg));
        }
        Command::Decode { value } => {
            let config = codec::decode_config(&value);
            let decoded = DecodedConfig {
                known_sort: config.sort_key().is_some(),
                config,
            };
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
        Command::Shuffle { seed, mut items } => {
            shuffle::shuffle_in_place(&mut items, seed);
            for item in items {
                println!("{}", item);
            }
        }
        Command::Classify { names } => {
            for name in &names {
                let classification = Classification {
                    name,
                    extension: media::file_extension(name),
                    kind: MediaKind::of(name),
                    content_type: media::content_type(name),
                };
                println!("{}", serde_json::to_string(&classification)?);
            }
        }
        Command::Info => {
            let info = Info {
                app_name: constants::APP_NAME,
                server_url: cli.config.server_url.as_str(),
                play_secs: cli.config.play_secs,
                video_extensions: constants::VIDEO_EXTENSIONS,
                sort_keys: SortKey::ALL.iter().map(SortKey::as_str).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
