//! date-voiceover: speaks the date and time from recorded fragments.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use date_voiceover::catalog::FragmentCatalog;
use date_voiceover::config::Config;
use date_voiceover::player::{Playback, RodioPlayer, WavFileSink};
use date_voiceover::trimmer::SilenceTrimmer;
use date_voiceover::{DateVoiceOver, When};

#[derive(Parser, Debug)]
#[command(name = "date-voiceover", about = "Speak the date and time in Russian")]
struct Args {
    /// Path to config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Day of month to speak instead of today
    #[arg(long)]
    day: Option<u32>,

    /// Month to speak instead of the current one
    #[arg(long)]
    month: Option<u32>,

    /// Year, only used to check the day exists
    #[arg(long)]
    year: Option<i32>,

    /// Hour to speak instead of the current one
    #[arg(long)]
    hour: Option<u32>,

    /// Minute to speak instead of the current one
    #[arg(long)]
    minute: Option<u32>,

    /// Print the fragment keys and exit without loading audio
    #[arg(long)]
    dry_run: bool,

    /// Write the utterance to this WAV file instead of playing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn is_override(&self) -> bool {
        self.day.is_some()
            || self.month.is_some()
            || self.year.is_some()
            || self.hour.is_some()
            || self.minute.is_some()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load(args.config.as_deref());
    config.validate()?;
    let trimmer = SilenceTrimmer::new(&config.silence)?;

    let catalog = if args.dry_run {
        FragmentCatalog::new()
    } else {
        let catalog = FragmentCatalog::load(&config.fragments)?;
        catalog.verify()?;
        info!("Fragment catalog complete ({} clips)", catalog.len());
        catalog
    };

    let mut voice_over = DateVoiceOver::new(catalog, trimmer);
    let when = if args.is_override() {
        voice_over.set_date(
            args.day.unwrap_or(1),
            args.month.unwrap_or(1),
            args.year.unwrap_or(1970),
            args.hour.unwrap_or(0),
            args.minute.unwrap_or(0),
        )?;
        When::Override
    } else {
        When::Now
    };

    if args.dry_run {
        println!("{}", voice_over.utterance(when));
        return Ok(());
    }

    let output = args.output.or(config.output.wav_path);
    let player: Box<dyn Playback> = match output {
        Some(path) => Box::new(WavFileSink::new(path)),
        None => Box::new(RodioPlayer::open()?),
    };

    voice_over.speak(when, player.as_ref())?;
    Ok(())
}
