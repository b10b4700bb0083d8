use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a video, translate it and show the result
    Process {
        /// Input video file
        #[arg(short, long)]
        input: PathBuf,

        /// Write the session history as JSON
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Translate every video in a directory, one after another
    Batch {
        /// Input directory containing video files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Write the session history as JSON
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Upload a video to the media host and print its hosted URL
    Upload {
        /// Input video file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Request a translation for an already hosted video
    Fetch {
        /// Hosted video URL
        #[arg(short, long)]
        url: String,
    },

    /// Print the thumbnail URL derived from a hosted video URL
    Thumbnail {
        /// Hosted video URL
        #[arg(short, long)]
        url: String,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Output TOML file
        #[arg(short, long, default_value = "signai.toml")]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process() {
        let args = Args::try_parse_from(["signai", "-v", "process", "--input", "clip.mov"]).unwrap();
        assert!(args.verbose);
        match args.command {
            Commands::Process { input, history } => {
                assert_eq!(input, PathBuf::from("clip.mov"));
                assert!(history.is_none());
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_parse_init_config_default_output() {
        let args = Args::try_parse_from(["signai", "init-config"]).unwrap();
        match args.command {
            Commands::InitConfig { output } => assert_eq!(output, PathBuf::from("signai.toml")),
            _ => panic!("expected init-config command"),
        }
    }

    #[test]
    fn test_fetch_requires_url() {
        assert!(Args::try_parse_from(["signai", "fetch"]).is_err());
    }
}
