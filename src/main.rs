use cipherdrill::cipher::Mode;
use cipherdrill::cli::{
    read_input, run_decrypt, run_encrypt, run_keygen, run_transform, CipherOptions,
    KeygenOptions, TransformOptions,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERDRILL_VERSION");
const BUILD: &str = env!("CIPHERDRILL_BUILD");
const PROFILE: &str = env!("CIPHERDRILL_PROFILE");
const GIT_HASH: &str = env!("CIPHERDRILL_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cipherdrill")]
#[command(author, about = "Control-sequence transformer and Vigenere ciphering machine", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message with a repeating key
    #[command(alias = "e")]
    Encrypt {
        /// Cipher key (letters only)
        #[arg(long, short, required = true)]
        key: String,

        /// Output orientation
        #[arg(long, default_value = "direct", value_parser = parse_mode)]
        mode: Mode,

        /// Message to encrypt (read from stdin if omitted)
        message: Option<String>,
    },

    /// Decrypt a message with a repeating key
    #[command(alias = "d")]
    Decrypt {
        /// Cipher key (letters only)
        #[arg(long, short, required = true)]
        key: String,

        /// Output orientation
        #[arg(long, default_value = "direct", value_parser = parse_mode)]
        mode: Mode,

        /// Message to decrypt (read from stdin if omitted)
        message: Option<String>,
    },

    /// Apply --double-next / --discard-prev tokens to a JSON array
    #[command(alias = "t")]
    Transform {
        /// Pretty-print the resulting array
        #[arg(long)]
        pretty: bool,

        /// JSON array (read from stdin if omitted)
        input: Option<String>,
    },

    /// Generate a random key
    #[command(alias = "k")]
    Keygen {
        /// Number of letters
        #[arg(long, default_value = "16")]
        length: usize,
    },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.version {
        println!("cipherdrill {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { key, mode, message } => read_input(message)
            .and_then(|message| run_encrypt(&message, &CipherOptions { key, mode })),

        Commands::Decrypt { key, mode, message } => read_input(message)
            .and_then(|message| run_decrypt(&message, &CipherOptions { key, mode })),

        Commands::Transform { pretty, input } => read_input(input)
            .and_then(|input| run_transform(&input, &TransformOptions { pretty })),

        Commands::Keygen { length } => run_keygen(&KeygenOptions { length }),
    };

    match result {
        Ok(output) => {
            debug!("writing {} bytes", output.len());
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
