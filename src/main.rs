use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
mod auth;
mod logging;
use logging::LogFormat;
use passproof::{HashConfig, PasswordHasher, Prf, Verification};

#[derive(Debug, clap::Args)]
struct HashArgs {
    /// PRF used inside PBKDF2: sha1, sha256 or sha512 (default: sha256)
    #[arg(long, env = "PASSPROOF_PRF")]
    prf: Option<Prf>,

    /// PBKDF2 iteration count (default: 1000)
    #[arg(long, env = "PASSPROOF_ITERATIONS")]
    iterations: Option<u32>,

    /// Salt length in bytes, at least 16 (default: 16)
    #[arg(long = "salt-len", env = "PASSPROOF_SALT_LEN")]
    salt_len: Option<usize>,
}

impl HashArgs {
    fn to_config(&self) -> Result<HashConfig> {
        let default = HashConfig::default();

        HashConfig::new(
            self.prf.unwrap_or(default.prf()),
            self.iterations.unwrap_or(default.iterations()),
            self.salt_len.unwrap_or(default.salt_len()),
        )
        .context("invalid hash parameters")
    }
}

#[derive(Debug, Parser)]
#[command(name = "passproof")]
#[command(
    version,
    about = "Create and check self-describing PBKDF2 password hashes."
)]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password and prints the stored form
    Hash {
        #[command(flatten)]
        params: HashArgs,
    },

    /// Checks a password against a stored hash
    #[command(arg_required_else_help = true)]
    Verify {
        hash: String,

        #[command(flatten)]
        params: HashArgs,
    },

    /// Shows the parameters recorded in a stored hash
    #[command(arg_required_else_help = true)]
    Inspect {
        hash: String,

        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.log_format);

    match args.command {
        Commands::Hash { params } => {
            let hasher = PasswordHasher::new(params.to_config()?);
            let password = auth::read_new_password_with_confirmation()?;
            let stored = hasher.hash(&password).context("failed to hash password")?;
            println!("{stored}");
        }
        Commands::Verify { hash, params } => {
            let hasher = PasswordHasher::new(params.to_config()?);
            let password = auth::read_password()?;
            match hasher.verify_detailed(hash.trim(), &password) {
                Verification::Success => println!("password verified"),
                Verification::SuccessRehashNeeded => {
                    println!("password verified");
                    println!("rehash recommended: stored parameters are weaker than configured");
                }
                Verification::Failed => bail!("password does not match"),
            }
        }
        Commands::Inspect { hash, json } => {
            let info = passproof::inspect(hash.trim()).context("unreadable password hash")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("version     {}", info.version);
                println!("prf         {}", info.prf);
                println!("iterations  {}", info.iterations);
                println!("salt        {} bytes", info.salt_len);
                println!("subkey      {} bytes", info.subkey_len);
            }
        }
    }

    Ok(())
}
