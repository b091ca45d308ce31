//! Command-line interface for datagen
//!
//! # Usage Examples
//!
//! ## Names
//! ```bash
//! datagen first-name
//! datagen --country ua --language ukr --count 3 full-name
//! ```
//!
//! ## Emails and credentials
//! ```bash
//! datagen email --uppercase --digits
//! datagen email --person-name --separator _ --domain @example.com
//! datagen password --length 16 --uppercase --digits --special
//! ```
//!
//! ## Raw requests
//! ```bash
//! datagen --seed 42 resolve "name(/generator/last_name)"
//! datagen resolve "name(/generator/first_name|/generator/last_name)" --correlated
//! ```
//!
//! Set `RUST_LOG=debug` to see which dataset files are read.

use anyhow::Context;
use clap::{Parser, Subcommand};
use datagen::{DatagenConfig, GeneratorOpts};
use datagen_generator::{CharClasses, DataGenerator, GeneratorError, RandomSource, Selection};

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "Locale-aware fake data generator for test automation")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: GeneratorOpts,

    /// Number of values to generate
    #[arg(long, default_value = "1")]
    count: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a first name
    FirstName,

    /// Generate a last name
    LastName,

    /// Generate a consistent first and last name
    FullName,

    /// Generate an email address
    Email {
        /// Allow uppercase letters in a random local part
        #[arg(long)]
        uppercase: bool,

        /// Allow digits in a random local part
        #[arg(long)]
        digits: bool,

        /// Domain including '@' (random when omitted)
        #[arg(long)]
        domain: Option<String>,

        /// Build the local part from a generated full name
        #[arg(long)]
        person_name: bool,

        /// Separator between name parts with --person-name
        #[arg(long, requires = "person_name")]
        separator: Option<String>,
    },

    /// Generate a password
    Password {
        /// Password length
        #[arg(long, default_value = "12")]
        length: usize,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include digits
        #[arg(long)]
        digits: bool,

        /// Include special characters
        #[arg(long)]
        special: bool,
    },

    /// Resolve a raw request such as "name(/generator/first_name)"
    Resolve {
        /// Request string: context(path|path...)
        request: String,

        /// Pick the same key position in every path
        #[arg(long)]
        correlated: bool,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = DatagenConfig::load(&cli.opts).context("Failed to load configuration")?;
    let mut generator = config
        .build_generator()
        .context("Failed to build generator")?;

    tracing::info!(
        "Generating {} value(s) for locale {}",
        cli.count,
        generator.locale()
    );

    for _ in 0..cli.count {
        let value = generate(&mut generator, &cli.command).map_err(|e| {
            tracing::error!("Generation failed: {e}");
            e
        })?;
        println!("{value}");
    }

    Ok(())
}

fn generate<R: RandomSource>(
    generator: &mut DataGenerator<R>,
    command: &Commands,
) -> Result<String, GeneratorError> {
    match command {
        Commands::FirstName => generator.name().first_name(),
        Commands::LastName => generator.name().last_name(),
        Commands::FullName => generator.name().full_name(),
        Commands::Email {
            uppercase,
            digits,
            domain,
            person_name,
            separator,
        } => {
            let mut email = generator.email();
            if *person_name {
                email.email_with_person_name(separator.as_deref(), domain.as_deref())
            } else {
                Ok(match domain {
                    Some(domain) => email.email_with_domain(*uppercase, *digits, domain),
                    None => email.email(*uppercase, *digits),
                })
            }
        }
        Commands::Password {
            length,
            uppercase,
            digits,
            special,
        } => Ok(generator
            .credentials()
            .password(*length, CharClasses::new(*uppercase, *digits, *special))),
        Commands::Resolve {
            request,
            correlated,
        } => {
            let selection = if *correlated {
                Selection::Correlated
            } else {
                Selection::Independent
            };
            generator.resolve(request, selection)
        }
    }
}
