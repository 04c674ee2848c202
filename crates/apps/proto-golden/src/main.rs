use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use proto_runtime::{DynamicMessage, Schema};
use proto_test_util::unittest::{self, TEST_ALL_EXTENSIONS, TEST_ALL_TYPES, TEST_FIELD_ORDERINGS};
use proto_test_util::{
    expect_all_fields_and_extensions_in_order, set_all_extensions, set_all_fields,
    set_all_fields_and_extensions, FixtureError, GoldenConfig, GoldenFileLocator,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "proto-golden", about = "Unit-test fixtures and golden file checks")]
struct Cli {
    /// TOML file overriding the golden file layout.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to start the source-root search from.
    #[arg(long)]
    start_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Serialize a fixture; hex to stdout unless --out is given.
    Dump {
        #[arg(long, value_enum)]
        fixture: Fixture,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build the mixed inline/extension fixture and check its field order.
    VerifyOrder,
    /// Compare a fixture with a golden file.
    CheckGolden {
        name: String,
        #[arg(long, value_enum, default_value_t = Fixture::AllTypes)]
        fixture: Fixture,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Fixture {
    AllTypes,
    AllExtensions,
    FieldOrderings,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("proto-golden error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let schema = unittest::schema().context("building the unit-test schema")?;
    match cli.command {
        Command::Dump { fixture, out } => {
            let bytes = build_fixture(&schema, fixture)?;
            match out {
                Some(path) => {
                    fs::write(&path, &bytes)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
                }
                None => println!("{}", hex::encode(&bytes)),
            }
        }
        Command::VerifyOrder => {
            let bytes = build_fixture(&schema, Fixture::FieldOrderings)?;
            expect_all_fields_and_extensions_in_order(&schema, &bytes)?;
            println!("canonical order ok ({} bytes)", bytes.len());
        }
        Command::CheckGolden { name, fixture } => {
            let locator = locator(cli.config, cli.start_dir)?;
            let bytes = build_fixture(&schema, fixture)?;
            locator.compare_golden(&name, &bytes)?;
            println!("{name}: matches {fixture:?}");
        }
    }
    Ok(())
}

fn build_fixture(schema: &Schema, fixture: Fixture) -> Result<Vec<u8>> {
    let (type_name, populate): (&str, fn(&mut DynamicMessage) -> Result<(), FixtureError>) =
        match fixture {
            Fixture::AllTypes => (TEST_ALL_TYPES, set_all_fields),
            Fixture::AllExtensions => (TEST_ALL_EXTENSIONS, set_all_extensions),
            Fixture::FieldOrderings => (TEST_FIELD_ORDERINGS, set_all_fields_and_extensions),
        };
    let mut message = DynamicMessage::new(schema, type_name)?;
    populate(&mut message).with_context(|| format!("populating {type_name}"))?;
    Ok(message.encode_to_vec())
}

fn locator(config: Option<PathBuf>, start_dir: Option<PathBuf>) -> Result<GoldenFileLocator> {
    let config = match config {
        Some(path) => GoldenConfig::from_path(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GoldenConfig::default(),
    };
    let locator = GoldenFileLocator::new(config);
    Ok(match start_dir {
        Some(dir) => locator.with_start_dir(dir),
        None => locator,
    })
}
