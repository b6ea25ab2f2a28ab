use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use uconv_core::*;

#[derive(Parser)]
#[command(name = "uconv")]
#[command(about = "Smart unit converter for weight, temperature, distance and time", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available categories
    Categories {
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// List the conversions of a category
    List {
        category: String,

        #[arg(long)]
        json: bool,
    },

    /// Convert a single value
    Convert {
        category: String,

        /// Conversion label, e.g. "kg → lb"
        conversion: String,

        /// Value to convert; "12.5" and "12,5" are both accepted
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[arg(long)]
        json: bool,
    },

    /// Pick category, conversion and value from menus (default)
    Interactive,
}

#[derive(Serialize)]
struct ConversionOutput<'a> {
    category: &'a str,
    conversion: &'a str,
    input: &'a str,
    result: String,
}

fn main() -> ExitCode {
    // Initialize logging
    uconv_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Command failed: {:?}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = get_default_registry();
    let errors = registry.validate();
    if !errors.is_empty() {
        eprintln!("Registry validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::RegistryValidation("Invalid registry".into()));
    }

    match cli.command {
        Some(Commands::Categories { json }) => cmd_categories(registry, json),
        Some(Commands::List { category, json }) => cmd_list(registry, &category, json),
        Some(Commands::Convert {
            category,
            conversion,
            value,
            json,
        }) => cmd_convert(registry, &category, &conversion, &value, json),
        Some(Commands::Interactive) | None => {
            let config = match cli.config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            cmd_interactive(registry, &config)
        }
    }
}

fn cmd_categories(registry: &Registry, json: bool) -> Result<()> {
    print_names(&registry.list_categories(), json)
}

fn cmd_list(registry: &Registry, category: &str, json: bool) -> Result<()> {
    let labels = registry.list_conversions(category)?;
    print_names(&labels, json)
}

fn cmd_convert(
    registry: &Registry,
    category: &str,
    conversion: &str,
    value: &str,
    json: bool,
) -> Result<()> {
    let result = registry.convert(category, conversion, value)?;

    if json {
        let output = ConversionOutput {
            category,
            conversion,
            input: value,
            result,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn print_names(names: &[&str], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_interactive(registry: &Registry, config: &Config) -> Result<()> {
    let start = config
        .startup_category(registry)
        .ok_or_else(|| Error::RegistryValidation("Registry has no categories".into()))?;
    let mut state = ConverterState::new(registry, start)?;
    state.set_value(config.ui.initial_value.clone());

    println!("Smart Unit Converter");
    println!("Choose a category, conversion type, and enter a value.");
    println!("Tip: You can use decimals, e.g. 12.5 or 12,5");
    println!("Enter 'q' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print_menu(&registry.list_categories(), state.category());
        let Some(answer) = prompt(&mut lines, &format!("Category [{}]", state.category()))? else {
            break;
        };
        if !answer.is_empty() {
            let chosen = pick(&registry.list_categories(), &answer);
            if let Err(err) = state.select_category(&chosen) {
                report(&err);
                continue;
            }
        }

        print_menu(&state.conversions(), state.conversion());
        let Some(answer) = prompt(&mut lines, &format!("Conversion [{}]", state.conversion()))?
        else {
            break;
        };
        if !answer.is_empty() {
            let chosen = pick(&state.conversions(), &answer);
            if let Err(err) = state.select_conversion(&chosen) {
                report(&err);
                continue;
            }
        }

        let Some(answer) = prompt(&mut lines, &format!("Value [{}]", state.value()))? else {
            break;
        };
        if !answer.is_empty() {
            state.set_value(answer);
        }

        match state.convert() {
            Ok(result) => println!("Result: {}", result),
            Err(err) => report(&err),
        }
    }

    println!();
    Ok(())
}

fn print_menu(options: &[&str], current: &str) {
    for (i, option) in options.iter().enumerate() {
        let marker = if *option == current { "*" } else { " " };
        println!(" {} {}. {}", marker, i + 1, option);
    }
}

/// Read one trimmed answer; `None` on end of input or `q`
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    match lines.next() {
        None => Ok(None),
        Some(line) => {
            let answer = line?.trim().to_string();
            if answer.eq_ignore_ascii_case("q") {
                Ok(None)
            } else {
                Ok(Some(answer))
            }
        }
    }
}

/// Resolve a menu answer given either as a 1-based number or as the name itself
fn pick(options: &[&str], answer: &str) -> String {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map(|s| s.to_string())
        .unwrap_or_else(|| answer.to_string())
}

fn report(err: &ConvertError) {
    match err.severity() {
        Severity::Warning => println!("⚠ Invalid input: {}", err.user_message()),
        Severity::Error => println!("✗ Error: {}", err.user_message()),
    }
}
