//! currency-validator CLI
//!
//! Validate and format currency amounts from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Parse an amount with the default locale
//! currency-validator parse '$1,234.56'
//!
//! # Parse leniently with an explicit locale, as JSON
//! currency-validator parse '1.234,56 € netto' --locale de_DE --lenient --format json
//!
//! # Format an amount
//! currency-validator format 1234.5 --locale en_IN
//!
//! # Validate a file of amounts
//! currency-validator batch --input amounts.json
//! ```

use currency_validator::config::ValidatorConfig;
use currency_validator::core::locale::Locale;
use currency_validator::error::ParseError;
use currency_validator::validation::currency::CurrencyValidator;
use rust_decimal::Decimal;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"currency-validator: locale-aware currency amount validation

USAGE:
    currency-validator <COMMAND> [OPTIONS]

COMMANDS:
    parse <TEXT>     Validate a currency amount and print its decimal value
    format <AMOUNT>  Render a decimal amount in a locale's currency format
    rule             Show the currency format rule of a locale
    batch            Validate every amount in a JSON file
    help             Show this message

OPTIONS:
    --locale <TAG>      Locale such as en_US or de-DE (default: from LC_ALL/LC_MONETARY/LANG)
    --lenient           Accept trailing text and missing symbols (parse)
    --input <FILE>      Path to JSON amounts file (batch)
    --format <FORMAT>   Output format: text (default) or json (parse, rule, batch)

LOGGING:
    Set RUST_LOG=debug to see locale resolution.

EXAMPLES:
    currency-validator parse '$1,234.56' --locale en_US
    currency-validator parse '$1,234.56 extra' --locale en_US --lenient
    currency-validator format -1234.5 --locale de_DE
    currency-validator rule --locale ja_JP --format json
    currency-validator batch --input amounts.json --format json"#
    );
}

/// JSON schema for batch input.
#[derive(serde::Deserialize)]
struct AmountsFile {
    #[serde(flatten)]
    config: ValidatorConfig,
    amounts: Vec<String>,
}

/// JSON output schema for one validated amount.
#[derive(serde::Serialize)]
struct ValidationOutput {
    input: String,
    locale: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ParseError>,
}

impl ValidationOutput {
    fn new(input: &str, locale: &Locale, result: Result<Decimal, ParseError>) -> Self {
        let (amount, error) = match result {
            Ok(amount) => (Some(amount), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            input: input.to_string(),
            locale: locale.to_string(),
            valid: amount.is_some(),
            amount,
            error,
        }
    }

    fn print_text(&self) {
        match (&self.amount, &self.error) {
            (Some(amount), _) => println!("{}\t{}", self.input, amount),
            (None, Some(e)) => println!("{}\tINVALID: {}", self.input, e),
            (None, None) => println!("{}\tINVALID", self.input),
        }
    }
}

/// Options shared by all commands.
struct Options {
    positional: Option<String>,
    locale: Option<Locale>,
    lenient: bool,
    input: Option<String>,
    format: String,
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options {
        positional: None,
        locale: None,
        lenient: false,
        input: None,
        format: "text".to_string(),
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--locale" => {
                i += 1;
                let tag = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--locale requires a locale tag");
                    process::exit(1);
                });
                options.locale = Some(tag.parse().unwrap_or_else(|e| {
                    eprintln!("Invalid locale '{}': {}", tag, e);
                    process::exit(1);
                }));
            }
            "--lenient" => options.lenient = true,
            "--input" => {
                i += 1;
                options.input = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                options.format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            // Anything not starting with "--" is the positional, so "-12.50" works
            arg if options.positional.is_none() && !arg.starts_with("--") => {
                options.positional = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn require_positional(options: &Options, what: &str) -> String {
    options.positional.clone().unwrap_or_else(|| {
        eprintln!("Error: <{}> is required", what);
        process::exit(1);
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        process::exit(1);
    })
}

fn cmd_parse(args: &[String]) {
    let options = parse_options(args);
    let text = require_positional(&options, "TEXT");
    let locale = options.locale.clone().unwrap_or_else(Locale::default_locale);

    let validator = if options.lenient {
        CurrencyValidator::new(false)
    } else {
        CurrencyValidator::get_instance().clone()
    };
    let output = ValidationOutput::new(&text, &locale, validator.validate(&text, Some(&locale)));

    if options.format == "json" {
        println!("{}", to_json(&output));
    } else {
        output.print_text();
    }
    if !output.valid {
        process::exit(2);
    }
}

fn cmd_format(args: &[String]) {
    let options = parse_options(args);
    let raw = require_positional(&options, "AMOUNT");
    let amount: Decimal = raw.parse().unwrap_or_else(|e| {
        eprintln!("Invalid amount '{}': {}", raw, e);
        process::exit(1);
    });
    let locale = options.locale.unwrap_or_else(Locale::default_locale);

    println!(
        "{}",
        CurrencyValidator::get_instance().format(amount, Some(&locale))
    );
}

fn cmd_rule(args: &[String]) {
    let options = parse_options(args);
    let locale = options.locale.unwrap_or_else(Locale::default_locale);
    let rule = CurrencyValidator::get_instance().format_rule(Some(&locale));

    if options.format == "json" {
        println!("{}", to_json(&rule));
    } else {
        println!("Locale: {}", locale);
        println!("{}", rule);
    }
}

fn cmd_batch(args: &[String]) {
    let options = parse_options(args);
    let path = options.input.clone().unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let content = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });
    let file: AmountsFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "locale": "de_DE",
  "strict": true,
  "amounts": ["1.234,56 €", "-12,00 €"]
}}"#
        );
        process::exit(1);
    });

    let locale = file.config.resolved_locale();
    let validator = file.config.validator();
    let outputs: Vec<ValidationOutput> = file
        .amounts
        .iter()
        .map(|text| ValidationOutput::new(text, &locale, validator.validate(text, Some(&locale))))
        .collect();
    let invalid = outputs.iter().filter(|o| !o.valid).count();
    log::info!(
        "validated {} amounts for {}, {} invalid",
        outputs.len(),
        locale,
        invalid
    );

    if options.format == "json" {
        println!("{}", to_json(&outputs));
    } else {
        for output in &outputs {
            output.print_text();
        }
        println!("\n{} of {} amounts valid", outputs.len() - invalid, outputs.len());
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "parse" => cmd_parse(rest),
        "format" => cmd_format(rest),
        "rule" => cmd_rule(rest),
        "batch" => cmd_batch(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
