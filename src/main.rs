use clap::Parser;
use roman_numerals::utils::{logger, validation::Validate};
use roman_numerals::{CliConfig, ConversionEngine, NumeralConverter, OutputFormat, RomanError};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.validate().and_then(|_| config.settings()) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_logger(config.verbose, OutputFormat::Plain);
            fail(&e);
        }
    };

    logger::init_logger(settings.verbose, settings.format);
    tracing::debug!("CLI config: {:?}, settings: {:?}", config, settings);

    let engine = ConversionEngine::new(NumeralConverter::new());
    let output = engine
        .run(&config.numeral)
        .and_then(|conversion| conversion.render(settings.format));

    match output {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => fail(&e),
    }
}

fn fail(e: &RomanError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
