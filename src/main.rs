use std::error::Error;
use subnet_explain::logging::init_logging;
use subnet_explain::output::{render_reports, reports_to_json};
use subnet_explain::{run, Config, OutputFormat};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let mut config = Config::from_env()?;
    init_logging(config.log_level)?;
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        config = config.with_inputs(args);
    }

    let reports = run(&config);
    match config.output {
        OutputFormat::Text => println!("{}", render_reports(&reports, config.explain)),
        OutputFormat::Json => println!("{}", reports_to_json(&reports)?),
    }

    Ok(())
}
