use pencil_sketch::config::sketch::load_config;
use pencil_sketch::image::io::{load_rgba_image, save_rgba_image, write_report};
use pencil_sketch::SketchPipeline;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let original = load_rgba_image(&config.input)?;
    let mut pipeline = SketchPipeline::new();
    let outcome = pipeline.process_with_diagnostics(&original, &config.params);

    save_rgba_image(&outcome.image, &config.output.image)?;
    println!(
        "Saved {:?} sketch ({}x{}, intensity {}) to {}",
        outcome.report.mode,
        outcome.report.input.width,
        outcome.report.input.height,
        outcome.report.intensity,
        config.output.image.display()
    );

    if let Some(path) = &config.output.report_json {
        write_report(path, &outcome.report)?;
        println!("Report written to {}", path.display());
    } else {
        for stage in &outcome.report.timings.stages {
            println!("  {:<12} {:.3} ms", stage.stage, stage.elapsed_ms);
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: sketch_demo <config.json>".to_string()
}
