use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use overlap_check::config::OverlapConfig;
use overlap_check::io;
use overlap_check::io::cli::Cli;
use overlap_check::io::output::OverlapOutput;
use overlap_check::io::read_scene;
use overlap_check::io::scene_to_svg::scene_to_svg;
use overlap_check::report::{evaluate_scene, format_result};
use rect_overlap::io::import::import_scene;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            OverlapConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed OverlapConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    let ext_scene = read_scene(args.input_file.as_path())?;
    let rects = import_scene(&ext_scene)?;
    let results = evaluate_scene(&rects, config.tolerant);

    for result in &results {
        println!("{}", format_result(result));
    }

    let Some(output_folder) = args.output_folder else {
        return Ok(());
    };

    if !output_folder.exists() {
        fs::create_dir_all(&output_folder).with_context(|| {
            format!("could not create output folder: {}", output_folder.display())
        })?;
    }

    if config.svg_export {
        let svg_path = output_folder.join(format!("scene_{input_file_stem}.svg"));
        let svg = scene_to_svg(&rects, &results, config.svg_draw_options, &ext_scene.name);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    {
        let output = OverlapOutput {
            scene: ext_scene,
            results,
            config,
        };

        let report_path = output_folder.join(format!("report_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&report_path))?;
    }

    Ok(())
}
