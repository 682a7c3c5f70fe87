use std::env;
use std::process::ExitCode;

use log::{error, info};

use flatraster::output::save_frame;
use flatraster::{Engine, Mesh, RenderConfig};

const DEFAULT_OUTPUT: &str = "output.tga";
const USAGE: &str = "usage: flatraster <model.obj> [output image] [config.ron]";

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(model_path) = args.first() else {
        return Err(USAGE.to_string());
    };
    let output_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);
    let config = match args.get(2) {
        Some(path) => RenderConfig::load(path).map_err(|e| format!("{}: {}", path, e))?,
        None => RenderConfig::default(),
    };

    let mut mesh = Mesh::from_obj(model_path).map_err(|e| format!("{}: {}", model_path, e))?;
    info!(
        "loaded '{}' from {} ({} vertices, {} faces)",
        mesh.name(),
        model_path,
        mesh.vertices().len(),
        mesh.faces().len()
    );
    if config.fit_to_unit_cube {
        mesh.fit_to_unit_cube();
    }

    let engine = Engine::from_config(&config);
    let (mut frame, _stats) = if config.parallel {
        engine.render_parallel(&mesh)
    } else {
        engine.render(&mesh)
    };

    if config.flip_vertically {
        frame.flip_vertically();
    }
    save_frame(&frame, output_path).map_err(|e| format!("{}: {}", output_path, e))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
