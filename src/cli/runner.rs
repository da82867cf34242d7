use tracing::info;

use colorcloud::{PlotParams, plot_image_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Merge an optional preset with explicit flags; flags win.
fn resolve_params(args: &CliArgs) -> Result<PlotParams, AppError> {
    let mut params = match &args.params {
        Some(path) => PlotParams::from_json_file(path).map_err(|source| AppError::Preset {
            path: path.display().to_string(),
            source,
        })?,
        None => PlotParams::default(),
    };

    if let Some(plot) = args.plot {
        params.plot = plot;
    }
    if args.maxsize.is_some() {
        params.maxsize = args.maxsize;
    }
    if let Some(wsize) = args.wsize {
        params.wsize = wsize;
    }
    if args.at.is_some() {
        params.at = args.at;
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;
    info!("Resolved parameters: {:?}", params);

    let written = plot_image_to_path(&args.image, args.output.as_deref(), &params)?;
    info!("Successfully plotted: {:?} -> {:?}", args.image, written);

    Ok(())
}
