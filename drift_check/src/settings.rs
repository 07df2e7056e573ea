use crate::cli::Args;
use common::config::DriftConfig;
use linematch::{MatchOptions, OptionsError};

/// Match options from the environment layer. Unset values keep the library defaults.
pub fn from_config(config: &DriftConfig) -> MatchOptions {
    let mut options = MatchOptions::default();
    if let Some(marker) = &config.fast_forward_marker {
        options.fast_forward_marker = marker.clone();
    }
    if let Some(delimiter) = &config.fast_forward_delimiter {
        options.fast_forward_delimiter = (!delimiter.is_empty()).then(|| delimiter.clone());
    }
    if let Some(context) = config.context_lines {
        options.context_lines = context;
    }
    if let Some(max) = config.max_file_size {
        options.max_file_size = max;
    }
    options
}

/// Flags over options file over environment. An options file replaces the environment layer
/// as a whole; its missing fields take the library defaults.
pub fn resolve(args: &Args, config: &DriftConfig) -> Result<MatchOptions, OptionsError> {
    let mut options = match &args.options {
        Some(path) => MatchOptions::from_json_file(path)?,
        None => from_config(config),
    };

    if let Some(marker) = &args.marker {
        options.fast_forward_marker = marker.clone();
    }
    if args.no_delimiter {
        options.fast_forward_delimiter = None;
    } else if let Some(delimiter) = &args.delimiter {
        options.fast_forward_delimiter = Some(delimiter.clone());
    }
    if let Some(context) = args.context {
        options.context_lines = context;
    }

    options.validate()?;
    Ok(options)
}
