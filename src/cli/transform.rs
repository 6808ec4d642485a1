use crate::error::Result;
use crate::transform::transform_value;
use log::info;
use serde_json::Value;

/// Options for the transform command
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub pretty: bool,
}

/// Parse `input` as JSON, transform it and render the result as JSON
pub fn run_transform(input: &str, options: &TransformOptions) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    let output = transform_value(&value)?;
    info!("Transform produced {} elements", output.len());

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}
