use anyhow::Result;
use ict_core::{list_operation, Config, OutputFormat, OutputFormatter, TargetKind};

pub fn handle_list(config: &Config, kind: TargetKind, output: OutputFormat) -> Result<i32> {
    let result = list_operation(config, kind)?;
    print!("{}", result.format(output));
    Ok(0)
}
