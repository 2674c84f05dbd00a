use anyhow::Result;
use ict_core::{resolve_operation, Config, OutputFormat, OutputFormatter, TargetKind};

use crate::ui::{self, ColorChoice};

pub fn handle_resolve(
    config: &Config,
    kind: TargetKind,
    target: &str,
    fuzzy: bool,
    output: OutputFormat,
    colors: ColorChoice,
) -> Result<i32> {
    let result = resolve_operation(config, kind, target, fuzzy)?;
    let rendered = result.format(output);

    match output {
        OutputFormat::Json => println!("{rendered}"),
        OutputFormat::Summary => {
            // The explanation goes to stderr so `$(ict resolve ...)` captures only the label
            if !result.message.is_empty() {
                eprintln!("{}", ui::info(&result.message, colors.stderr));
            }
            println!("{}", ui::target(rendered.trim_end(), colors.stdout));
        },
    }

    Ok(0)
}
