use crate::config::GeneratorConfig;
use crate::emit;
use crate::errors::GenError;
use crate::generator::SequenceBuilder;
use std::io::Write;

use super::command::Command;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Plain,
    Json,
}

pub fn run(cfg: &GeneratorConfig, cmd: Command, out: &mut dyn Write) -> Result<(), GenError> {
    run_with_format(cfg, cmd, OutputMode::Plain, out)
}

pub fn run_with_format(
    cfg: &GeneratorConfig,
    cmd: Command,
    mode: OutputMode,
    out: &mut dyn Write,
) -> Result<(), GenError> {
    let builder = SequenceBuilder::new(cfg.clone())?;
    match cmd {
        Command::Generate { output: None } => {
            // the generated text is the output; mode doesn't apply
            emit::write_to(&builder.build(), out)
        }
        Command::Generate { output: Some(path) } => {
            let seq = builder.build();
            emit::write_file(&seq, &path)?;
            let count = seq.explicit.len() + seq.recursive.len();
            match mode {
                OutputMode::Json => {
                    let json = serde_json::json!({
                        "action": "generated",
                        "path": path.display().to_string(),
                        "definitions": count,
                    });
                    writeln!(out, "{json}")?;
                }
                OutputMode::Plain => writeln!(out, "generated {count} definitions -> {}", path.display())?,
            }
            Ok(())
        }
        Command::Definition { index } => {
            let def = builder
                .definition(index)
                .ok_or(GenError::IndexOutOfRange { index, max_index: cfg.max_index })?;
            match mode {
                OutputMode::Json => {
                    let json = serde_json::json!({
                        "index": def.index,
                        "regime": def.regime.as_str(),
                        "name": def.name,
                        "body": def.body,
                    });
                    writeln!(out, "{json}")?;
                }
                OutputMode::Plain => writeln!(out, "{}", def.line())?,
            }
            Ok(())
        }
        Command::Header => {
            let header = builder.dispatch_header();
            match mode {
                OutputMode::Json => writeln!(out, "{}", serde_json::json!({ "header": header }))?,
                OutputMode::Plain => writeln!(out, "{header}")?,
            }
            Ok(())
        }
        Command::ShowConfig => {
            match mode {
                OutputMode::Json => {
                    let json = serde_json::to_string_pretty(cfg).map_err(|e| GenError::Config(e.to_string()))?;
                    writeln!(out, "{json}")?;
                }
                OutputMode::Plain => {
                    let text = toml::to_string(cfg).map_err(|e| GenError::Config(e.to_string()))?;
                    write!(out, "{text}")?;
                }
            }
            Ok(())
        }
    }
}
