//! Camera preset listing

use anyhow::{Context, Result};
use clap::Args;
use cubeman_anim::{CameraConfig, CameraMode, STARTUP_CAMERA};
use log::warn;
use serde::Serialize;

use super::OutputFormat;
use crate::utils::{add_table_row, create_table, format_vec3};

#[derive(Args, Debug)]
pub struct CameraArgs {
    /// Show a single mode (1 side, 2 over-the-shoulder, 3 front; others fall back to front)
    #[arg(short, long)]
    pub mode: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct CameraRow {
    mode: Option<u32>,
    name: &'static str,
    config: CameraConfig,
}

fn rows(mode: Option<u32>) -> Vec<CameraRow> {
    match mode {
        Some(mode) => {
            if !CameraMode::is_known(mode) {
                warn!("Unknown camera mode {mode}, using front view");
            }
            let resolved = CameraMode::from_index(mode);
            vec![CameraRow {
                mode: Some(resolved.index()),
                name: resolved.name(),
                config: resolved.config(),
            }]
        }
        None => {
            let mut rows = vec![CameraRow {
                mode: None,
                name: "startup",
                config: STARTUP_CAMERA,
            }];
            rows.extend(CameraMode::ALL.iter().map(|m| CameraRow {
                mode: Some(m.index()),
                name: m.name(),
                config: m.config(),
            }));
            rows
        }
    }
}

pub fn execute(args: CameraArgs) -> Result<()> {
    let rows = rows(args.mode);

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&rows).context("Failed to serialize cameras")?;
            println!("{json}");
        }
        OutputFormat::Table => {
            let mut table = create_table(&["Mode", "Name", "Eye", "Center", "Up"]);
            for row in &rows {
                add_table_row(
                    &mut table,
                    vec![
                        row.mode.map_or_else(|| "-".to_string(), |m| m.to_string()),
                        row.name.to_string(),
                        format_vec3(row.config.eye),
                        format_vec3(row.config.center),
                        format_vec3(row.config.up),
                    ],
                );
            }
            table.printstd();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeman_anim::select_camera;

    #[test]
    fn test_all_presets_listed_after_startup() {
        let rows = rows(None);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].name, "startup");
        assert_eq!(rows[3].name, "front");
    }

    #[test]
    fn test_unknown_mode_resolves_to_front() {
        let rows = rows(Some(9));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mode, Some(3));
        assert_eq!(rows[0].config, select_camera(3));
    }
}
