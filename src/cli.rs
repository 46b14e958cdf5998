//! Command-line front end.
//!
//! Every command writes its report to the given writer so it can be
//! exercised without a terminal.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use landmapper_core::{format_area, AreaUnit, EventBus, LatLng, ShapeKind};
use landmapper_designer::{AreaTool, MapEvent};
use landmapper_settings::Config;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "landmapper", version, about = "Measure land boundaries on a map")]
pub struct Args {
    /// Configuration file (.toml or .json); defaults to the platform config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Measure the ring through the given "lat,lng" vertices
    Area {
        #[arg(required = true, allow_hyphen_values = true)]
        vertices: Vec<LatLng>,
        /// Shape kind: rectangle or polygon
        #[arg(long, default_value = "polygon")]
        kind: ShapeKind,
        /// Print only this unit (m2, acres or hectares)
        #[arg(long)]
        unit: Option<AreaUnit>,
    },
    /// Validate a coordinate search and print the viewport target
    FlyTo {
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        #[arg(allow_hyphen_values = true)]
        longitude: String,
        /// Print the target as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a JSON array of map events through the area tool
    Replay { events: PathBuf },
    /// Print the effective configuration as TOML
    Config,
}

/// Execute `args`, writing the report to `out`
pub fn run<W: Write>(args: Args, out: &mut W) -> anyhow::Result<()> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    debug!(command = ?args.command, "Running command");

    match args.command {
        Command::Area {
            vertices,
            kind,
            unit,
        } => area(&config, kind, vertices, unit, out),
        Command::FlyTo {
            latitude,
            longitude,
            json,
        } => fly_to(&config, &latitude, &longitude, json, out),
        Command::Replay { events } => replay(&config, &events, out),
        Command::Config => {
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

fn area<W: Write>(
    config: &Config,
    kind: ShapeKind,
    vertices: Vec<LatLng>,
    unit: Option<AreaUnit>,
    out: &mut W,
) -> anyhow::Result<()> {
    let ctx = config.map_context(Arc::new(EventBus::new()));
    let mut tool = AreaTool::new();
    tool.commit(&ctx, kind, vertices)
        .context("Cannot measure these vertices")?;

    match unit {
        Some(unit) => writeln!(out, "{}", format_area(tool.area_sq_m(), unit))?,
        None => writeln!(out, "{}", tool.display())?,
    }
    Ok(())
}

fn fly_to<W: Write>(
    config: &Config,
    latitude: &str,
    longitude: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let ctx = config.map_context(Arc::new(EventBus::new()));
    let mut search = config.coordinate_search();
    let target = search
        .search(&ctx, latitude, longitude)
        .context("Invalid coordinates")?;

    if json {
        writeln!(out, "{}", serde_json::to_string(&target)?)?;
    } else {
        writeln!(
            out,
            "Fly to {} at zoom {} over {}s",
            target.center, target.zoom, target.duration_secs
        )?;
    }
    Ok(())
}

fn replay<W: Write>(config: &Config, path: &Path, out: &mut W) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let events: Vec<MapEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid event list in {}", path.display()))?;

    let ctx = config.map_context(Arc::new(EventBus::new()));
    let mut tool = AreaTool::new();

    // A rejected event leaves the tool unchanged; keep going
    for (i, event) in events.into_iter().enumerate() {
        let name = event.name();
        match tool.handle(&ctx, event) {
            Ok(()) => writeln!(out, "{:>3} {:<16} {}", i + 1, name, tool.display())?,
            Err(e) => writeln!(out, "{:>3} {:<16} rejected: {}", i + 1, name, e)?,
        }
    }
    writeln!(out, "Final: {} ({})", tool.display(), tool.phase())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use landmapper_core::ViewportTarget;
    use tempfile::TempDir;

    /// Config file with defaults, so tests never read the user's config
    fn config_args(dir: &TempDir, rest: &[&str]) -> Args {
        let path = dir.path().join("config.toml");
        if !path.exists() {
            Config::default().save_to_file(&path).unwrap();
        }
        let mut argv = vec!["landmapper", "--config", path.to_str().unwrap()];
        argv.extend_from_slice(rest);
        Args::try_parse_from(argv).unwrap()
    }

    fn run_to_string(args: Args) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_area_command() {
        let dir = TempDir::new().unwrap();
        let args = config_args(&dir, &["area", "0,0", "0,0.001", "0.001,0.001", "0.001,0"]);
        let output = run_to_string(args).unwrap();
        assert!(output.contains("m² ("));
        assert!(output.contains("Acres |"));
        assert!(output.contains("Hectares"));
    }

    #[test]
    fn test_area_command_single_unit() {
        let dir = TempDir::new().unwrap();
        let ring = ["0,0", "0,0.001", "0.001,0.001", "0.001,0"];

        let mut argv = vec!["area"];
        argv.extend_from_slice(&ring);
        argv.extend_from_slice(&["--unit", "ha"]);
        let output = run_to_string(config_args(&dir, &argv)).unwrap();
        assert!(output.trim().ends_with(" Hectares"));
        assert!(!output.contains("Acres"));

        argv.pop();
        argv.push("m2");
        let output = run_to_string(config_args(&dir, &argv)).unwrap();
        assert!(output.trim().ends_with(" m²"));

        let parsed = Args::try_parse_from(["landmapper", "area", "0,0", "--unit", "furlongs"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_area_command_negative_coordinates() {
        let dir = TempDir::new().unwrap();
        let args = config_args(&dir, &["area", "-1,-1", "-1,-0.999", "-0.999,-0.999"]);
        assert!(run_to_string(args).is_ok());
    }

    #[test]
    fn test_area_command_rejects_short_ring() {
        let dir = TempDir::new().unwrap();
        let args = config_args(&dir, &["area", "0,0", "0,1"]);
        let err = run_to_string(args).unwrap_err();
        assert!(err.downcast_ref::<landmapper_designer::ToolError>().is_some());
    }

    #[test]
    fn test_fly_to_json() {
        let dir = TempDir::new().unwrap();
        let args = config_args(&dir, &["fly-to", "28.6139", "77.2090", "--json"]);
        let output = run_to_string(args).unwrap();
        let target: ViewportTarget = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(target.center, LatLng::new(28.6139, 77.209));
        assert_eq!(target.request_id, 1);
        assert_eq!(target.zoom, 18);
    }

    #[test]
    fn test_fly_to_rejects_latitude() {
        let dir = TempDir::new().unwrap();
        let args = config_args(&dir, &["fly-to", "91", "0"]);
        assert!(run_to_string(args).is_err());
    }

    #[test]
    fn test_replay_command() {
        let dir = TempDir::new().unwrap();
        let events = dir.path().join("events.json");
        std::fs::write(
            &events,
            r#"[
                {"type": "draw_started", "kind": "polygon"},
                {"type": "draw_finished"},
                {"type": "vertex_placed", "point": {"lat": 0.0, "lng": 0.0}},
                {"type": "vertex_placed", "point": {"lat": 0.0, "lng": 0.001}},
                {"type": "vertex_placed", "point": {"lat": 0.001, "lng": 0.0}},
                {"type": "draw_finished"}
            ]"#,
        )
        .unwrap();

        let args = config_args(&dir, &["replay", events.to_str().unwrap()]);
        let output = run_to_string(args).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("rejected"));
        assert!(lines[0].contains("Draw on map to measure"));
        assert!(lines[5].contains("m²"));
        assert!(lines[6].contains("a shape is committed"));
    }

    #[test]
    fn test_config_command_prints_toml() {
        let dir = TempDir::new().unwrap();
        let output = run_to_string(config_args(&dir, &["config"])).unwrap();
        assert!(output.contains("[fly_to]"));
        assert_eq!(output, Config::default().to_toml().unwrap());
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let args = Args::try_parse_from(["landmapper", "config", "--config", "x.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(args.command, Command::Config));
    }
}
