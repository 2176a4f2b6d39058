// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Iris settings CLI.
//!
//! Inspect and edit the capture-settings surface from the command line. This
//! binary is also the reference view adapter: it wires the filesystem
//! snapshot store and the device capability provider into the core store,
//! subscribes for change notifications, and renders derived display state.

use anyhow::Result;
use clap::Parser;
use iris_settings::bounds::{JPEG_QUALITY_MAX, JPEG_QUALITY_MIN, PREVIEW_QUALITY_MAX};
use iris_settings::{
    derived, CapabilityProvider, SettingKey, SettingValue, SettingsStore,
};
use iris_settings_fs::FsSnapshotStore;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Settings directory (defaults to the platform config dir)
    #[clap(long)]
    config_dir: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Show every setting with its display value
    Show,
    /// Print one setting's raw value
    Get {
        /// Setting name, e.g. `jpegQuality`
        name: String,
    },
    /// Write one setting (an integer, or `true`/`false` for toggles)
    Set {
        /// Setting name, e.g. `jpegQuality`
        name: String,
        /// New value; slider values are clamped into range
        value: String,
    },
    /// Restore compiled-in defaults
    Reset,
    /// Print the enforced ranges
    Bounds,
}

/// Device memory read from `/proc/meminfo` (Linux). Reports nothing on
/// platforms without it, leaving the policy maximum in force.
struct ProcMemInfo;

impl CapabilityProvider for ProcMemInfo {
    fn total_memory_mb(&self) -> Option<i64> {
        let text = std::fs::read_to_string("/proc/meminfo").ok()?;
        let line = text.lines().find(|l| l.starts_with("MemTotal:"))?;
        let kb: i64 = line.split_whitespace().nth(1)?.parse().ok()?;
        Some(kb / 1024)
    }
}

fn parse_value(raw: &str) -> Result<SettingValue> {
    if let Ok(on) = raw.parse::<bool>() {
        return Ok(SettingValue::Bool(on));
    }
    let v: i64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("expected an integer or true/false, got {raw:?}"))?;
    Ok(SettingValue::Int(v))
}

fn show(store: &SettingsStore<FsSnapshotStore>) {
    let dual = store
        .value_of(SettingKey::DualExposureControls)
        .as_bool()
        .unwrap_or(false);
    for key in SettingKey::ALL {
        let text = derived::display_text(key, store.value_of(key));
        if key == SettingKey::CameraPreviewQuality
            && !derived::preview_quality_slider_enabled(dual)
        {
            println!("{:24} {text} (locked)", key.as_str());
        } else {
            println!("{:24} {text}", key.as_str());
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let sink = match &args.config_dir {
        Some(dir) => FsSnapshotStore::with_base(dir),
        None => FsSnapshotStore::new()?,
    };
    let mut store = SettingsStore::new(sink);
    store.load();
    if let Some(total_mb) = ProcMemInfo.total_memory_mb() {
        store.set_capability(total_mb);
    }

    match args.cmd {
        Some(Command::Show) | None => show(&store),
        Some(Command::Get { name }) => {
            println!("{}", store.get(&name)?);
        }
        Some(Command::Set { name, value }) => {
            let key: SettingKey = name.parse()?;
            let notified = Rc::new(Cell::new(false));
            let flag = Rc::clone(&notified);
            store.subscribe(&name, move |value| {
                flag.set(true);
                println!("{key} = {}", derived::display_text(key, value));
            })?;
            store.set_key(key, parse_value(&value)?)?;
            if !notified.get() {
                println!("{key} unchanged");
            }
        }
        Some(Command::Reset) => {
            for key in SettingKey::ALL {
                store.set_key(key, key.default_value())?;
            }
            show(&store);
        }
        Some(Command::Bounds) => {
            let (lo, hi) = store.memory_range();
            println!("memoryUseMb              {lo}..={hi} MB");
            println!("rawVideoMemoryUseMb      {lo}..={hi} MB");
            println!("jpegQuality              {JPEG_QUALITY_MIN}..={JPEG_QUALITY_MAX}");
            println!("cameraPreviewQuality     0..={PREVIEW_QUALITY_MAX}");
        }
    }

    Ok(())
}
