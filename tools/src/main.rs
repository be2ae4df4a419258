//! ward-runner: headless driver for the CareMate view cores.
//!
//! Usage:
//!   ward-runner --seed 12345 --ticks 60
//!   ward-runner --seed 12345 --ticks 3 --live
//!   ward-runner --ticks 60 --json

use anyhow::Result;
use caremate_core::{
    action::{CenterAttr, ContactField, DraftField, EditorAction, RegistryAction},
    config::FeedConfig,
    editor::CapacityEditor,
    feed::BedFeed,
    registry::{BedRegistry, HospitalRecord},
    rng::FeedRng,
    types::Tick,
};
use std::env;
use std::sync::{Arc, Mutex};

#[derive(serde::Serialize)]
struct RunSummary<'a> {
    seed: u64,
    ticks: u64,
    hospitals: &'a [HospitalRecord],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 60u64);
    let live = args.iter().any(|a| a == "--live");
    let json = args.iter().any(|a| a == "--json");
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => FeedConfig::load(&w[1])?,
        None => FeedConfig::default(),
    };
    log::debug!("runner: config {config:?}");

    if !json {
        println!("CareMate — ward-runner");
        println!("  started:  {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!("  seed:     {seed}");
        println!("  ticks:    {ticks}");
        println!(
            "  interval: {} ms{}",
            config.tick_interval_ms,
            if live { "" } else { " (synchronous)" }
        );
        println!();
    }

    let mut registry = if live {
        run_live(&config, seed, ticks)?
    } else {
        run_synchronous(&config, seed, ticks, json)?
    };

    if !json {
        print_registry(&registry);
    }

    demo_booking(&mut registry, ticks, json)?;

    if json {
        let summary = RunSummary {
            seed,
            ticks,
            hospitals: registry.records(),
        };
        println!("{}", serde_json::to_string(&summary)?);
    }

    demo_editor(json)?;
    Ok(())
}

/// Drive the feed tick-by-tick without waiting out the interval.
fn run_synchronous(config: &FeedConfig, seed: u64, ticks: u64, json: bool) -> Result<BedRegistry> {
    let mut registry = BedRegistry::seeded();
    let mut rng = FeedRng::new(seed);
    for tick in 1..=ticks {
        for event in registry.tick(tick, config.max_delta, &mut rng) {
            if json {
                println!("{}", serde_json::to_string(&event)?);
            }
        }
    }
    Ok(registry)
}

/// Run the real timer thread for the requested number of intervals.
fn run_live(config: &FeedConfig, seed: u64, ticks: u64) -> Result<BedRegistry> {
    let registry = Arc::new(Mutex::new(BedRegistry::seeded()));
    let mut feed = BedFeed::new(Arc::clone(&registry), config.clone(), seed);
    feed.start()?;
    std::thread::sleep(config.tick_interval() * ticks as u32 + config.tick_interval() / 2);
    feed.stop();
    // The feed handle keeps its own Arc clone; release it before unwrapping.
    drop(feed);

    let registry = Arc::try_unwrap(registry)
        .map_err(|_| anyhow::anyhow!("feed still holds the registry after stop"))?;
    Ok(registry.into_inner().unwrap_or_else(|e| e.into_inner()))
}

/// Scripted booking against the first hospital in the list.
fn demo_booking(registry: &mut BedRegistry, last_tick: Tick, json: bool) -> Result<()> {
    let Some(first) = registry.records().first() else {
        return Ok(());
    };
    let hospital_id = first.id;

    let mut events = Vec::new();
    events.extend(registry.apply(RegistryAction::Select { hospital_id }, last_tick));
    registry.update_contact_field(ContactField::Name, "R. Verma");
    registry.update_contact_field(ContactField::Contact, "+91-98100-00000");
    events.extend(registry.apply(RegistryAction::ConfirmBooking, last_tick + 1));

    for event in &events {
        if json {
            println!("{}", serde_json::to_string(event)?);
        } else if let Some(notice) = event.notice() {
            println!("NOTICE: {notice}");
        }
    }
    Ok(())
}

fn print_registry(registry: &BedRegistry) {
    println!();
    println!("=== HOSPITAL AVAILABILITY ===");
    println!("  {:<48} {:>5}", "hospital", "beds");
    for record in registry.records() {
        println!("  {:<48} {:>5}", record.name, record.beds_available);
    }
}

/// Fill a capacity draft through the reducer, submit it, and print the
/// derived dashboard.
fn demo_editor(json: bool) -> Result<()> {
    let mut editor = CapacityEditor::new();
    let fields = [
        (DraftField::TotalBeds, "180"),
        (DraftField::AvailableBeds, "64"),
        (
            DraftField::Center {
                index: 0,
                attr: CenterAttr::Name,
            },
            "General OPD",
        ),
        (
            DraftField::Center {
                index: 0,
                attr: CenterAttr::PatientCount,
            },
            "30",
        ),
        (
            DraftField::Center {
                index: 0,
                attr: CenterAttr::MaxCapacity,
            },
            "50",
        ),
    ];
    for (field, value) in fields {
        editor.apply(EditorAction::UpdateField {
            field,
            value: value.to_string(),
        });
    }
    editor.apply(EditorAction::AddCenter);
    editor.update_field(
        DraftField::Center {
            index: 1,
            attr: CenterAttr::Name,
        },
        "Pediatrics OPD",
    );
    editor.update_field(
        DraftField::Center {
            index: 1,
            attr: CenterAttr::PatientCount,
        },
        "58",
    );
    editor.update_field(
        DraftField::Center {
            index: 1,
            attr: CenterAttr::MaxCapacity,
        },
        "45",
    );

    let events = editor.apply(EditorAction::Submit);
    if json {
        for event in &events {
            println!("{}", serde_json::to_string(event)?);
        }
        return Ok(());
    }

    let Some(snapshot) = editor.published() else {
        return Ok(());
    };
    println!();
    println!("=== CAPACITY DASHBOARD ===");
    println!(
        "  {} of {} beds available",
        snapshot.available_beds, snapshot.total_beds
    );
    println!(
        "  {:<18} {:>8} {:>8} {:>9}",
        "OPD", "patients", "capacity", "available"
    );
    for center in &snapshot.centers {
        println!(
            "  {:<18} {:>8} {:>8} {:>9}",
            center.name,
            center.patient_count.to_string(),
            center.max_capacity.to_string(),
            center.available().to_string()
        );
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
