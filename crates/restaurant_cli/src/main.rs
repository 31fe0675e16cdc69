//! Demo driver for `restaurant_core`.
//!
//! # Responsibility
//! - Build the two sample orders, check them out and print receipts.
//! - Walk the second order through its iterator and re-sum it.
//!
//! Environment:
//! - `RESTAURANT_SEED`: u64 seed for reproducible promotion draws.
//! - `RESTAURANT_LOG_DIR`: absolute directory; enables file logging.
//! - `RESTAURANT_LOG_LEVEL`: log level, defaults by build mode.

use log::info;
use restaurant_core::{
    core_version, default_log_level, init_logging, IterationSummary, Menu, OrderService,
    PromotionEngine, RandomSource, SeededRandom, ServiceResult, ThreadRandom,
};
use std::error::Error;

const FIRST_ORDER: &[(&str, u32)] = &[
    ("Arepa con queso", 2),
    ("Café", 1),
    ("Bandeja Paisa", 1),
    ("Arroz con Leche", 1),
];

const SECOND_ORDER: &[(&str, u32)] = &[
    ("Ajiaco", 1),
    ("Jugo de Lulo", 1),
    ("Sancocho de gallina", 1),
    ("Pastel Tres Leches", 1),
    ("Arepas con Huevo", 5),
    ("Empanadas", 2),
    ("Torta de Guanábana", 1),
    ("Agua de panela", 1),
];

struct CliConfig {
    seed: Option<u64>,
    log_dir: Option<String>,
    log_level: String,
}

impl CliConfig {
    fn from_env() -> Result<Self, Box<dyn Error>> {
        let seed = match std::env::var("RESTAURANT_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|err| format!("RESTAURANT_SEED must be a u64, got `{raw}`: {err}"))?,
            ),
            Err(_) => None,
        };
        let log_dir = std::env::var("RESTAURANT_LOG_DIR").ok();
        let log_level = std::env::var("RESTAURANT_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        Ok(Self {
            seed,
            log_dir,
            log_level,
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = CliConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }
    info!(
        "event=cli_start module=cli version={} seeded={}",
        core_version(),
        config.seed.is_some()
    );

    let menu = Menu::colombian()?;
    match config.seed {
        Some(seed) => run(menu, SeededRandom::new(seed))?,
        None => run(menu, ThreadRandom)?,
    }
    Ok(())
}

fn run<R: RandomSource>(menu: Menu, random: R) -> ServiceResult<()> {
    let mut service = OrderService::new(menu, PromotionEngine::with_default_rules(random));

    println!("---Orden 1---");
    let mut first = service.open_order(true);
    for (name, quantity) in FIRST_ORDER {
        service.add_by_name(&mut first, name, *quantity)?;
    }
    println!("{}", service.checkout(&mut first));

    println!("\n\n---Orden 2---");
    let mut second = service.open_order(false);
    for (name, quantity) in SECOND_ORDER {
        service.add_by_name(&mut second, name, *quantity)?;
    }
    println!("{}", service.checkout(&mut second));

    println!("\n\n---Items de la orden 2---");
    for (index, label) in second.iter().enumerate() {
        println!("Item {}: {}", index + 1, label);
    }

    println!("\n\n---Total de la orden 2---");
    println!("{}", IterationSummary::from_order(&second));
    Ok(())
}
