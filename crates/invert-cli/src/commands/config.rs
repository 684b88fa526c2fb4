use anyhow::{Context, Result, bail};
use clap::Args;
use invert_infrastructure::ConfigService;

#[derive(Args, Debug, Default)]
pub struct SetArgs {
    /// Recommendations per draw
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Fixed seed for reproducible draws
    #[arg(long, conflicts_with = "clear_seed")]
    pub seed: Option<u64>,

    /// Go back to entropy-seeded draws
    #[arg(long)]
    pub clear_seed: bool,
}

pub fn show(service: &ConfigService) -> Result<()> {
    let config = service.get_config().context("Failed to load configuration")?;

    println!("universe    1..={}", config.rules.universe_max);
    println!("games       {}", config.rules.games);
    println!("pick size   {}", config.rules.capacity);
    println!("draw count  {}", config.draw.count);
    match config.draw.seed {
        Some(seed) => println!("seed        {}", seed),
        None => println!("seed        (entropy)"),
    }
    Ok(())
}

pub fn path(service: &ConfigService) -> Result<()> {
    println!("{}", service.config_path()?.display());
    Ok(())
}

pub fn init(service: &ConfigService, force: bool) -> Result<()> {
    let path = service.init(force)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}

pub fn set(service: &ConfigService, args: &SetArgs) -> Result<()> {
    if args.count.is_none() && args.seed.is_none() && !args.clear_seed {
        bail!("Nothing to set. Pass --count, --seed or --clear-seed");
    }

    let updated = service
        .update(|config| {
            if let Some(count) = args.count {
                config.draw.count = count;
            }
            if args.seed.is_some() {
                config.draw.seed = args.seed;
            }
            if args.clear_seed {
                config.draw.seed = None;
            }
        })
        .context("Failed to update configuration")?;

    println!(
        "✓ draw count {}, seed {}",
        updated.draw.count,
        updated
            .draw
            .seed
            .map_or_else(|| "(entropy)".to_string(), |s| s.to_string())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_requires_a_value() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert!(set(&service, &SetArgs::default()).is_err());
    }

    #[test]
    fn test_set_and_clear_seed() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        set(
            &service,
            &SetArgs {
                count: Some(3),
                seed: Some(12),
                clear_seed: false,
            },
        )
        .unwrap();
        assert_eq!(service.get_config().unwrap().draw.seed, Some(12));

        set(
            &service,
            &SetArgs {
                clear_seed: true,
                ..SetArgs::default()
            },
        )
        .unwrap();
        let config = service.get_config().unwrap();
        assert_eq!(config.draw.seed, None);
        assert_eq!(config.draw.count, 3);
    }

    #[test]
    fn test_zero_count_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let args = SetArgs {
            count: Some(0),
            ..SetArgs::default()
        };
        assert!(set(&service, &args).is_err());
    }
}
