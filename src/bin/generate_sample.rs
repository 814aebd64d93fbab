use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Metric tons of CO2 per kWh of grid electricity.
const GRID_FACTOR: f64 = 0.000_4;

/// Seasonal load profile: winter heating and summer cooling peaks.
fn seasonal_factor(month: usize) -> f64 {
    let angle = 2.0 * std::f64::consts::PI * month as f64 / 12.0;
    1.0 + 0.25 * angle.cos() + 0.1 * (2.0 * angle).cos()
}

fn building_csv(base_kwh: f64, years: &[u32], rng: &mut SimpleRng) -> String {
    let mut out = String::from("Year,Month,Days,Usage,CO2\n");
    for &year in years {
        for month in 0..12 {
            let noise = rng.gauss(0.0, base_kwh * 0.03);
            let usage = (base_kwh * seasonal_factor(month) + noise).max(0.0);
            let co2 = usage * GRID_FACTOR;
            out.push_str(&format!(
                "{year},{},{},{usage:.0},{co2:.3}\n",
                month + 1,
                DAYS_IN_MONTH[month]
            ));
        }
    }
    out
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data"));
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let years = [2022, 2023, 2024];
    let buildings = [
        ("Discovery.csv", 52_000.0),
        ("Colgan.csv", 38_000.0),
        ("KJH.csv", 21_000.0),
    ];

    for (file, base_kwh) in buildings {
        let path = out_dir.join(file);
        fs::write(&path, building_csv(base_kwh, &years, &mut rng))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    let records: Vec<_> = MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(month, name)| {
            let kwh = 110_000.0 * seasonal_factor(month) + rng.gauss(0.0, 2_000.0);
            json!({
                "month": name,
                "CO2_emissions_mt": (kwh * GRID_FACTOR * 1000.0).round() / 1000.0,
                "electricity_consumption_kWh": kwh.round(),
            })
        })
        .collect();
    let path = out_dir.join("ghg-data.json");
    let doc = serde_json::to_string_pretty(&json!({ "data": records }))?;
    fs::write(&path, doc).with_context(|| format!("writing {}", path.display()))?;

    println!(
        "Wrote {} buildings x {} months and ghg-data.json to {}",
        buildings.len(),
        years.len() * 12,
        out_dir.display()
    );
    Ok(())
}
