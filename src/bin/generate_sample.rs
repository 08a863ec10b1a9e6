use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// One output row. Field order matches the header written for it.
#[derive(Serialize)]
struct SalesRow {
    time: i32,
    sales: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<u32>,
}

/// Shape of one generated dataset.
struct TrendSpec {
    file_name: &'static str,
    header: &'static [&'static str],
    first_year: i32,
    last_year: i32,
    base: f64,
    slope: f64,
    noise: f64,
    with_units: bool,
}

const DATASETS: &[TrendSpec] = &[
    TrendSpec {
        file_name: "sales_data1.csv",
        header: &["Time", "Sales"],
        first_year: 2010,
        last_year: 2023,
        base: 120_000.0,
        slope: 8_500.0,
        noise: 6_000.0,
        with_units: false,
    },
    TrendSpec {
        file_name: "sales_data2.csv",
        // Padded headers, as exported by some spreadsheets.
        header: &[" Time", " Sales "],
        first_year: 2005,
        last_year: 2023,
        base: 45_000.0,
        slope: 2_300.0,
        noise: 3_500.0,
        with_units: false,
    },
    TrendSpec {
        file_name: "sales_data3.csv",
        header: &["Time", "Sales", "Units"],
        first_year: 2015,
        last_year: 2023,
        base: 300_000.0,
        slope: -12_000.0,
        noise: 9_000.0,
        with_units: true,
    },
];

/// Minimal deterministic PRNG (xoshiro256**). Seeded with 42 in `main`, so
/// every run writes byte-identical sample files.
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

fn write_dataset(dir: &Path, spec: &TrendSpec, rng: &mut SimpleRng) -> Result<usize> {
    let path = dir.join(spec.file_name);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(spec.header)?;

    let mut rows = 0;
    for (i, year) in (spec.first_year..=spec.last_year).enumerate() {
        let trend = spec.base + spec.slope * i as f64;
        let sales = (rng.gauss(trend, spec.noise) * 100.0).round() / 100.0;
        let units = spec
            .with_units
            .then(|| (sales / 250.0 + rng.gauss(0.0, 20.0)).max(0.0).round() as u32);

        writer.serialize(SalesRow {
            time: year,
            sales,
            units,
        })?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for spec in DATASETS {
        let rows = write_dataset(&out_dir, spec, &mut rng)?;
        println!(
            "Wrote {rows} records to {}",
            out_dir.join(spec.file_name).display()
        );
    }
    Ok(())
}
