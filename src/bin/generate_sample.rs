//! Writes synthetic `<ALG>_<dataset>_pr.txt` result files so the viewer has
//! something to show without running the miners.
//!
//! Usage: `generate_sample [DATA_DIR] [DATASET]`

use std::path::PathBuf;

use clap::Parser;

/// Number of planted ("special") itemsets recall is measured against.
const SPECIAL_ITEMSETS: usize = 30;

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
}

/// Simulated miner: how many itemsets it returns and how good its ranking is.
struct Miner {
    name: &'static str,
    mined: usize,
    /// Probability that a returned itemset is one of the planted ones.
    p_special: f64,
    /// Probability that a non-planted returned itemset is still a true one.
    p_background: f64,
    /// Ranking quality decays with k at this rate.
    decay: f64,
}

/// Precision/recall at every top-k cutoff of a simulated ranking.
fn simulate(miner: &Miner, rng: &mut SimpleRng) -> (Vec<f64>, Vec<f64>, usize) {
    let mut precision = Vec::with_capacity(miner.mined);
    let mut recall = Vec::with_capacity(miner.mined);
    let mut in_both = 0usize;
    let mut special_found = 0usize;

    for k in 1..=miner.mined {
        let quality = (-(k as f64) * miner.decay).exp();
        if special_found < SPECIAL_ITEMSETS && rng.next_f64() < miner.p_special * quality {
            special_found += 1;
            in_both += 1;
        } else if rng.next_f64() < miner.p_background * quality {
            in_both += 1;
        }
        precision.push(in_both as f64 / k as f64);
        recall.push(special_found as f64 / SPECIAL_ITEMSETS as f64);
    }
    (precision, recall, miner.mined)
}

#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
#[command(about = "Write synthetic precision-recall result files")]
struct Args {
    /// Root directory; files go to <data_dir>/<dataset>/
    #[arg(default_value = "PrecisionRecall")]
    data_dir: PathBuf,

    /// Dataset name used in the directory and file names
    #[arg(default_value = "Background")]
    dataset: String,
}

/// Result file body in the layout the miners' evaluation writes.
fn result_file_text(
    dataset: &str,
    precision: &[f64],
    recall: &[f64],
    mined: usize,
    time: f64,
) -> String {
    format!(
        "\nSpecial Itemsets: {SPECIAL_ITEMSETS}\n\
         No. mined itemsets: {mined}\n\
         \n======== {dataset} ========\n\
         Special Frequency: {SPECIAL_ITEMSETS}\n\
         Time: {time:.3}\n\
         Precision (all): {precision:?}\n\
         Recall (special): {recall:?}\n"
    )
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let miners = [
        Miner {
            name: "IIM",
            mined: 60,
            p_special: 0.75,
            p_background: 0.9,
            decay: 0.005,
        },
        Miner {
            name: "MTV",
            mined: 40,
            p_special: 0.6,
            p_background: 0.7,
            decay: 0.01,
        },
        Miner {
            name: "SLIM",
            mined: 120,
            p_special: 0.35,
            p_background: 0.6,
            decay: 0.004,
        },
        Miner {
            name: "KRIMP",
            mined: 150,
            p_special: 0.3,
            p_background: 0.55,
            decay: 0.004,
        },
        Miner {
            name: "CHARM",
            mined: 200,
            p_special: 0.15,
            p_background: 0.4,
            decay: 0.002,
        },
    ];

    let dataset = &args.dataset;
    let out_dir = args.data_dir.join(dataset);
    std::fs::create_dir_all(&out_dir)?;

    let mut rng = SimpleRng::new(42);
    for miner in &miners {
        let (precision, recall, mined) = simulate(miner, &mut rng);
        let time = 1.0 + rng.next_f64() * 100.0;
        let text = result_file_text(dataset, &precision, &recall, mined, time);

        let path = out_dir.join(format!("{}_{dataset}_pr.txt", miner.name));
        std::fs::write(&path, text)?;
        println!(
            "Wrote {} operating points to {}",
            precision.len(),
            path.display()
        );
    }

    Ok(())
}
