use std::error::Error;
use std::str::FromStr;

use clap::Parser;

use simfinger::{FingerprintBuilder, HashAlgorithm, Operand};

#[derive(Parser, Debug)]
#[clap(
    name = "simfinger-compare",
    about = "A program to compare two texts by locality-sensitive fingerprints."
)]
struct Args {
    /// First text to fingerprint.
    #[clap(short = 'a', long, default_value = "Hi, how are you ?")]
    text1: String,

    /// Second text to fingerprint.
    #[clap(short = 'b', long, default_value = "Hi, how are you darling ??")]
    text2: String,

    /// Fingerprint width in bits (1 to 128). More bits are more sensitive
    /// but cost more accumulation work.
    #[clap(short = 'w', long, default_value = "32")]
    width: usize,

    /// Hash algorithm for token digests
    /// (md5, sha1, sha224, sha256, sha384, sha512, or city64).
    #[clap(short = 'g', long, default_value = "sha1")]
    algorithm: HashAlgorithm,

    /// Optional raw fingerprint integer (decimal) to compare the first text
    /// against, instead of the second text.
    #[clap(short = 'f', long)]
    fingerprint: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let builder = FingerprintBuilder::new()
        .width(args.width)
        .algorithm(args.algorithm);

    let fp1 = builder.build_from_text(&args.text1)?;

    if let Some(raw) = args.fingerprint {
        let operand = Operand::from_str(&raw)?;
        println!("fingerprint1 = {fp1}");
        println!("distance = {}", fp1.distance(operand));
        println!("distsim = {}%", fp1.distsim(operand));
        return Ok(());
    }

    let fp2 = builder.build_from_text(&args.text2)?;

    println!("fingerprint1 = {fp1}");
    println!("fingerprint2 = {fp2}");
    println!("distance = {}", fp1.distance(&fp2));
    println!("distsim = {}%", fp1.distsim(&fp2));

    Ok(())
}
