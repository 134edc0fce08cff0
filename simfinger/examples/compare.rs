use simfinger::FingerprintBuilder;

fn main() {
    // Fingerprints two nearly identical questions with 32-bit SHA-1 simhash.
    let builder = FingerprintBuilder::new().width(32);

    let fp1 = builder.build_from_text("Hi, how are you ?").unwrap();
    let fp2 = builder.build_from_text("Hi, how are you darling ??").unwrap();

    // The shared tokens keep the Hamming distance small.
    assert_eq!(fp1.distance(&fp2), 6);
    assert_eq!(fp1.distsim(&fp2), 81.25);

    println!(
        "Similarity (in [0,100]) between text1 and text2 : {}",
        fp1.distsim(&fp2)
    );
}
