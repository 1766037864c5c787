// huffman_coding_demo/src/main.rs

use clap::{arg, command};
use huffman_code::{huffman_encode, DisplaySink, EncodingSink, FileSource, StrSource, TextSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_TEXT: &str = "abracadabra";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let matches = command!()
        .arg(arg!([path] "Text file to encode (defaults to a built-in sample)"))
        .arg(arg!(--tree "Also print the Huffman tree structure"))
        .get_matches();

    let source: Box<dyn TextSource> = match matches.get_one::<String>("path") {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(StrSource::new(SAMPLE_TEXT)),
    };
    let symbols = source.read()?;

    println!("Original Text ({} symbols):", symbols.len());
    println!("{}", symbols.iter().collect::<String>());

    // Encoding
    let encoded = huffman_encode(&symbols)?;
    info!(
        symbols = symbols.len(),
        bits = encoded.bits.len(),
        "encoded input"
    );

    DisplaySink::new(std::io::stdout())
        .with_codes(true)
        .with_tree(matches.is_present("tree"))
        .accept(&encoded)?;

    // Decoding
    let decoded = encoded.decode()?;

    // Verify correctness
    if decoded == symbols {
        println!("Decoding successful. The decoded text matches the original input.");
    } else {
        println!("Decoding failed. The decoded text does not match the original input.");
    }

    Ok(())
}
