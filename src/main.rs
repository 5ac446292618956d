use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use semordnilap::{
    config::DEFAULT_MAX_WORD_LEN,
    extract_text, fetch_page, find_related,
    io_utils::{io_cli_error, semordnilap_cli_error},
    normalize, Config,
};

/// Report the palindromes and anagram pairs among the words of a web page.
#[derive(Parser)]
struct Args {
    /// Page to scan. Without it the program does nothing and exits cleanly.
    #[clap(long)]
    url: Option<String>,
    /// Longest word considered; anagram search is factorial in word length
    #[clap(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,
    /// Where to stage the downloaded markup
    #[clap(long, default_value = "page.html")]
    cache: PathBuf,
    /// Keep the staged markup file after the run
    #[clap(long)]
    keep_cache: bool,
    /// Emit JSON instead of tab-separated words
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    url: &'a str,
    candidate_words: usize,
    related: &'a [&'a String],
}

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let Some(url) = args.url else {
        return Ok(());
    };

    let config = Config {
        max_word_len: args.max_word_len,
        cache_path: args.cache,
    };
    config
        .validate()
        .map_err(|e| semordnilap_cli_error("invalid arguments", e))?;

    let markup = fetch_page(&url, &config.cache_path)
        .map_err(|e| semordnilap_cli_error("retrieval failed", e))?;
    let words = normalize(extract_text(&markup), config.max_word_len);
    let related = find_related(&words);

    if !args.keep_cache {
        fs::remove_file(&config.cache_path)
            .map_err(|e| io_cli_error("removing page cache", &config.cache_path, e))?;
    }

    let mut sorted: Vec<&String> = related.iter().collect();
    sorted.sort();

    if args.json {
        let report = Report {
            url: &url,
            candidate_words: words.len(),
            related: &sorted,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", sorted.iter().map(|s| s.as_str()).collect::<Vec<_>>().join("\t"));
    }

    Ok(())
}
