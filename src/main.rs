use anyhow::Result;
use serde::Serialize;
use skill::config::Config;
use skill::lang::{parse_lang, Lang};
use tracing::info;

/// One line of output per resolved code
#[derive(Debug, Serialize)]
struct Resolution<'a> {
    input: &'a str,
    lang: Lang,
    name: &'static str,
    native_name: &'static str,
    fallback: bool,
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skill=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Default language: {} ({} enabled)",
        config.default_lang,
        config.enabled_langs.len()
    );

    let codes: Vec<String> = std::env::args().skip(1).collect();

    if codes.is_empty() {
        for lang in &config.enabled_langs {
            let line = resolution(lang.code(), *lang, false);
            println!("{}", serde_json::to_string(&line)?);
        }
        return Ok(());
    }

    for code in &codes {
        let lang = config.resolve(code);
        let fallback = parse_lang(code).map_or(true, |parsed| parsed != lang);
        println!("{}", serde_json::to_string(&resolution(code, lang, fallback))?);
    }

    Ok(())
}

fn resolution(input: &str, lang: Lang, fallback: bool) -> Resolution<'_> {
    Resolution {
        input,
        lang,
        name: lang.name(),
        native_name: lang.native_name(),
        fallback,
    }
}
