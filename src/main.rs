use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use serde_json::Value;
use tf_idf_recommender::{InMemoryCatalog, Product, RankerConfig, Recommender};

/// Recommend similar products from a JSON catalog
#[derive(Parser, Debug)]
#[command(name = "recommend")]
#[command(about = "Content-based product recommendations", long_about = None)]
struct Args {
    /// JSON array of products: {"id", "name", "description", "is_available"}
    #[arg(short, long)]
    catalog: PathBuf,

    /// Id of the product being viewed
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    focal: Option<String>,

    /// Free text to rank the whole catalog against
    #[arg(short, long)]
    text: Option<String>,

    /// Number of recommendations (overrides the config file)
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// JSON ranker config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        _ => Level::ERROR,
    };
    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => RankerConfig::from_json_file(path)?,
        None => RankerConfig::default(),
    };
    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }
    config.validate()?;
    info!(top_k = config.top_k, stop_words = ?config.analyzer.stop_words, "ranker configured");

    // ids may be numbers or strings in the catalog
    let catalog: InMemoryCatalog<Value> = InMemoryCatalog::from_json_file(&args.catalog)?;
    let recommender = Recommender::new(catalog, &config)?;

    let recs: Vec<(Product<Value>, f64)> = match (&args.focal, &args.text) {
        (Some(id), _) => {
            let id = resolve_id(recommender.store().products(), id);
            recommender.recommend_for(&id)?
        }
        (None, Some(text)) => recommender.recommend_for_text(text)?,
        (None, None) => return Err("either --focal or --text is required".into()),
    };

    if recs.is_empty() {
        info!("no similar products");
    }
    for (product, score) in recs {
        println!("{:.6}\t{}\t{}", score, display_id(&product.id), product.name);
    }
    Ok(())
}

/// Catalog id whose printed form is `arg`, so `1001` finds both `1001` and `"1001"`.
/// Unknown ids stay strings and fail the lookup downstream.
fn resolve_id(products: &[Product<Value>], arg: &str) -> Value {
    products
        .iter()
        .find(|p| display_id(&p.id) == arg)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| Value::String(arg.to_string()))
}

fn display_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommender(json: &str) -> Recommender<InMemoryCatalog<Value>> {
        let catalog = InMemoryCatalog::from_json_str(json).unwrap();
        Recommender::new(catalog, &RankerConfig::default()).unwrap()
    }

    fn recommend_ids(recommender: &Recommender<InMemoryCatalog<Value>>, arg: &str) -> Vec<String> {
        let id = resolve_id(recommender.store().products(), arg);
        recommender
            .recommend_for(&id)
            .unwrap()
            .into_iter()
            .map(|(p, _)| display_id(&p.id))
            .collect()
    }

    #[test]
    fn numeric_ids_resolve() {
        let r = recommender(
            r#"[{"id": 1001, "name": "red leather shoes"}, {"id": 1002, "name": "red leather belt"}]"#,
        );
        assert_eq!(recommend_ids(&r, "1001"), vec!["1002"]);
    }

    #[test]
    fn numeric_looking_string_ids_resolve() {
        let r = recommender(
            r#"[{"id": "1001", "name": "red leather shoes"}, {"id": "1002", "name": "red leather belt"},
                {"id": "true", "name": "leather wallet"}]"#,
        );
        assert_eq!(recommend_ids(&r, "1001"), vec!["1002", "true"]);
        assert_eq!(resolve_id(r.store().products(), "true"), Value::String("true".to_string()));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let r = recommender(r#"[{"id": "sku-1", "name": "red leather shoes"}]"#);
        let id = resolve_id(r.store().products(), "sku-9");
        assert!(r.recommend_for(&id).is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let args = ["recommend", "--catalog", "c.json", "--focal", "1", "--log-level", "verbose"];
        assert!(Args::try_parse_from(args).is_err());
        let ok = ["recommend", "--catalog", "c.json", "--focal", "1", "--log-level", "debug"];
        assert_eq!(Args::try_parse_from(ok).unwrap().log_level, "debug");
    }
}
