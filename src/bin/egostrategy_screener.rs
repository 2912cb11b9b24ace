use egostrategy_screener::config::Config;
use egostrategy_screener::models::stock::Sector;
use egostrategy_screener::screener::{parse_query, Screener};
use egostrategy_screener::services::data_service::DataService;
use egostrategy_screener::util;

use anyhow::{bail, Context};
use clap::{App, Arg, ArgMatches, SubCommand};
use log::info;

fn data_arg() -> Arg<'static> {
    Arg::with_name("data")
        .long("data")
        .value_name("PATH|URL")
        .help("Stock data document (local path or http(s) URL)")
        .takes_value(true)
        .default_value("data/stocks.json")
}

fn build_config(matches: &ArgMatches) -> Config {
    let data = matches.value_of("data").unwrap_or("data/stocks.json");
    if data.starts_with("http://") || data.starts_with("https://") {
        Config::new().with_data_url(data)
    } else {
        Config::new().with_data_path(data)
    }
}

fn parse_limit(value: &str) -> anyhow::Result<usize> {
    value
        .parse::<usize>()
        .with_context(|| format!("--limit must be a positive integer, got {:?}", value))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 创建基本的命令行应用
    let app = App::new("Screener")
        .version("1.0.0")
        .author("EgoStrategy Team")
        .about("Keyword-driven stock screener");

    // 在开发模式下添加调试参数
    #[cfg(debug_assertions)]
    let app = app.arg(
        Arg::with_name("debug")
            .long("debug")
            .help("Enable debug logging")
            .takes_value(false),
    );

    // 添加子命令
    let app = app
        .subcommand(
            SubCommand::with_name("screen")
                .about("Screen stocks with a natural-language query")
                .arg(
                    Arg::with_name("query")
                        .short('q')
                        .long("query")
                        .value_name("QUERY")
                        .help("Query such as \"cheap quality banking\"")
                        .required(true)
                        .takes_value(true),
                )
                .arg(data_arg())
                .arg(
                    Arg::with_name("limit")
                        .short('l')
                        .long("limit")
                        .value_name("LIMIT")
                        .help("Maximum number of results")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("min-score")
                        .long("min-score")
                        .value_name("SCORE")
                        .help("Drop results scoring below this value (0-100)")
                        .takes_value(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("parse")
                .about("Show the filters a query produces")
                .arg(
                    Arg::with_name("query")
                        .short('q')
                        .long("query")
                        .value_name("QUERY")
                        .required(true)
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("explore")
                .about("Explore loaded stock data")
                .arg(
                    Arg::with_name("symbol")
                        .short('s')
                        .long("symbol")
                        .value_name("SYMBOL")
                        .help("Stock symbol to explore")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("sector")
                        .long("sector")
                        .value_name("SECTOR")
                        .help("Sector to filter by (banking, it, pharma, ...)")
                        .takes_value(true),
                )
                .arg(data_arg())
                .arg(
                    Arg::with_name("limit")
                        .short('l')
                        .long("limit")
                        .value_name("LIMIT")
                        .help("Limit the number of records to display")
                        .takes_value(true)
                        .default_value("10"),
                ),
        );

    let matches = app.get_matches();

    #[cfg(debug_assertions)]
    let default_level = if matches.is_present("debug") { "debug" } else { "info" };
    #[cfg(not(debug_assertions))]
    let default_level = "info";

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Some(matches) = matches.subcommand_matches("screen") {
        let query = matches.value_of("query").unwrap_or_default();
        let min_score = matches
            .value_of("min-score")
            .unwrap_or("0")
            .parse::<u8>()
            .context("--min-score must be an integer between 0 and 100")?;
        if min_score > 100 {
            bail!("--min-score must be an integer between 0 and 100");
        }

        let mut config = build_config(matches).with_min_score(min_score);
        if let Some(limit) = matches.value_of("limit") {
            config = config.with_result_limit(parse_limit(limit)?);
        }

        let screener = Screener::new(config.screener_config());
        let sources = config.sources()?;
        let service = DataService::new(config, sources);
        let stocks = service.load_records().await;

        let report = screener.screen(&stocks, query);

        if matches.is_present("json") {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        info!("Filters: {}", serde_json::to_string(&report.filters)?);
        info!(
            "Matched {} of {} stocks, showing {}",
            report.matched,
            report.total,
            report.results.len()
        );
        println!(
            "{:<4} {:<12} {:<28} {:<10} {:>12} {:>8} {:>7} {:>7} {:>6} {:>6}",
            "#", "Symbol", "Name", "Sector", "Price", "Change", "PE", "ROE", "RSI", "Score"
        );
        println!("{:-<110}", "");
        for (i, result) in report.results.iter().enumerate() {
            println!("{}", util::format_result_row(i + 1, result));
        }
        if report.results.is_empty() {
            println!("No stocks match this query");
        }
    } else if let Some(matches) = matches.subcommand_matches("parse") {
        let query = matches.value_of("query").unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&parse_query(query))?);
    } else if let Some(matches) = matches.subcommand_matches("explore") {
        let limit = parse_limit(matches.value_of("limit").unwrap_or("10"))?;

        let config = build_config(matches);
        let sources = config.sources()?;
        let provider = DataService::new(config, sources).load_provider().await;

        info!("Found {} stocks", provider.get_all_stocks().len());

        let stocks: Vec<_> = match (matches.value_of("symbol"), matches.value_of("sector")) {
            (Some(symbol), _) => provider
                .get_stock_by_symbol(&symbol.to_uppercase())
                .into_iter()
                .collect(),
            (None, Some(sector)) => provider.get_stocks_by_sector(&Sector::from(sector.to_string())),
            (None, None) => provider.get_all_stocks().iter().collect(),
        };

        info!("Filtered to {} stocks", stocks.len());

        for stock in stocks.iter().take(limit) {
            println!(
                "{:<12} {:<28} {:<10} {:>12} {:>8}  PE {:.1}  ROE {:.1}  RSI {:.1}",
                stock.symbol,
                stock.name,
                stock.sector,
                util::format_price(stock.price),
                util::format_percent(stock.change),
                stock.pe,
                stock.roe,
                stock.rsi
            );
        }
        if stocks.len() > limit {
            println!("... and {} more stocks", stocks.len() - limit);
        }
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}
