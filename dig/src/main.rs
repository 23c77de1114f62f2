use std::error::Error;
use configuration::DigConfiguration;
use tracing_subscriber::EnvFilter;

mod cli_args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: cli_args::CliArgs = argh::from_env();

    let mut config = DigConfiguration::load(args.config.clone())?;
    args.apply(&mut config);
    tracing::debug!("configuration: {:?}", config);

    let options = config.query.query_options();
    let (queries, answers) = resolver::resolve_with(
        &config.dns.server_address,
        &args.domain,
        &options,
        config.dns.timeout(),
    )
    .await
    .map_err(|e| {
        tracing::error!("query for {} failed: {}", args.domain, e);
        e
    })?;

    println!("{}", bracketed(&queries));
    println!("{}", bracketed(&answers));

    Ok(())
}

// [a b c]
fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}
