use anyhow::Result;
use log::info;
use serps_request::SerpsRequest;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "search")]
struct Opt {
    /// Phrase to search for
    #[structopt(short, long)]
    phrase: String,

    /// Search engine to query
    #[structopt(short, long, default_value = "google")]
    search_engine: String,

    /// Region code
    #[structopt(short, long)]
    region: Option<String>,

    /// Maximum number of results to return
    #[structopt(short, long)]
    max_results: Option<u64>,
}

fn main() -> Result<()> {
    std::env::set_var("RUST_LOG", "search=info");
    env_logger::init();

    let options = Opt::from_args();

    let mut request = SerpsRequest::new();
    request
        .set_search_engine(options.search_engine)?
        .set_phrase(options.phrase);

    if let Some(region) = options.region {
        request.set_region(region);
    }

    if let Some(max_results) = options.max_results {
        request.set_max_results(max_results);
    }

    info!(
        "request body:\n{}",
        serde_json::to_string_pretty(&request.to_payload())?
    );

    // this is the body a SERPS API client would POST
    println!("{request}");

    Ok(())
}
