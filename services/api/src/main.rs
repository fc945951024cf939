use outreach_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("outreach-api error: {err}");
        std::process::exit(1);
    }
}
