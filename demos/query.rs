use simple_ntp::{client, DisplayOptions, QueryInput};
use std::time::Instant;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let host = std::env::args().nth(1).unwrap_or_else(|| "time.google.com".to_string());

    let mut input = QueryInput::new(host.clone());
    input.timeout_secs = 5;

    let options = DisplayOptions {
        show_ipv4_form: true,
        milliseconds: true,
    };

    println!("Querying {} (port {}, timeout {}s)", host, input.port, input.timeout_secs);
    let start = Instant::now();

    match client::probe_input(&input, options).await {
        Ok(fields) => {
            println!("Reply after {:?}\n", start.elapsed());
            for (label, value) in fields.rows() {
                println!("{:<22} {}", format!("{}:", label), value);
            }
        }
        Err(e) => {
            eprintln!("Query failed ({:?}): {}", e.class(), e);
            std::process::exit(1);
        }
    }
}
