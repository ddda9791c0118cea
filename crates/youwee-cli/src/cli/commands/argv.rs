//! `youwee argv <args>...` – pull deep links out of launch arguments.

use anyhow::Result;
use serde_json::json;
use youwee_core::deep_link::{extract_external_links_from_argv, DeepLinkParser, PendingLinks};

pub fn run_argv(parser: &DeepLinkParser, args: &[String]) -> Result<i32> {
    let inbox = PendingLinks::new();
    inbox.enqueue(extract_external_links_from_argv(args));

    let mut accepted = 0usize;
    for link in inbox.take() {
        match parser.parse(&link) {
            Some(request) => {
                accepted += 1;
                let route = parser.route(&request);
                let out = json!({ "request": request, "route": route });
                println!("{}", serde_json::to_string(&out)?);
            }
            None => tracing::debug!("argv link ignored"),
        }
    }

    if accepted == 0 {
        println!("no usable links");
        return Ok(1);
    }
    Ok(0)
}
